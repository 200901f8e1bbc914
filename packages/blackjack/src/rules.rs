use crate::{Error, Money};
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Dealer draws below this total and stands on it, soft or hard.
pub const DEALER_STANDS_ON: u8 = 17;

/// Two-card totals on which the player is offered a double down.
pub const DOUBLE_DOWN_TOTALS: RangeInclusive<u8> = 9..=11;

/// Most cards one round can take from the shoe. The player hits only below
/// 21 and the dealer only below 17, and every card counts at least 1.
pub const MAX_CARDS_PER_ROUND: usize = 21 + 17;

/// Largest bet or starting wallet a table accepts: one billion dollars.
pub const MAX_STAKE: Money = Money::from_dollars(1_000_000_000);

/// Table setup for a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRules {
    /// Number of decks in the shoe
    pub num_decks: u8,

    /// Reclaim the discard pile when a round starts with fewer cards than this
    pub reshuffle_threshold: usize,

    /// Wallet balance at the first round
    pub starting_wallet: Money,

    /// Bet placed at the start of every round
    pub bet: Money,

    /// Seed for the shuffle; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for TableRules {
    fn default() -> Self {
        Self {
            num_decks: 6,
            reshuffle_threshold: 75,
            starting_wallet: Money::from_dollars(200),
            bet: Money::from_dollars(25),
            seed: None,
        }
    }
}

impl TableRules {
    pub fn validate(&self) -> Result<(), Error> {
        if self.num_decks == 0 {
            return Err(Error::InvalidRules(
                "Shoe needs at least one deck".to_string(),
            ));
        }
        if !self.bet.is_positive() {
            return Err(Error::InvalidRules(format!(
                "Bet must be positive, got {}",
                self.bet
            )));
        }
        if self.bet > MAX_STAKE || self.starting_wallet.abs() > MAX_STAKE {
            return Err(Error::InvalidRules(format!(
                "Bet and wallet are limited to {MAX_STAKE}"
            )));
        }
        if self.reshuffle_threshold < MAX_CARDS_PER_ROUND {
            return Err(Error::InvalidRules(format!(
                "Reshuffle threshold must be at least {MAX_CARDS_PER_ROUND} cards, got {}",
                self.reshuffle_threshold
            )));
        }
        Ok(())
    }

    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let rules = TableRules::default();
        assert_eq!(rules.num_decks, 6);
        assert_eq!(rules.reshuffle_threshold, 75);
        assert_eq!(rules.starting_wallet, Money::from_dollars(200));
        assert_eq!(rules.bet, Money::from_dollars(25));
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_zero_decks_rejected() {
        let rules = TableRules {
            num_decks: 0,
            ..TableRules::default()
        };
        assert!(matches!(rules.validate(), Err(Error::InvalidRules(_))));
    }

    #[test]
    fn test_non_positive_bet_rejected() {
        let rules = TableRules {
            bet: Money::ZERO,
            ..TableRules::default()
        };
        assert!(matches!(rules.validate(), Err(Error::InvalidRules(_))));
    }

    #[test]
    fn test_low_reshuffle_threshold_rejected() {
        for reshuffle_threshold in [0, 4, MAX_CARDS_PER_ROUND - 1] {
            let rules = TableRules {
                num_decks: 1,
                reshuffle_threshold,
                ..TableRules::default()
            };
            assert!(matches!(rules.validate(), Err(Error::InvalidRules(_))));
        }

        let rules = TableRules {
            num_decks: 1,
            reshuffle_threshold: MAX_CARDS_PER_ROUND,
            ..TableRules::default()
        };
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_single_deck_covers_a_round() {
        assert!(crate::DECK_SIZE >= MAX_CARDS_PER_ROUND);
    }

    #[test]
    fn test_oversized_stakes_rejected() {
        let huge = Money::from_cents(i64::MAX / 2);
        let bet = TableRules {
            bet: huge,
            ..TableRules::default()
        };
        assert!(matches!(bet.validate(), Err(Error::InvalidRules(_))));

        let wallet = TableRules {
            starting_wallet: huge,
            ..TableRules::default()
        };
        assert!(matches!(wallet.validate(), Err(Error::InvalidRules(_))));

        let at_limit = TableRules {
            bet: MAX_STAKE,
            starting_wallet: MAX_STAKE,
            ..TableRules::default()
        };
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_double_down_totals() {
        assert!(!DOUBLE_DOWN_TOTALS.contains(&8));
        assert!(DOUBLE_DOWN_TOTALS.contains(&9));
        assert!(DOUBLE_DOWN_TOTALS.contains(&11));
        assert!(!DOUBLE_DOWN_TOTALS.contains(&12));
    }
}
