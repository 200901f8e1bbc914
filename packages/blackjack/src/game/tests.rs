use super::*;
use crate::{Card, Suit};
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Declines every offer and counts the frames it was shown.
#[derive(Default)]
struct DecliningTable {
    frames: usize,
    prompts: Vec<String>,
}

impl Table for DecliningTable {
    fn render(&mut self, _view: &TableView<'_>, _pace: Pace) -> Result<(), Error> {
        self.frames += 1;
        Ok(())
    }

    fn ask_yes_no(&mut self, prompt: &str) -> Result<bool, Error> {
        self.prompts.push(prompt.to_string());
        Ok(false)
    }

    fn ask_amount(&mut self, _prompt: &str) -> Result<Money, Error> {
        Err(Error::InvalidInput("no amount".to_string()))
    }

    fn announce(&mut self, _message: &str) -> Result<(), Error> {
        Ok(())
    }

    fn wait_for_enter(&mut self, _prompt: &str) -> Result<(), Error> {
        Ok(())
    }
}

fn stacked_game(ranks: &[u8]) -> Game<DecliningTable> {
    let cards = ranks.iter().map(|&rank| Card::new(Suit::Clubs, rank).unwrap());
    let shoe = Shoe::stacked(cards, ChaCha8Rng::seed_from_u64(1));
    let rules = TableRules {
        reshuffle_threshold: 0,
        ..TableRules::default()
    };
    Game::with_shoe(rules, shoe, DecliningTable::default())
}

#[test]
fn test_new_game_rejects_bad_rules() {
    let rules = TableRules {
        num_decks: 0,
        ..TableRules::default()
    };
    assert!(matches!(
        Game::new(rules, DecliningTable::default()),
        Err(Error::InvalidRules(_))
    ));
}

#[test]
fn test_new_game_builds_full_shoe() {
    let game = Game::new(TableRules::default(), DecliningTable::default()).unwrap();
    assert_eq!(game.shoe().len(), 312);
    assert_eq!(game.phase(), GamePhase::NotStarted);
    assert_eq!(game.ledger().wallet(), Money::from_dollars(200));
}

#[test]
fn test_round_ends_in_settlement() {
    // Dealer 10 + 7, player 10 + 8, player stands
    let mut game = stacked_game(&[10, 10, 7, 8]);
    let summary = game.play_round().unwrap();

    assert_eq!(game.phase(), GamePhase::Settlement);
    assert_eq!(summary.round, 1);
    assert_eq!(summary.outcome, Outcome::PlayerHigher);
    assert_eq!(summary.wallet, Money::from_dollars(225));
    assert_eq!(game.table().prompts, vec!["Hit?".to_string()]);
}

#[test]
fn test_dealer_hole_card_revealed_by_settlement() {
    let mut game = stacked_game(&[10, 10, 7, 8]);
    game.play_round().unwrap();
    assert!(game.dealer().is_revealed());
}

#[test]
fn test_frames_per_simple_round() {
    // 4 deal frames, 1 reveal, 1 payout
    let mut game = stacked_game(&[10, 10, 7, 8]);
    game.play_round().unwrap();
    assert_eq!(game.table().frames, 6);
}

#[test]
fn test_empty_shoe_aborts_round() {
    let mut game = stacked_game(&[10, 10, 7]);
    assert_eq!(game.play_round().unwrap_err(), Error::EmptyShoe);
}

#[test]
fn test_unsettled_round_not_counted() {
    let mut game = stacked_game(&[10, 10, 7]);
    assert!(game.play_round().is_err());
    assert_eq!(game.rounds_played(), 0);
    assert_eq!(game.abandoned_bet(), Some(Money::from_dollars(25)));
}

#[test]
fn test_run_stops_after_max_rounds() {
    let mut game = stacked_game(&[10, 10, 7, 8, 10, 10, 7, 8]);
    game.run(Some(2)).unwrap();
    assert_eq!(game.rounds_played(), 2);
    assert_eq!(game.ledger().wallet(), Money::from_dollars(250));
}
