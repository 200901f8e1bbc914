use crate::Money;
use serde::{Deserialize, Serialize};

/// Wallet balance plus the stakes riding on the current round.
///
/// No bounds are enforced: the wallet may go negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    wallet: Money,
    bet: Money,
    insurance: Option<Money>,
}

impl Ledger {
    pub fn new(wallet: Money) -> Self {
        Self {
            wallet,
            bet: Money::ZERO,
            insurance: None,
        }
    }

    pub fn wallet(&self) -> Money {
        self.wallet
    }

    pub fn bet(&self) -> Money {
        self.bet
    }

    pub fn insurance(&self) -> Option<Money> {
        self.insurance
    }

    pub fn debit(&mut self, amount: Money) {
        self.wallet -= amount;
    }

    pub fn credit(&mut self, amount: Money) {
        self.wallet += amount;
    }

    /// Opens a new round's book: sets the bet, drops last round's insurance
    /// and takes the bet from the wallet.
    pub fn place_bet(&mut self, amount: Money) {
        self.bet = amount;
        self.insurance = None;
        self.debit(amount);
    }

    /// Takes an insurance stake of at most half the bet. Returns the stake, or
    /// `None` when `amount` is not positive.
    pub fn place_insurance(&mut self, amount: Money) -> Option<Money> {
        if !amount.is_positive() {
            return None;
        }
        let stake = amount.min(self.bet.half());
        self.insurance = Some(stake);
        self.debit(stake);
        Some(stake)
    }

    /// Matches the bet from the wallet. Returns the new bet.
    pub fn double_down(&mut self) -> Money {
        self.debit(self.bet);
        self.bet = self.bet.times(2);
        self.bet
    }

    pub fn pay_insurance(&mut self) -> Money {
        let payout = self.insurance.map_or(Money::ZERO, |stake| stake.times(2));
        self.credit(payout);
        payout
    }

    pub fn pay_win(&mut self) -> Money {
        let payout = self.bet.times(2);
        self.credit(payout);
        payout
    }

    pub fn refund_bet(&mut self) -> Money {
        let refund = self.bet;
        self.credit(refund);
        refund
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dollars(n: i64) -> Money {
        Money::from_dollars(n)
    }

    #[test]
    fn test_place_bet_debits_wallet() {
        let mut ledger = Ledger::new(dollars(200));
        ledger.place_bet(dollars(25));
        assert_eq!(ledger.wallet(), dollars(175));
        assert_eq!(ledger.bet(), dollars(25));
    }

    #[test]
    fn test_place_bet_clears_previous_insurance() {
        let mut ledger = Ledger::new(dollars(200));
        ledger.place_bet(dollars(25));
        ledger.place_insurance(dollars(10));
        ledger.place_bet(dollars(25));
        assert_eq!(ledger.insurance(), None);
    }

    #[test]
    fn test_insurance_capped_at_half_bet() {
        let mut ledger = Ledger::new(dollars(200));
        ledger.place_bet(dollars(25));
        assert_eq!(ledger.place_insurance(dollars(20)), Some(Money::from_cents(1250)));
        assert_eq!(ledger.wallet(), Money::from_cents(16250));
    }

    #[test]
    fn test_insurance_below_cap_taken_as_is() {
        let mut ledger = Ledger::new(dollars(200));
        ledger.place_bet(dollars(25));
        assert_eq!(ledger.place_insurance(dollars(5)), Some(dollars(5)));
        assert_eq!(ledger.wallet(), dollars(170));
    }

    #[test]
    fn test_insurance_ignores_non_positive_amount() {
        let mut ledger = Ledger::new(dollars(200));
        ledger.place_bet(dollars(25));
        assert_eq!(ledger.place_insurance(Money::ZERO), None);
        assert_eq!(ledger.place_insurance(dollars(-5)), None);
        assert_eq!(ledger.insurance(), None);
        assert_eq!(ledger.wallet(), dollars(175));
    }

    #[test]
    fn test_insurance_pays_double_stake() {
        let mut ledger = Ledger::new(dollars(200));
        ledger.place_bet(dollars(25));
        ledger.place_insurance(Money::from_cents(1250));
        assert_eq!(ledger.pay_insurance(), dollars(25));
        assert_eq!(ledger.wallet(), dollars(175) - Money::from_cents(1250) + dollars(25));
    }

    #[test]
    fn test_pay_insurance_without_stake_is_zero() {
        let mut ledger = Ledger::new(dollars(200));
        ledger.place_bet(dollars(25));
        assert_eq!(ledger.pay_insurance(), Money::ZERO);
        assert_eq!(ledger.wallet(), dollars(175));
    }

    #[test]
    fn test_double_down() {
        let mut ledger = Ledger::new(dollars(200));
        ledger.place_bet(dollars(25));
        assert_eq!(ledger.double_down(), dollars(50));
        assert_eq!(ledger.wallet(), dollars(150));
    }

    #[test]
    fn test_win_and_push_payouts() {
        let mut ledger = Ledger::new(dollars(200));
        ledger.place_bet(dollars(25));
        assert_eq!(ledger.pay_win(), dollars(50));
        assert_eq!(ledger.wallet(), dollars(225));

        ledger.place_bet(dollars(25));
        assert_eq!(ledger.refund_bet(), dollars(25));
        assert_eq!(ledger.wallet(), dollars(225));
    }

    #[test]
    fn test_wallet_may_go_negative() {
        let mut ledger = Ledger::new(dollars(10));
        ledger.place_bet(dollars(25));
        assert_eq!(ledger.wallet(), dollars(-15));
    }
}
