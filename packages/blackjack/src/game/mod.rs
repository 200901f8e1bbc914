use crate::rules::{DEALER_STANDS_ON, DOUBLE_DOWN_TOTALS};
use crate::{Error, Hand, Ledger, Money, Pace, Shoe, Table, TableRules, TableView};
use serde::{Deserialize, Serialize};

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    NotStarted,
    RoundStart,
    Dealing,
    InsuranceCheck,
    DealerNaturalCheck,
    PlayerNaturalCheck,
    DoubleDownOffer,
    PlayerTurn,
    DealerTurn,
    Settlement,
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    PlayerNatural,
    PlayerBust,
    DealerBust,
    PlayerHigher,
    DealerHigher,
    Standoff,
}

impl Outcome {
    pub fn headline(self) -> &'static str {
        match self {
            Outcome::PlayerNatural => "Player Natural!",
            Outcome::PlayerBust => "You Busted!",
            Outcome::DealerBust => "Dealer Busted!",
            Outcome::PlayerHigher => "Player is closer to 21 than dealer!",
            Outcome::DealerHigher => "Dealer is closer to 21 than player...",
            Outcome::Standoff => "Standoff!",
        }
    }
}

/// Everything a finished round committed to the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: u64,
    pub outcome: Outcome,
    pub player_total: u8,
    pub dealer_total: u8,
    pub bet: Money,
    pub doubled: bool,
    pub insurance: Option<Money>,
    pub insurance_payout: Money,
    pub wallet: Money,
}

/// One player against the house, round after round.
pub struct Game<T> {
    rules: TableRules,
    shoe: Shoe,
    player: Hand,
    dealer: Hand,
    ledger: Ledger,
    phase: GamePhase,
    round: u64,
    settled: u64,
    table: T,
}

impl<T: Table> Game<T> {
    pub fn new(rules: TableRules, table: T) -> Result<Self, Error> {
        rules.validate()?;
        let shoe = Shoe::new(rules.num_decks, rules.rng());
        Ok(Self::with_shoe(rules, shoe, table))
    }

    /// Plays from a prepared shoe instead of a freshly shuffled one.
    pub fn with_shoe(rules: TableRules, shoe: Shoe, table: T) -> Self {
        Self {
            ledger: Ledger::new(rules.starting_wallet),
            rules,
            shoe,
            player: Hand::new(),
            dealer: Hand::new(),
            phase: GamePhase::NotStarted,
            round: 0,
            settled: 0,
            table,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Rounds whose bets have been settled.
    pub fn rounds_played(&self) -> u64 {
        self.settled
    }

    /// The bet of a round left before settlement. It stays with the house.
    pub fn abandoned_bet(&self) -> Option<Money> {
        (self.round > self.settled).then(|| self.ledger.bet())
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    /// Plays rounds until `max_rounds` is reached or the player leaves.
    pub fn run(&mut self, max_rounds: Option<u64>) -> Result<(), Error> {
        while max_rounds.map_or(true, |max| self.settled < max) {
            match self.play_round() {
                Ok(summary) => log::info!(
                    "Round {}: {:?} ({} vs {}), wallet {}",
                    summary.round,
                    summary.outcome,
                    summary.player_total,
                    summary.dealer_total,
                    summary.wallet
                ),
                Err(Error::Quit) => {
                    match self.abandoned_bet() {
                        Some(bet) => log::info!(
                            "Player left during round {}, forfeiting {bet}",
                            self.round
                        ),
                        None => log::info!("Player left after {} rounds", self.settled),
                    }
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Plays a single round from the bet to settlement.
    pub fn play_round(&mut self) -> Result<RoundSummary, Error> {
        self.start_round();
        self.deal()?;

        let insurance = self.offer_insurance()?;
        let mut insurance_payout = Money::ZERO;
        let mut doubled = false;

        self.enter(GamePhase::DealerNaturalCheck);
        let outcome = if self.dealer.is_natural() {
            if insurance.is_some() {
                self.table.announce("Dealer had a natural!")?;
                insurance_payout = self.ledger.pay_insurance();
                self.render(Pace::Update)?;
            }
            self.dealer_turn()?
        } else {
            if insurance.is_some() {
                self.table.announce("Dealer didn't have a natural...")?;
            }

            self.enter(GamePhase::PlayerNaturalCheck);
            if self.player.is_natural() {
                Outcome::PlayerNatural
            } else if self.offer_double_down()? {
                doubled = true;
                self.dealer_turn()?
            } else {
                self.player_turn()?;
                if self.player.is_busted() {
                    Outcome::PlayerBust
                } else {
                    self.dealer_turn()?
                }
            }
        };

        self.settle(outcome)?;

        Ok(RoundSummary {
            round: self.round,
            outcome,
            player_total: self.player.value(),
            dealer_total: self.dealer.value(),
            bet: self.ledger.bet(),
            doubled,
            insurance,
            insurance_payout,
            wallet: self.ledger.wallet(),
        })
    }

    fn enter(&mut self, phase: GamePhase) {
        log::debug!("Round {}: {:?} -> {:?}", self.round, self.phase, phase);
        self.phase = phase;
    }

    fn render(&mut self, pace: Pace) -> Result<(), Error> {
        let view = TableView::new(&self.dealer, &self.player, &self.ledger);
        self.table.render(&view, pace)
    }

    fn start_round(&mut self) {
        self.round += 1;
        self.enter(GamePhase::RoundStart);
        self.ledger.place_bet(self.rules.bet);

        self.shoe.discard(self.player.clear());
        self.shoe.discard(self.dealer.clear());
        if self.shoe.reshuffle_if_low(self.rules.reshuffle_threshold) {
            log::info!("Shoe reshuffled before round {}", self.round);
        }
    }

    fn deal(&mut self) -> Result<(), Error> {
        self.enter(GamePhase::Dealing);

        let card = self.shoe.draw()?;
        self.dealer.add_card(card);
        self.render(Pace::Deal)?;

        let card = self.shoe.draw()?;
        self.player.add_card(card);
        self.render(Pace::Deal)?;

        let card = self.shoe.draw()?;
        self.dealer.add_face_down(card);
        self.render(Pace::Deal)?;

        let card = self.shoe.draw()?;
        self.player.add_card(card);
        self.render(Pace::Deal)
    }

    fn offer_insurance(&mut self) -> Result<Option<Money>, Error> {
        self.enter(GamePhase::InsuranceCheck);
        if !self.dealer.first().is_some_and(|card| card.is_ace()) {
            return Ok(None);
        }
        if !self.table.ask_yes_no("Place insurance bet?")? {
            return Ok(None);
        }

        let requested = self.table.ask_amount("How much?")?;
        let stake = self.ledger.place_insurance(requested);
        if let Some(stake) = stake {
            log::debug!("Insurance of {stake} on a {} bet", self.ledger.bet());
            self.render(Pace::Update)?;
        }
        Ok(stake)
    }

    fn offer_double_down(&mut self) -> Result<bool, Error> {
        if !DOUBLE_DOWN_TOTALS.contains(&self.player.value()) {
            return Ok(false);
        }

        self.enter(GamePhase::DoubleDownOffer);
        if !self.table.ask_yes_no("Would you like to double down?")? {
            return Ok(false);
        }

        let bet = self.ledger.double_down();
        log::debug!("Doubled down, bet now {bet}");
        let card = self.shoe.draw()?;
        self.player.add_card(card);
        self.render(Pace::Hit)?;
        Ok(true)
    }

    fn player_turn(&mut self) -> Result<(), Error> {
        self.enter(GamePhase::PlayerTurn);
        while self.player.value() < crate::BLACKJACK {
            if !self.table.ask_yes_no("Hit?")? {
                break;
            }
            let card = self.shoe.draw()?;
            self.player.add_card(card);
            self.render(Pace::Hit)?;
        }
        Ok(())
    }

    fn dealer_turn(&mut self) -> Result<Outcome, Error> {
        self.enter(GamePhase::DealerTurn);
        self.dealer.reveal_all();
        self.render(Pace::Dealer)?;

        while self.dealer.value() < DEALER_STANDS_ON {
            let card = self.shoe.draw()?;
            self.dealer.add_card(card);
            self.render(Pace::Dealer)?;
        }

        let (player, dealer) = (self.player.value(), self.dealer.value());
        Ok(if self.dealer.is_busted() {
            Outcome::DealerBust
        } else if player > dealer {
            Outcome::PlayerHigher
        } else if player < dealer {
            Outcome::DealerHigher
        } else {
            Outcome::Standoff
        })
    }

    fn settle(&mut self, outcome: Outcome) -> Result<(), Error> {
        self.enter(GamePhase::Settlement);
        self.table.announce(outcome.headline())?;

        let next = match outcome {
            Outcome::PlayerNatural | Outcome::DealerBust | Outcome::PlayerHigher => {
                let payout = self.ledger.pay_win();
                self.render(Pace::Update)?;
                self.table.announce(&format!("You won {payout}!"))?;
                "Press Enter to Play Again!"
            }
            Outcome::PlayerBust => {
                self.table.announce("You lost your bet...")?;
                "Press Enter to Try Again!"
            }
            Outcome::DealerHigher => {
                self.table.announce("You lost your bet!")?;
                "Press Enter to Play Again!"
            }
            Outcome::Standoff => {
                self.ledger.refund_bet();
                self.render(Pace::Update)?;
                "Press Enter to Play Again!"
            }
        };

        self.settled = self.round;
        self.table.wait_for_enter(next)
    }
}

#[cfg(test)]
mod tests;
