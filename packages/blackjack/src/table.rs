//! Boundary between the game engine and whatever shows the table to a player.

use crate::{Error, Hand, Ledger, Money};

/// What produced a frame, so the adapter can pace its animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    /// One card of the opening deal
    Deal,
    /// A card the player asked for
    Hit,
    /// Dealer revealing or drawing
    Dealer,
    /// Any other state change (stakes, payouts)
    Update,
}

/// Snapshot of the table handed to `Table::render`.
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    pub dealer: &'a Hand,
    /// Shown only once every dealer card is face up
    pub dealer_total: Option<u8>,
    pub player: &'a Hand,
    pub player_total: Option<u8>,
    pub wallet: Money,
    pub bet: Money,
    pub insurance: Option<Money>,
}

impl<'a> TableView<'a> {
    pub fn new(dealer: &'a Hand, player: &'a Hand, ledger: &Ledger) -> Self {
        Self {
            dealer,
            dealer_total: dealer.is_revealed().then(|| dealer.value()),
            player,
            player_total: player.is_revealed().then(|| player.value()),
            wallet: ledger.wallet(),
            bet: ledger.bet(),
            insurance: ledger.insurance(),
        }
    }
}

/// Presentation and input collaborator driven by `Game`.
///
/// Every method blocks until it is done. Adapters report I/O trouble as
/// `Error::Table` and a player walking away as `Error::Quit`.
pub trait Table {
    /// Draws the whole tableau. Called after every card, reveal and payout.
    fn render(&mut self, view: &TableView<'_>, pace: Pace) -> Result<(), Error>;

    /// Waits for a yes or a no; any other key is ignored.
    fn ask_yes_no(&mut self, prompt: &str) -> Result<bool, Error>;

    /// Reads an amount, re-prompting until the text parses.
    fn ask_amount(&mut self, prompt: &str) -> Result<Money, Error>;

    fn announce(&mut self, message: &str) -> Result<(), Error>;

    /// Holds the table until the player presses Enter.
    fn wait_for_enter(&mut self, prompt: &str) -> Result<(), Error>;
}
