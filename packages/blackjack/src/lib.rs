mod card;
mod error;
mod game;
mod hand;
mod ledger;
mod money;
mod rules;
mod shoe;
mod table;

pub use card::{Card, Suit};
pub use error::Error;
pub use game::{Game, GamePhase, Outcome, RoundSummary};
pub use hand::{
    calculate_hand_value, is_busted, is_natural, is_soft_hand, Hand, HeldCard, BLACKJACK,
};
pub use ledger::Ledger;
pub use money::Money;
pub use rules::{
    TableRules, DEALER_STANDS_ON, DOUBLE_DOWN_TOTALS, MAX_CARDS_PER_ROUND, MAX_STAKE,
};
pub use shoe::{Shoe, DECK_SIZE};
pub use table::{Pace, Table, TableView};
