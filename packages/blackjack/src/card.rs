use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }
}

/// A physical card. Cards move between the shoe, hands and the discard pile
/// and are never duplicated: the type is neither `Copy` nor `Clone`.
#[derive(Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    /// Ranks run from 1 (Ace) to 13 (King).
    pub fn new(suit: Suit, rank: u8) -> Option<Self> {
        (1..=13).contains(&rank).then_some(Self { suit, rank })
    }

    /// Card at `index` of a standard deck ordered ♥ ♦ ♣ ♠, Ace to King.
    pub fn from_index(index: usize) -> Option<Self> {
        let suit = *Suit::ALL.get(index / 13)?;
        Self::new(suit, (index % 13) as u8 + 1)
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn is_ace(&self) -> bool {
        self.rank == 1
    }

    /// Natural blackjack value; an Ace counts 11 until hand evaluation demotes it.
    pub fn value(&self) -> u8 {
        match self.rank {
            1 => 11,
            11..=13 => 10,
            pip => pip,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            _ => "K",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.glyph(), self.suit.symbol())
    }
}
