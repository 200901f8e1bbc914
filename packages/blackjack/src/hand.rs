use crate::Card;
use serde::{Deserialize, Serialize};

pub const BLACKJACK: u8 = 21;

/// Calculate the value of a blackjack hand
pub fn calculate_hand_value<'a, I>(cards: I) -> u8
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut total: u16 = 0;
    let mut aces = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        total += u16::from(card.value());
    }

    // Demote aces from 11 to 1, one at a time
    while total > u16::from(BLACKJACK) && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    u8::try_from(total).unwrap_or(u8::MAX)
}

/// Check if a hand is soft (has an ace still counted as 11)
pub fn is_soft_hand<'a, I>(cards: I) -> bool
where
    I: IntoIterator<Item = &'a Card> + Clone,
{
    let has_ace = cards.clone().into_iter().any(Card::is_ace);
    let hard_total: u16 = cards
        .clone()
        .into_iter()
        .map(|c| if c.is_ace() { 1 } else { u16::from(c.value()) })
        .sum();
    has_ace && hard_total + 10 == u16::from(calculate_hand_value(cards))
}

/// Check if a hand is busted
pub fn is_busted<'a, I>(cards: I) -> bool
where
    I: IntoIterator<Item = &'a Card>,
{
    calculate_hand_value(cards) > BLACKJACK
}

/// Check if a hand is a natural (21 with 2 cards)
pub fn is_natural(cards: &[&Card]) -> bool {
    cards.len() == 2 && calculate_hand_value(cards.iter().copied()) == BLACKJACK
}

/// A card held in a hand together with whether it is showing.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldCard {
    pub card: Card,
    pub face_up: bool,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<HeldCard>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> + Clone {
        self.cards.iter().map(|held| &held.card)
    }

    pub fn held(&self) -> &[HeldCard] {
        &self.cards
    }

    pub fn first(&self) -> Option<&Card> {
        self.cards.first().map(|held| &held.card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Total of every card, face-down ones included.
    pub fn value(&self) -> u8 {
        calculate_hand_value(self.cards())
    }

    pub fn is_soft(&self) -> bool {
        is_soft_hand(self.cards())
    }

    pub fn is_busted(&self) -> bool {
        is_busted(self.cards())
    }

    pub fn is_natural(&self) -> bool {
        is_natural(&self.cards().collect::<Vec<_>>())
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(HeldCard { card, face_up: true });
    }

    pub fn add_face_down(&mut self, card: Card) {
        self.cards.push(HeldCard {
            card,
            face_up: false,
        });
    }

    pub fn reveal_all(&mut self) {
        for held in &mut self.cards {
            held.face_up = true;
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.cards.iter().all(|held| held.face_up)
    }

    /// Empties the hand, handing its cards back in the order they were dealt.
    pub fn clear(&mut self) -> impl Iterator<Item = Card> + '_ {
        self.cards.drain(..).map(|held| held.card)
    }
}
