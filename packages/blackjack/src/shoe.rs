use crate::{Card, Error};
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

pub const DECK_SIZE: usize = 52;

/// Multi-deck shoe plus the discard pile it recycles from.
///
/// Cards are drawn from the end of the shoe. Between reshuffles, cards that
/// leave play sit in the discard pile; `reshuffle_if_low` reclaims them.
pub struct Shoe {
    cards: Vec<Card>,
    discard: Vec<Card>,
    capacity: usize,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Builds `num_decks` standard decks and shuffles them together.
    pub fn new(num_decks: u8, rng: ChaCha8Rng) -> Self {
        let capacity = DECK_SIZE * usize::from(num_decks);
        let cards: Vec<Card> = (0..capacity)
            .filter_map(|i| Card::from_index(i % DECK_SIZE))
            .collect();

        let mut shoe = Self {
            cards,
            discard: Vec::new(),
            capacity,
            rng,
        };
        shoe.shuffle();
        shoe
    }

    /// A shoe that deals `draw_order` front to back, without shuffling.
    pub fn stacked<I>(draw_order: I, rng: ChaCha8Rng) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        let mut cards: Vec<Card> = draw_order.into_iter().collect();
        cards.reverse();
        Self {
            capacity: cards.len(),
            cards,
            discard: Vec::new(),
            rng,
        }
    }

    pub fn draw(&mut self) -> Result<Card, Error> {
        self.cards.pop().ok_or(Error::EmptyShoe)
    }

    pub fn discard<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.discard.extend(cards);
    }

    /// Reclaims the discard pile and reshuffles when fewer than `threshold`
    /// cards remain. Returns whether a reshuffle happened.
    pub fn reshuffle_if_low(&mut self, threshold: usize) -> bool {
        if self.cards.len() >= threshold {
            return false;
        }

        let reclaimed = self.discard.len();
        self.cards.append(&mut self.discard);
        self.shuffle();
        log::debug!(
            "Reshuffled shoe: reclaimed {reclaimed} cards, {} in shoe",
            self.cards.len()
        );
        true
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    /// Number of cards the shoe was built with.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }
}
