#![allow(dead_code)]

use blackjack::{Card, Error, Game, Money, Pace, Shoe, Suit, Table, TableRules, TableView};
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// What the table looked like at one `render` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub dealer_ranks: Vec<u8>,
    pub dealer_face_up: Vec<bool>,
    pub player_ranks: Vec<u8>,
    pub dealer_total: Option<u8>,
    pub player_total: Option<u8>,
    pub wallet: Money,
    pub bet: Money,
    pub pace: Pace,
}

/// Answers prompts from a script and records everything it is shown.
/// Once the yes/no script runs out it declines, or quits if `quit_when_done`.
/// With `quit_at_pause` it leaves at the first end-of-round pause.
#[derive(Default)]
pub struct ScriptedTable {
    answers: VecDeque<bool>,
    amounts: VecDeque<Money>,
    pub quit_when_done: bool,
    pub quit_at_pause: bool,
    pub frames: Vec<Frame>,
    pub prompts: Vec<String>,
    pub messages: Vec<String>,
    pub pauses: Vec<String>,
}

impl ScriptedTable {
    pub fn new(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn with_amounts(mut self, amounts: &[Money]) -> Self {
        self.amounts = amounts.iter().copied().collect();
        self
    }

    pub fn asked(&self, needle: &str) -> bool {
        self.prompts.iter().any(|p| p.contains(needle))
    }

    pub fn said(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }
}

impl Table for ScriptedTable {
    fn render(&mut self, view: &TableView<'_>, pace: Pace) -> Result<(), Error> {
        self.frames.push(Frame {
            dealer_ranks: view.dealer.cards().map(Card::rank).collect(),
            dealer_face_up: view.dealer.held().iter().map(|h| h.face_up).collect(),
            player_ranks: view.player.cards().map(Card::rank).collect(),
            dealer_total: view.dealer_total,
            player_total: view.player_total,
            wallet: view.wallet,
            bet: view.bet,
            pace,
        });
        Ok(())
    }

    fn ask_yes_no(&mut self, prompt: &str) -> Result<bool, Error> {
        self.prompts.push(prompt.to_string());
        match self.answers.pop_front() {
            Some(answer) => Ok(answer),
            None if self.quit_when_done => Err(Error::Quit),
            None => Ok(false),
        }
    }

    fn ask_amount(&mut self, prompt: &str) -> Result<Money, Error> {
        self.prompts.push(prompt.to_string());
        self.amounts
            .pop_front()
            .ok_or_else(|| Error::InvalidInput("script has no amount".to_string()))
    }

    fn announce(&mut self, message: &str) -> Result<(), Error> {
        self.messages.push(message.to_string());
        Ok(())
    }

    fn wait_for_enter(&mut self, prompt: &str) -> Result<(), Error> {
        self.pauses.push(prompt.to_string());
        if self.quit_at_pause {
            return Err(Error::Quit);
        }
        Ok(())
    }
}

pub fn dollars(n: i64) -> Money {
    Money::from_dollars(n)
}

/// Cards in deal order. Deal order is dealer, player, dealer (hole), player,
/// then hits, then dealer draws.
pub fn cards(ranks: &[u8]) -> Vec<Card> {
    ranks
        .iter()
        .enumerate()
        .map(|(i, &rank)| Card::new(Suit::ALL[i % 4], rank).unwrap())
        .collect()
}

/// Default table rules over a stacked shoe that never reshuffles.
pub fn stacked_game(ranks: &[u8], table: ScriptedTable) -> Game<ScriptedTable> {
    let shoe = Shoe::stacked(cards(ranks), ChaCha8Rng::seed_from_u64(3));
    let rules = TableRules {
        reshuffle_threshold: 0,
        ..TableRules::default()
    };
    Game::with_shoe(rules, shoe, table)
}
