//! How a card looks on screen. Three rows tall, three columns wide.

use blackjack::{Card, Suit};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

pub const BACK_ROWS: [&str; 3] = ["╔═╗", "║@║", "╚═╝"];

/// Display descriptor for a face-up card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFace {
    pub glyph: &'static str,
    pub symbol: char,
    pub color: Color,
}

pub fn card_face(card: &Card) -> CardFace {
    let color = match card.suit() {
        Suit::Hearts | Suit::Diamonds => Color::Red,
        Suit::Clubs | Suit::Spades => Color::Black,
    };
    CardFace {
        glyph: card.glyph(),
        symbol: card.suit().symbol(),
        color,
    }
}

impl CardFace {
    /// The three text rows: glyph top-left, suit centred, glyph bottom-right.
    pub fn rows(&self) -> [String; 3] {
        let spacing = if self.glyph.len() == 1 { "  " } else { " " };
        [
            format!("{}{spacing}", self.glyph),
            format!(" {} ", self.symbol),
            format!("{spacing}{}", self.glyph),
        ]
    }

    fn style(&self) -> Style {
        Style::default().fg(self.color).bg(Color::White)
    }
}

fn back_style() -> Style {
    Style::default().fg(Color::White).bg(Color::Magenta)
}

/// Lays a hand out side by side; `None` is a face-down card.
pub fn hand_lines(cards: &[Option<CardFace>]) -> [Line<'static>; 3] {
    let mut rows: [Vec<Span<'static>>; 3] = Default::default();

    for (i, face) in cards.iter().enumerate() {
        for (row, spans) in rows.iter_mut().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(match face {
                Some(face) => Span::styled(face.rows()[row].clone(), face.style()),
                None => Span::styled(BACK_ROWS[row], back_style()),
            });
        }
    }

    rows.map(Line::from)
}
