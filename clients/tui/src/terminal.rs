use crate::card_face::{card_face, CardFace};
use crate::tui_logger::LogBuffer;
use crate::ui;
use blackjack::{Error, Hand, Money, Pace, Table, TableView};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::collections::VecDeque;
use std::fmt::Display;
use std::io;
use std::thread;
use std::time::Duration;

/// Lines kept in the log panel
const LOG_LINES: usize = 20;

/// Source of key presses
pub trait Keys {
    fn next_key(&mut self) -> io::Result<KeyEvent>;
}

/// Blocks on the real terminal
pub struct CrosstermKeys;

impl Keys for CrosstermKeys {
    fn next_key(&mut self) -> io::Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(key);
                }
            }
        }
    }
}

impl Keys for VecDeque<KeyEvent> {
    fn next_key(&mut self) -> io::Result<KeyEvent> {
        self.pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more keys"))
    }
}

/// Owned copy of the last frame the engine rendered
#[derive(Debug, Clone, Default)]
pub struct Tableau {
    pub dealer: Vec<Option<CardFace>>,
    pub dealer_total: Option<u8>,
    pub player: Vec<Option<CardFace>>,
    pub player_total: Option<u8>,
    pub wallet: Money,
    pub bet: Money,
    pub insurance: Option<Money>,
}

fn faces(hand: &Hand) -> Vec<Option<CardFace>> {
    hand.held()
        .iter()
        .map(|held| held.face_up.then(|| card_face(&held.card)))
        .collect()
}

impl From<&TableView<'_>> for Tableau {
    fn from(view: &TableView<'_>) -> Self {
        Self {
            dealer: faces(view.dealer),
            dealer_total: view.dealer_total,
            player: faces(view.player),
            player_total: view.player_total,
            wallet: view.wallet,
            bet: view.bet,
            insurance: view.insurance,
        }
    }
}

/// Everything the frame draws
#[derive(Debug, Default)]
pub struct Screen {
    pub tableau: Option<Tableau>,
    pub messages: Vec<String>,
    pub status: String,
    pub input: Option<String>,
    pub logs: Vec<String>,
    pub log_visible: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub paced: bool,
    pub log_visible: bool,
}

impl Settings {
    fn delay(&self, pace: Pace) -> Option<Duration> {
        if !self.paced {
            return None;
        }
        match pace {
            Pace::Deal => Some(Duration::from_millis(600)),
            Pace::Hit => Some(Duration::from_millis(250)),
            Pace::Dealer => Some(Duration::from_millis(800)),
            Pace::Update => None,
        }
    }
}

/// `Table` adapter drawing with ratatui and reading keys one at a time.
pub struct TerminalTable<B: Backend, K> {
    terminal: Terminal<B>,
    keys: K,
    log_buffer: LogBuffer,
    settings: Settings,
    screen: Screen,
}

fn table_error(e: impl Display) -> Error {
    Error::Table(e.to_string())
}

fn is_quit(key: &KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

impl<B: Backend, K: Keys> TerminalTable<B, K> {
    pub fn new(terminal: Terminal<B>, keys: K, log_buffer: LogBuffer, settings: Settings) -> Self {
        Self {
            terminal,
            keys,
            log_buffer,
            settings,
            screen: Screen {
                log_visible: settings.log_visible,
                ..Screen::default()
            },
        }
    }

    #[cfg(test)]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[cfg(test)]
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    fn sync_logs(&mut self) {
        // Pull any new log messages from the shared buffer
        let messages: Vec<String> = if let Ok(mut buffer) = self.log_buffer.lock() {
            buffer.drain(..).collect()
        } else {
            Vec::new()
        };

        for msg in messages {
            self.add_log(msg);
        }
    }

    fn add_log(&mut self, message: String) {
        self.screen.logs.push(message);
        if self.screen.logs.len() > LOG_LINES {
            self.screen.logs.remove(0);
        }
    }

    fn redraw(&mut self) -> Result<(), Error> {
        self.sync_logs();
        let screen = &self.screen;
        self.terminal
            .draw(|f| ui::draw(f, screen))
            .map_err(table_error)?;
        Ok(())
    }

    /// Next key press, with the keys every prompt shares handled here.
    fn key(&mut self) -> Result<KeyEvent, Error> {
        loop {
            let key = self.keys.next_key().map_err(table_error)?;
            if is_quit(&key) {
                return Err(Error::Quit);
            }
            if key.code == KeyCode::Tab {
                self.screen.log_visible = !self.screen.log_visible;
                self.redraw()?;
                continue;
            }
            return Ok(key);
        }
    }

    fn prompt(&mut self, status: String) -> Result<(), Error> {
        self.screen.status = status;
        self.redraw()
    }
}

impl<B: Backend, K: Keys> Table for TerminalTable<B, K> {
    fn render(&mut self, view: &TableView<'_>, pace: Pace) -> Result<(), Error> {
        self.screen.tableau = Some(Tableau::from(view));
        // A new deal starts a fresh round of messages
        if pace == Pace::Deal {
            self.screen.messages.clear();
        }
        self.screen.status.clear();
        self.redraw()?;
        if let Some(delay) = self.settings.delay(pace) {
            thread::sleep(delay);
        }
        Ok(())
    }

    fn ask_yes_no(&mut self, prompt: &str) -> Result<bool, Error> {
        self.prompt(format!("{prompt} (y/n)"))?;
        let answer = loop {
            match self.key()?.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => break true,
                KeyCode::Char('n') | KeyCode::Char('N') => break false,
                _ => continue,
            }
        };
        self.prompt(String::new())?;
        Ok(answer)
    }

    fn ask_amount(&mut self, prompt: &str) -> Result<Money, Error> {
        let mut status = prompt.to_string();
        loop {
            self.screen.input = Some(String::new());
            self.prompt(status.clone())?;

            loop {
                match self.key()?.code {
                    KeyCode::Enter => break,
                    KeyCode::Backspace => {
                        if let Some(input) = self.screen.input.as_mut() {
                            input.pop();
                        }
                    }
                    KeyCode::Char(c) => {
                        if let Some(input) = self.screen.input.as_mut() {
                            input.push(c);
                        }
                    }
                    _ => continue,
                }
                self.redraw()?;
            }

            let text = self.screen.input.take().unwrap_or_default();
            match text.parse::<Money>() {
                Ok(amount) => {
                    self.prompt(String::new())?;
                    return Ok(amount);
                }
                Err(e) => {
                    log::warn!("{e}");
                    status = format!("{e}. {prompt}");
                }
            }
        }
    }

    fn announce(&mut self, message: &str) -> Result<(), Error> {
        self.screen.messages.push(message.to_string());
        self.add_log(message.to_string());
        self.redraw()
    }

    fn wait_for_enter(&mut self, prompt: &str) -> Result<(), Error> {
        self.prompt(prompt.to_string())?;
        while self.key()?.code != KeyCode::Enter {}
        self.prompt(String::new())
    }
}
