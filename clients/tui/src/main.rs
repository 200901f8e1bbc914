use blackjack::{Game, Money, TableRules};
use clap::Parser;
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{error::Error, io};

mod card_face;
mod terminal;
use terminal::{CrosstermKeys, Settings, TerminalTable};

mod tui_logger;
use tui_logger::TuiLogger;

mod ui;

#[derive(Parser)]
#[command(name = "blackjack", about = "Single-player blackjack against the house")]
struct Cli {
    /// Number of decks in the shoe
    #[arg(long, env = "BLACKJACK_DECKS", default_value_t = 6)]
    decks: u8,

    /// Wallet balance at the first round
    #[arg(long, env = "BLACKJACK_BANKROLL", default_value = "200")]
    bankroll: Money,

    /// Bet placed every round
    #[arg(long, env = "BLACKJACK_BET", default_value = "25")]
    bet: Money,

    /// Reshuffle the discard pile back in when fewer cards remain
    #[arg(long, env = "BLACKJACK_RESHUFFLE_AT", default_value_t = 75)]
    reshuffle_at: usize,

    /// Seed for a reproducible shoe
    #[arg(long, env = "BLACKJACK_SEED")]
    seed: Option<u64>,

    /// Leave the table after this many rounds
    #[arg(long)]
    rounds: Option<u64>,

    /// Deal without pauses
    #[arg(long)]
    fast: bool,

    /// Start with the log panel hidden
    #[arg(long)]
    hide_log: bool,
}

impl Cli {
    fn rules(&self) -> TableRules {
        TableRules {
            num_decks: self.decks,
            reshuffle_threshold: self.reshuffle_at,
            starting_wallet: self.bankroll,
            bet: self.bet,
            seed: self.seed,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Initialize custom logger
    let (logger, log_buffer) = TuiLogger::new();
    log::set_boxed_logger(Box::new(logger)).map(|()| log::set_max_level(log::LevelFilter::Info))?;

    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let settings = Settings {
        paced: !cli.fast,
        log_visible: !cli.hide_log,
    };
    let table = TerminalTable::new(terminal, CrosstermKeys, log_buffer, settings);
    let mut game = Game::new(cli.rules(), table)?;

    // setup terminal
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;

    let res = game.run(cli.rounds);

    // restore terminal
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;

    res?;
    println!(
        "Left the table after {} rounds with {}",
        game.rounds_played(),
        game.ledger().wallet()
    );
    if let Some(bet) = game.abandoned_bet() {
        println!("The {bet} bet on the unfinished round was lost");
    }
    Ok(())
}
