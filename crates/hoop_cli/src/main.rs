//! hoop-guess: guess the NBA player in six tries, in a terminal.

mod presenter;

use anyhow::{Context, Result};
use clap::Parser;
use hoop_core::config::ROSTER_PATH_ENV;
use hoop_core::game::normalize_name;
use hoop_core::{load_roster, GameConfig, GameController, GameSession, Mode, Roster, StatsStore};
use presenter::TerminalPresenter;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hoop-guess")]
#[command(about = "Guess the hidden NBA player in six attempts", long_about = None)]
struct Args {
    /// Roster JSON export or built cache [env: HOOP_ROSTER_PATH]
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Stats file [env: HOOP_STATS_PATH]
    #[arg(long)]
    stats: Option<PathBuf>,

    /// Fixed seed for reproducible rounds [env: HOOP_SEED]
    #[arg(long)]
    seed: Option<u64>,

    /// Starting mode: all, easy, medium or hard [env: HOOP_MODE]
    #[arg(long)]
    mode: Option<Mode>,

    /// Keep the tally in memory only
    #[arg(long, default_value = "false")]
    no_save: bool,
}

enum Command {
    Guess(String),
    Hint,
    Restart,
    Mode(String),
    Names(String),
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        let Some(rest) = line.strip_prefix(':') else {
            return Command::Guess(line.to_string());
        };
        let (cmd, arg) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        match cmd.to_lowercase().as_str() {
            "hint" | "h" => Command::Hint,
            "restart" | "r" => Command::Restart,
            "mode" | "m" => Command::Mode(arg.trim().to_string()),
            "names" | "n" => Command::Names(arg.trim().to_string()),
            "quit" | "q" => Command::Quit,
            _ => Command::Help,
        }
    }
}

const HELP: &str = "Type a player name to guess. Commands: :hint  :restart  :mode <all|easy|medium|hard>  :names [prefix]  :quit";

/// Load the roster, pointing at the path settings when the file is missing or unreadable.
fn open_roster(path: &Path) -> Result<Roster> {
    match load_roster(path) {
        Ok(roster) => Ok(roster),
        Err(e) if e.is_recoverable() => Err(e).with_context(|| {
            format!(
                "Cannot read roster at {} (set --roster or {})",
                path.display(),
                ROSTER_PATH_ENV
            )
        }),
        Err(e) => Err(e)
            .with_context(|| format!("Roster at {} is not a valid export or cache", path.display())),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = GameConfig::from_env();
    if let Some(path) = args.roster {
        config.roster_path = path;
    }
    if let Some(path) = args.stats {
        config.stats_path = path;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    log::debug!("Config: {:?}", config);

    let store = (!args.no_save).then(|| StatsStore::new(&config.stats_path));
    let stats = store.as_ref().map(StatsStore::load_or_default).unwrap_or_default();
    let session = match config.seed {
        Some(seed) => GameSession::with_seed(stats, seed),
        None => GameSession::new(stats),
    };

    let roster = open_roster(&config.roster_path)?;
    log::info!("Loaded {} players", roster.len());

    let mut controller = GameController::new(session, TerminalPresenter::new(io::stdout()), store);
    println!("{}", HELP);
    // Empty-pool and other start failures are already shown on the board.
    let _ = controller.initialize(roster);
    if config.mode != Mode::All {
        let _ = controller.change_mode(config.mode);
    }

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match Command::parse(&line) {
            Command::Guess(name) => {
                if !controller.presenter().input_enabled() {
                    println!("Round is over. Type :restart or :mode <mode>.");
                    continue;
                }
                let _ = controller.submit_guess(&name);
            }
            Command::Hint => {
                let _ = controller.request_hint();
            }
            Command::Restart => {
                let _ = controller.restart();
            }
            Command::Mode(mode) => match mode.parse::<Mode>() {
                Ok(mode) => {
                    let _ = controller.change_mode(mode);
                }
                Err(e) => println!("! {}", e),
            },
            Command::Names(prefix) => {
                let prefix = normalize_name(&prefix);
                let names: Vec<&String> = controller
                    .presenter()
                    .suggestions()
                    .iter()
                    .filter(|n| normalize_name(n).starts_with(&prefix))
                    .take(20)
                    .collect();
                for name in names {
                    println!("  {}", name);
                }
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
        }
    }

    Ok(())
}
