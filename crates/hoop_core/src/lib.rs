//! # hoop_core - NBA player guessing game engine
//!
//! Guess a hidden NBA player in six attempts. Each guess is compared field by
//! field against the target and graded exact / close / miss, with direction
//! arrows on numeric fields. Three tiered hints can be spent per round.
//!
//! ## Features
//! - Salary-based difficulty modes (all / easy / medium / hard)
//! - Accent and suffix insensitive name matching
//! - Seeded target draws (same seed = same rounds)
//! - Persistent win/loss tally (MessagePack + LZ4 + SHA-256)
//! - Presenter trait so any front end can render the board

pub mod config;
pub mod data;
pub mod error;
pub mod game;
pub mod models;
pub mod save;
pub mod view;

pub use config::GameConfig;
pub use data::{load_roster, Roster};
pub use error::{GameError, Result, RosterError};
pub use game::{
    Feedback, GameController, GameSession, GuessOutcome, HintOutcome, Mode, RoundSnapshot,
    RoundStatus, Verdict,
};
pub use models::{PlayerId, PlayerRecord, Position};
pub use save::{GameStats, SaveError, StatsStore};
pub use view::Presenter;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
