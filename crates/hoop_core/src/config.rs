//! Runtime configuration resolved from the environment.

use crate::game::Mode;
use std::env;
use std::path::PathBuf;

/// Canonical env var for overriding the roster path (JSON or built cache).
pub const ROSTER_PATH_ENV: &str = "HOOP_ROSTER_PATH";
pub const STATS_PATH_ENV: &str = "HOOP_STATS_PATH";
/// Fixed seed for reproducible target draws.
pub const SEED_ENV: &str = "HOOP_SEED";
pub const MODE_ENV: &str = "HOOP_MODE";

pub const DEFAULT_ROSTER_REL_PATH: &str = "data/players.json";
pub const DEFAULT_STATS_REL_PATH: &str = "saves/stats.dat";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub roster_path: PathBuf,
    pub stats_path: PathBuf,
    pub seed: Option<u64>,
    pub mode: Mode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            roster_path: PathBuf::from(DEFAULT_ROSTER_REL_PATH),
            stats_path: PathBuf::from(DEFAULT_STATS_REL_PATH),
            seed: None,
            mode: Mode::default(),
        }
    }
}

impl GameConfig {
    /// Read `HOOP_*` variables. Blank or malformed values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
        };
        let mut config = Self::default();

        if let Some(path) = read(ROSTER_PATH_ENV) {
            config.roster_path = PathBuf::from(path);
        }
        if let Some(path) = read(STATS_PATH_ENV) {
            config.stats_path = PathBuf::from(path);
        }
        if let Some(seed) = read(SEED_ENV) {
            match seed.parse() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => log::warn!("Ignoring {}={:?}: not a u64", SEED_ENV, seed),
            }
        }
        if let Some(mode) = read(MODE_ENV) {
            match mode.parse() {
                Ok(mode) => config.mode = mode,
                Err(e) => log::warn!("Ignoring {}: {}", MODE_ENV, e),
            }
        }

        config
    }
}
