use thiserror::Error;

/// Errors surfaced by game actions.
///
/// Every variant is a user-facing condition; none of them should end the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Enter a player name.")]
    EmptyInput,

    #[error("'{input}' not found.")]
    NotFound { input: String },

    #[error("No players in this mode. Please change the mode.")]
    EmptyPool,

    #[error("No target player selected. Please change mode or restart.")]
    NoTarget,

    #[error("Roster is still loading.")]
    NotReady,

    #[error("This round is over. Start a new round to keep playing.")]
    RoundOver,

    #[error("Unknown mode: {0} (expected all, easy, medium or hard)")]
    InvalidMode(String),

    #[error("Unknown position: {0}")]
    InvalidPosition(String),
}

impl GameError {
    /// False when no player action can clear the error; the host must load a roster first.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GameError::NotReady)
    }
}

/// Errors raised while reading a roster from disk.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Roster JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Roster cache decode error: {0}")]
    CacheDecode(#[from] rmp_serde::decode::Error),

    #[error("Roster cache decompression failed: {0}")]
    Decompression(String),

    #[error("Roster file not found: {path}")]
    FileNotFound { path: String },
}

impl RosterError {
    pub fn is_recoverable(&self) -> bool {
        matches!(self, RosterError::Io(_) | RosterError::FileNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
