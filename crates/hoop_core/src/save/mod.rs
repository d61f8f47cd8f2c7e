// Scoreboard persistence: games played / games won.
// MessagePack + LZ4 compression with versioning and integrity checks

pub mod error;
pub mod format;
pub mod manager;

pub use error::SaveError;
pub use format::{decompress_and_deserialize, serialize_and_compress, GameStats, StatsSave};
pub use manager::StatsStore;

pub const SAVE_VERSION: u32 = 1;
