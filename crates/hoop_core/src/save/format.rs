use super::error::SaveError;
use super::SAVE_VERSION;
use serde::{Deserialize, Serialize};

use lz4_flex::{compress_prepend_size, decompress_size_prepended};
use rmp_serde::{from_slice, to_vec_named};
use sha2::{Digest, Sha256};
use time::OffsetDateTime;

/// Cumulative tally across rounds.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameStats {
    pub games_played: u32,
    pub games_won: u32,
}

impl GameStats {
    /// Count a finished round.
    pub fn record_result(&mut self, won: bool) {
        self.games_played = self.games_played.saturating_add(1);
        if won {
            self.games_won = self.games_won.saturating_add(1);
        }
    }

    /// Percentage of played games that were won, 0 when nothing was played.
    pub fn win_rate(&self) -> f32 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.games_won as f32 / self.games_played as f32 * 100.0
    }
}

/// Stats file contents.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StatsSave {
    /// Save format version
    pub version: u32,

    /// Save timestamp (unix milliseconds)
    pub timestamp: u64,

    pub stats: GameStats,
}

impl Default for StatsSave {
    fn default() -> Self {
        Self::new(GameStats::default())
    }
}

impl StatsSave {
    pub fn new(stats: GameStats) -> Self {
        Self { version: SAVE_VERSION, timestamp: current_timestamp(), stats }
    }

    pub fn validate(&self) -> Result<(), SaveError> {
        if self.stats.games_won > self.stats.games_played {
            return Err(SaveError::Corrupted);
        }
        Ok(())
    }
}

/// Serialize and compress stats data
pub fn serialize_and_compress(save: &StatsSave) -> Result<Vec<u8>, SaveError> {
    save.validate()?;

    // 1. Serialize to MessagePack with field names
    let msgpack = to_vec_named(save).map_err(SaveError::Serialization)?;

    // 2. Compress with LZ4 (size prepended for easy decompression)
    let compressed = compress_prepend_size(&msgpack);

    // 3. Add SHA256 checksum at the end
    let mut hasher = Sha256::new();
    hasher.update(&compressed);
    let checksum = hasher.finalize();

    let mut result = compressed;
    result.extend_from_slice(&checksum);

    Ok(result)
}

/// Decompress and deserialize stats data
pub fn decompress_and_deserialize(bytes: &[u8]) -> Result<StatsSave, SaveError> {
    // Check minimum size (header + checksum)
    if bytes.len() < 4 + 32 {
        return Err(SaveError::Corrupted);
    }

    // Split payload and checksum
    let (payload, checksum_bytes) = bytes.split_at(bytes.len() - 32);

    let mut hasher = Sha256::new();
    hasher.update(payload);
    let calculated_checksum = hasher.finalize();

    if &calculated_checksum[..] != checksum_bytes {
        return Err(SaveError::ChecksumMismatch);
    }

    let msgpack = decompress_size_prepended(payload).map_err(|_| SaveError::Decompression)?;

    let save: StatsSave = from_slice(&msgpack).map_err(SaveError::Deserialization)?;

    if save.version > SAVE_VERSION {
        return Err(SaveError::VersionMismatch { found: save.version, expected: SAVE_VERSION });
    }

    save.validate()?;
    Ok(save)
}

pub fn current_timestamp() -> u64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_deserialize_roundtrip() {
        let save = StatsSave::new(GameStats { games_played: 12, games_won: 7 });

        let serialized = serialize_and_compress(&save).unwrap();
        let deserialized = decompress_and_deserialize(&serialized).unwrap();

        assert_eq!(deserialized.version, SAVE_VERSION);
        assert_eq!(deserialized.stats, save.stats);
    }

    #[test]
    fn test_checksum_validation() {
        let save = StatsSave::default();
        let mut serialized = serialize_and_compress(&save).unwrap();

        // Corrupt the checksum
        if let Some(last) = serialized.last_mut() {
            *last = last.wrapping_add(1);
        }

        let result = decompress_and_deserialize(&serialized);
        assert!(matches!(result, Err(SaveError::ChecksumMismatch)));
    }

    #[test]
    fn test_truncated_data_is_corrupted() {
        assert!(matches!(decompress_and_deserialize(b"short"), Err(SaveError::Corrupted)));
    }

    #[test]
    fn test_more_wins_than_games_is_rejected() {
        let save = StatsSave::new(GameStats { games_played: 1, games_won: 2 });
        assert!(matches!(serialize_and_compress(&save), Err(SaveError::Corrupted)));
    }

    #[test]
    fn test_record_result() {
        let mut stats = GameStats::default();
        stats.record_result(true);
        stats.record_result(false);
        stats.record_result(false);
        stats.record_result(true);
        assert_eq!(stats, GameStats { games_played: 4, games_won: 2 });
        assert!((stats.win_rate() - 50.0).abs() < f32::EPSILON);
        assert_eq!(GameStats::default().win_rate(), 0.0);
    }
}
