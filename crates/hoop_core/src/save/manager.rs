use super::error::SaveError;
use super::format::{decompress_and_deserialize, serialize_and_compress, GameStats, StatsSave};

use std::fs::{rename, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// File-backed scoreboard.
#[derive(Debug, Clone)]
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn load(&self) -> Result<GameStats, SaveError> {
        Self::load_from_path(&self.path).map(|save| save.stats)
    }

    /// Stored stats, or zeros when the file is missing or unreadable.
    pub fn load_or_default(&self) -> GameStats {
        match self.load() {
            Ok(stats) => stats,
            Err(SaveError::FileNotFound { .. }) => {
                log::debug!("No stats file at {:?}, starting from zero", self.path);
                GameStats::default()
            }
            Err(e) if e.is_recoverable() => {
                log::warn!("Unreadable stats file {:?} ({}), starting from zero", self.path, e);
                GameStats::default()
            }
            Err(e) => {
                log::error!("Stats file {:?} rejected: {}", self.path, e);
                GameStats::default()
            }
        }
    }

    pub fn save(&self, stats: &GameStats) -> Result<(), SaveError> {
        Self::save_to_path(&self.path, &StatsSave::new(*stats))?;
        log::info!(
            "Stats saved: {} played, {} won",
            stats.games_played,
            stats.games_won
        );
        Ok(())
    }

    fn save_to_path(path: &Path, save: &StatsSave) -> Result<(), SaveError> {
        // Ensure save directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let data = serialize_and_compress(save)?;

        // Atomic save: write to temp file, then rename
        let temp_path = path.with_extension("tmp");

        {
            let mut file = File::create(&temp_path)?;
            file.write_all(&data)?;
            file.flush()?;

            // sync_all ensures data is written to disk (portable fsync)
            file.sync_all()?;
        }

        rename(&temp_path, path)?;

        log::debug!("Saved {} bytes to {:?}", data.len(), path);
        Ok(())
    }

    fn load_from_path(path: &Path) -> Result<StatsSave, SaveError> {
        if !path.exists() {
            return Err(SaveError::FileNotFound { path: path.display().to_string() });
        }

        let mut file = File::open(path)?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;

        let save = decompress_and_deserialize(&data)?;

        log::debug!("Loaded {} bytes from {:?}", data.len(), path);
        Ok(save)
    }
}
