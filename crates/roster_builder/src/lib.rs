//! Roster cache builder
//!
//! players.json → `RosterCache` → MessagePack → LZ4 → SHA256 checksum.
//! The game loads either the JSON export or the cache this crate writes.

use anyhow::{Context, Result};
use hoop_core::data::{decode_raw_players, RosterCache, Roster};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub use hoop_core::data::ROSTER_CACHE_SCHEMA_VERSION;

/// Build report, also written as JSON next to the cache on request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheMetadata {
    /// Schema version (e.g. "v1")
    pub schema_version: String,
    /// SHA256 of the cache file (hex)
    pub checksum: String,
    /// RFC3339
    pub created_at: String,
    /// Input JSON size (bytes)
    pub original_size: u64,
    pub compressed_size: u64,
    /// compressed / original
    pub compression_ratio: f64,
    pub player_count: u32,
    /// Players whose salary did not parse; they only appear in mode "all".
    pub zero_salary_count: u32,
    /// Normalized names shared by more than one player; only the first is guessable.
    pub duplicate_names: Vec<String>,
}

/// Convert a players.json export into a compressed roster cache.
pub fn build_cache(input_json: &Path, output: &Path, schema_version: &str) -> Result<CacheMetadata> {
    let json = fs::read(input_json)
        .with_context(|| format!("Failed to read roster JSON: {}", input_json.display()))?;
    let original_size = json.len() as u64;

    let raw = decode_raw_players(&json).context("Failed to parse roster JSON")?;

    // Derive records once to report data problems before the cache ships.
    let roster = Roster::from_raw(raw.clone());
    let zero_salary_count = roster.players().iter().filter(|p| p.numeric_salary == 0).count() as u32;
    let duplicate_names = duplicate_names(&roster);
    for name in &duplicate_names {
        log::warn!("Duplicate normalized name {:?}: only the first entry is guessable", name);
    }

    let cache = RosterCache::new(raw, schema_version);
    let msgpack = rmp_serde::to_vec_named(&cache).context("Failed to serialize to MessagePack")?;
    let compressed = lz4_flex::compress_prepend_size(&msgpack);
    let compressed_size = compressed.len() as u64;
    let checksum = sha256_hex(&compressed);

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(output, &compressed)
        .with_context(|| format!("Failed to write cache: {}", output.display()))?;

    log::info!(
        "Roster cache written: {} players, {} -> {} bytes",
        cache.count,
        original_size,
        compressed_size
    );

    Ok(CacheMetadata {
        schema_version: schema_version.to_string(),
        checksum,
        created_at: chrono::Utc::now().to_rfc3339(),
        original_size,
        compressed_size,
        compression_ratio: if original_size == 0 {
            0.0
        } else {
            compressed_size as f64 / original_size as f64
        },
        player_count: cache.count,
        zero_salary_count,
        duplicate_names,
    })
}

/// Check a cache file against an expected SHA256.
pub fn verify_cache(cache_file: &Path, expected_checksum: &str) -> Result<bool> {
    let bytes = fs::read(cache_file)
        .with_context(|| format!("Failed to read cache file: {}", cache_file.display()))?;
    Ok(sha256_hex(&bytes).eq_ignore_ascii_case(expected_checksum.trim()))
}

pub fn load_cache(cache_file: &Path) -> Result<RosterCache> {
    let compressed = fs::read(cache_file)
        .with_context(|| format!("Failed to read cache file: {}", cache_file.display()))?;
    let msgpack =
        lz4_flex::decompress_size_prepended(&compressed).context("Failed to decompress LZ4")?;
    let cache: RosterCache =
        rmp_serde::from_slice(&msgpack).context("Failed to deserialize MessagePack")?;

    if cache.count as usize != cache.players.len() {
        anyhow::bail!(
            "Cache count mismatch: header says {}, found {} players",
            cache.count,
            cache.players.len()
        );
    }
    if !cache.is_current_schema() {
        log::warn!(
            "Cache schema {:?} differs from current {:?}",
            cache.schema_version,
            ROSTER_CACHE_SCHEMA_VERSION
        );
    }
    Ok(cache)
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

fn duplicate_names(roster: &Roster) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut dups = Vec::new();
    for player in roster.players() {
        let name = &player.normalized_name;
        if !seen.insert(name.as_str()) && !dups.contains(name) {
            dups.push(name.clone());
        }
    }
    dups
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn player_json(name: &str, salary: &str) -> serde_json::Value {
        serde_json::json!({
            "player": name,
            "pos": "SG",
            "number": 7,
            "height": 77,
            "age": 26,
            "salary": salary,
            "team": "Miami Heat",
            "conference": "Eastern Conference",
            "division": "Southeast Division",
            "birth_country_code": "us",
            "years_experience": 4,
            "image": format!("images/{name}.png"),
        })
    }

    fn write_json(value: &serde_json::Value) -> Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        file.write_all(value.to_string().as_bytes())?;
        Ok(file)
    }

    #[test]
    fn test_build_verify_and_load() -> Result<()> {
        let players: Vec<_> = (0..50)
            .map(|i| player_json(&format!("Player {i}"), "$4,500,000"))
            .collect();
        let input = write_json(&serde_json::Value::Array(players))?;
        let dir = TempDir::new()?;
        let out = dir.path().join("cache").join("players.cache");

        let meta = build_cache(input.path(), &out, ROSTER_CACHE_SCHEMA_VERSION)?;
        assert_eq!(meta.player_count, 50);
        assert_eq!(meta.zero_salary_count, 0);
        assert!(meta.duplicate_names.is_empty());
        assert!(meta.compressed_size < meta.original_size);
        assert!(verify_cache(&out, &meta.checksum)?);
        assert!(!verify_cache(&out, &"0".repeat(64))?);

        let cache = load_cache(&out)?;
        assert_eq!(cache.schema_version, "v1");
        assert_eq!(cache.players[3].player, "Player 3");

        // The game loader reads the same file.
        let roster = hoop_core::load_roster(&out)?;
        assert_eq!(roster.len(), 50);
        assert_eq!(roster.players()[0].numeric_salary, 4_500_000);
        Ok(())
    }

    #[test]
    fn test_reports_data_problems() -> Result<()> {
        let input = write_json(&serde_json::json!([
            player_json("Gary Trent Jr.", "$18,560,000"),
            player_json("Gary Trent", "N/A"),
            player_json("Bam Adebayo", ""),
        ]))?;
        let dir = TempDir::new()?;
        let meta = build_cache(input.path(), &dir.path().join("p.cache"), "v1")?;

        assert_eq!(meta.zero_salary_count, 2);
        assert_eq!(meta.duplicate_names, vec!["gary trent".to_string()]);
        Ok(())
    }

    #[test]
    fn test_rejects_malformed_json() -> Result<()> {
        let mut input = NamedTempFile::new()?;
        input.write_all(b"[{\"player\": \"No Position\"}]")?;
        let dir = TempDir::new()?;
        assert!(build_cache(input.path(), &dir.path().join("p.cache"), "v1").is_err());
        Ok(())
    }
}
