//! Roster file loader.
//!
//! Accepts either the raw `players.json` export (a JSON array of records) or the
//! compact cache written by `roster_builder`:
//! LZ4 (size-prepended) + MessagePack(serde) of `RosterCache`.

use crate::data::roster::Roster;
use crate::error::RosterError;
use crate::models::RawPlayer;
use lz4_flex::decompress_size_prepended;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ROSTER_CACHE_SCHEMA_VERSION: &str = "v1";

/// Upper bound on a cache's decompressed size. Larger size prefixes are rejected unread.
const MAX_CACHE_DECOMPRESSED_BYTES: usize = 64 * 1024 * 1024;

/// On-disk cache payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterCache {
    pub players: Vec<RawPlayer>,
    pub count: u32,
    pub schema_version: String,
}

impl RosterCache {
    pub fn new(players: Vec<RawPlayer>, schema_version: &str) -> Self {
        Self { count: players.len() as u32, players, schema_version: schema_version.to_string() }
    }

    pub fn is_current_schema(&self) -> bool {
        self.schema_version == ROSTER_CACHE_SCHEMA_VERSION
    }

    /// Unwrap the records, warning about a stale schema or a bad header count.
    pub fn into_players(self) -> Vec<RawPlayer> {
        if !self.is_current_schema() {
            log::warn!(
                "Roster cache schema {:?} differs from {:?}; rebuild it with roster_builder",
                self.schema_version,
                ROSTER_CACHE_SCHEMA_VERSION
            );
        }
        if self.count as usize != self.players.len() {
            log::warn!(
                "Roster cache header says {} players but holds {}",
                self.count,
                self.players.len()
            );
        }
        self.players
    }
}

fn looks_like_json(bytes: &[u8]) -> bool {
    matches!(bytes.iter().find(|b| !b.is_ascii_whitespace()), Some(b'[') | Some(b'{'))
}

fn decode_cache_bytes(bytes: &[u8]) -> Result<RosterCache, RosterError> {
    // Some local workflows write the MessagePack payload without LZ4;
    // prefer the simplest successful decode.
    if let Ok(cache) = rmp_serde::from_slice::<RosterCache>(bytes) {
        return Ok(cache);
    }

    let declared = bytes
        .get(..4)
        .map(|prefix| u32::from_le_bytes([prefix[0], prefix[1], prefix[2], prefix[3]]) as usize)
        .ok_or_else(|| RosterError::Decompression("missing size prefix".to_string()))?;
    if declared > MAX_CACHE_DECOMPRESSED_BYTES {
        return Err(RosterError::Decompression(format!(
            "declared size {} exceeds {} bytes",
            declared, MAX_CACHE_DECOMPRESSED_BYTES
        )));
    }

    let msgpack = decompress_size_prepended(bytes)
        .map_err(|e| RosterError::Decompression(e.to_string()))?;
    Ok(rmp_serde::from_slice::<RosterCache>(&msgpack)?)
}

/// Decode raw records from JSON export or cache bytes.
pub fn decode_raw_players(bytes: &[u8]) -> Result<Vec<RawPlayer>, RosterError> {
    if looks_like_json(bytes) {
        // An LZ4 size prefix can start with '[' or '{' too.
        match serde_json::from_slice(bytes) {
            Ok(players) => return Ok(players),
            Err(json_err) => {
                return decode_cache_bytes(bytes)
                    .map(RosterCache::into_players)
                    .map_err(|_| RosterError::Json(json_err));
            }
        }
    }

    Ok(decode_cache_bytes(bytes)?.into_players())
}

pub fn decode_roster(bytes: &[u8]) -> Result<Roster, RosterError> {
    decode_raw_players(bytes).map(Roster::from_raw)
}

/// Read and derive a roster from `path`.
pub fn load_roster(path: &Path) -> Result<Roster, RosterError> {
    if !path.exists() {
        return Err(RosterError::FileNotFound { path: path.display().to_string() });
    }
    let bytes = std::fs::read(path)?;
    log::debug!("Read {} roster bytes from {:?}", bytes.len(), path);
    decode_roster(&bytes)
}
