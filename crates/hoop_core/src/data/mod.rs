//! Dataset loading: roster files and the derived snapshot.

pub mod roster;
pub mod roster_file;

pub use roster::{RankCategory, Rankings, Roster, TOP_RANK_CUTOFF};
pub use roster_file::{
    decode_raw_players, decode_roster, load_roster, RosterCache, ROSTER_CACHE_SCHEMA_VERSION,
};
