//! Roster snapshot: every loaded record plus the orderings the hint tiers need.

use crate::models::{PlayerId, PlayerRecord, RawPlayer};
use serde::Serialize;
use std::collections::HashMap;

/// How many entries at each end of a ranking count as "top 10".
pub const TOP_RANK_CUTOFF: usize = 10;

/// Extremes checked by the third hint, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RankCategory {
    Tallest,
    Shortest,
    Youngest,
    Oldest,
}

impl RankCategory {
    pub fn all() -> &'static [RankCategory] {
        &[RankCategory::Tallest, RankCategory::Shortest, RankCategory::Youngest, RankCategory::Oldest]
    }

    pub fn label(&self) -> &'static str {
        match self {
            RankCategory::Tallest => "tallest",
            RankCategory::Shortest => "shortest",
            RankCategory::Youngest => "youngest",
            RankCategory::Oldest => "oldest",
        }
    }
}

/// Full sort orders over the roster. Ties keep load order.
#[derive(Debug, Clone, Default)]
pub struct Rankings {
    pub tallest: Vec<PlayerId>,
    pub shortest: Vec<PlayerId>,
    pub youngest: Vec<PlayerId>,
    pub oldest: Vec<PlayerId>,
}

impl Rankings {
    fn build(players: &[PlayerRecord]) -> Self {
        Self {
            tallest: sorted_ids(players, |p| p.height, true),
            shortest: sorted_ids(players, |p| p.height, false),
            youngest: sorted_ids(players, |p| p.age, false),
            oldest: sorted_ids(players, |p| p.age, true),
        }
    }

    pub fn order(&self, category: RankCategory) -> &[PlayerId] {
        match category {
            RankCategory::Tallest => &self.tallest,
            RankCategory::Shortest => &self.shortest,
            RankCategory::Youngest => &self.youngest,
            RankCategory::Oldest => &self.oldest,
        }
    }

    /// First category, in priority order, whose top 10 contains `id`.
    pub fn top_category(&self, id: PlayerId) -> Option<RankCategory> {
        RankCategory::all().iter().copied().find(|&category| {
            self.order(category).iter().take(TOP_RANK_CUTOFF).any(|&ranked| ranked == id)
        })
    }
}

/// Records without a value never rank.
fn sorted_ids(
    players: &[PlayerRecord],
    key: fn(&PlayerRecord) -> Option<u32>,
    descending: bool,
) -> Vec<PlayerId> {
    let mut keyed: Vec<(u32, PlayerId)> =
        players.iter().filter_map(|p| key(p).map(|v| (v, p.id))).collect();
    // sort_by is stable: equal values stay in load order
    if descending {
        keyed.sort_by(|a, b| b.0.cmp(&a.0));
    } else {
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
    }
    keyed.into_iter().map(|(_, id)| id).collect()
}

/// Immutable view of the whole dataset.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<PlayerRecord>,
    rankings: Rankings,
    country_counts: HashMap<String, usize>,
}

impl Roster {
    pub fn from_raw(raw: Vec<RawPlayer>) -> Self {
        let players: Vec<PlayerRecord> = raw
            .into_iter()
            .enumerate()
            .map(|(idx, r)| PlayerRecord::from_raw(PlayerId(idx as u32), r))
            .collect();

        let mut country_counts = HashMap::new();
        for player in &players {
            *country_counts.entry(player.birth_country_code.clone()).or_insert(0) += 1;
        }

        let rankings = Rankings::build(&players);

        log::info!(
            "Roster loaded: {} players from {} countries",
            players.len(),
            country_counts.len()
        );

        Self { players, rankings, country_counts }
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn get(&self, id: PlayerId) -> Option<&PlayerRecord> {
        self.players.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn rankings(&self) -> &Rankings {
        &self.rankings
    }

    /// Players born in `code` across the whole roster (case-insensitive).
    pub fn country_count(&self, code: &str) -> usize {
        self.country_counts.get(&code.trim().to_lowercase()).copied().unwrap_or(0)
    }
}
