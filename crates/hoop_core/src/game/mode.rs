//! Salary-band difficulty modes.

use crate::data::Roster;
use crate::error::GameError;
use crate::models::PlayerId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const EASY_MIN_EXCLUSIVE: u64 = 25_000_000;
pub const MEDIUM_MIN: u64 = 7_000_000;
pub const HARD_MIN: u64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    All,
    /// Max-contract stars.
    Easy,
    Medium,
    /// Role players and minimum deals.
    Hard,
}

impl Mode {
    pub fn all() -> &'static [Mode] {
        &[Mode::All, Mode::Easy, Mode::Medium, Mode::Hard]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mode::All => "all",
            Mode::Easy => "easy",
            Mode::Medium => "medium",
            Mode::Hard => "hard",
        }
    }

    /// Whether a numeric salary falls in this mode's band.
    ///
    /// Easy is above 25M, medium is 7M through 25M, hard is 1M up to (not including) 7M.
    pub fn contains(&self, salary: u64) -> bool {
        match self {
            Mode::All => true,
            Mode::Easy => salary > EASY_MIN_EXCLUSIVE,
            Mode::Medium => (MEDIUM_MIN..=EASY_MIN_EXCLUSIVE).contains(&salary),
            Mode::Hard => (HARD_MIN..MEDIUM_MIN).contains(&salary),
        }
    }

    /// Narrow the roster to this mode's band, keeping load order.
    pub fn filter(&self, roster: &Roster) -> Vec<PlayerId> {
        roster
            .players()
            .iter()
            .filter(|p| self.contains(p.numeric_salary))
            .map(|p| p.id)
            .collect()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Mode::All),
            "easy" => Ok(Mode::Easy),
            "medium" => Ok(Mode::Medium),
            "hard" => Ok(Mode::Hard),
            other => Err(GameError::InvalidMode(other.to_string())),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every salary lands in at most one band, and every salary >= 1M in exactly one.
        #[test]
        fn prop_bands_are_disjoint(salary in 0u64..100_000_000) {
            let hits = [Mode::Easy, Mode::Medium, Mode::Hard]
                .iter()
                .filter(|m| m.contains(salary))
                .count();
            prop_assert!(hits <= 1);
            if salary >= HARD_MIN {
                prop_assert_eq!(hits, 1);
            }
        }
    }
}
