//! The three hint tiers and what each one reveals about the target.

use crate::data::{RankCategory, Roster};
use crate::models::{country_name, PlayerRecord};
use serde::{Deserialize, Serialize};

/// Countries with at least this many players are too common to be a useful clue.
pub const RARE_COUNTRY_LIMIT: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HintTier {
    Salary,
    BlurredImage,
    Clue,
}

impl HintTier {
    pub fn from_hints_used(hints_used: u8) -> Option<Self> {
        match hints_used {
            0 => Some(HintTier::Salary),
            1 => Some(HintTier::BlurredImage),
            2 => Some(HintTier::Clue),
            _ => None,
        }
    }

    /// 1-based tier number shown to the player.
    pub fn number(&self) -> u8 {
        match self {
            HintTier::Salary => 1,
            HintTier::BlurredImage => 2,
            HintTier::Clue => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Hint {
    Salary { amount: u64 },
    BlurredImage { image: String },
    TopTen { category: RankCategory },
    RareCountry { code: String, name: String, count: usize },
    HalfImage { image: String },
}

impl Hint {
    /// Resolve what `tier` reveals about `target`.
    pub fn reveal(tier: HintTier, target: &PlayerRecord, roster: &Roster) -> Self {
        match tier {
            HintTier::Salary => Hint::Salary { amount: target.numeric_salary },
            HintTier::BlurredImage => Hint::BlurredImage { image: target.image.clone() },
            HintTier::Clue => Self::clue(target, roster),
        }
    }

    fn clue(target: &PlayerRecord, roster: &Roster) -> Self {
        if let Some(category) = roster.rankings().top_category(target.id) {
            return Hint::TopTen { category };
        }

        let code = &target.birth_country_code;
        let count = roster.country_count(code);
        if (1..RARE_COUNTRY_LIMIT).contains(&count) {
            return Hint::RareCountry { code: code.clone(), name: country_name(code), count };
        }

        Hint::HalfImage { image: target.image.clone() }
    }
}

/// Result of a hint request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum HintOutcome {
    Revealed { tier: HintTier, hint: Hint },
    /// All three tiers already used this round.
    Exhausted,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::roster::fixtures::{ladder, raw};
    use crate::models::{PlayerId, Position};

    fn middle_player_roster(country_of_middle: &str, others_from_same: usize) -> Roster {
        // 30 players so index 15 sits outside every top 10.
        let mut raw = ladder(30);
        for (i, r) in raw.iter_mut().enumerate() {
            r.birth_country_code = if i == 15 || i < others_from_same {
                country_of_middle.to_string()
            } else {
                "us".to_string()
            };
        }
        Roster::from_raw(raw)
    }

    #[test]
    fn first_two_tiers() {
        let roster = Roster::from_raw(ladder(3));
        let target = roster.get(PlayerId(1)).unwrap();
        assert_eq!(
            Hint::reveal(HintTier::Salary, target, &roster),
            Hint::Salary { amount: 5_000_000 }
        );
        assert_eq!(
            Hint::reveal(HintTier::BlurredImage, target, &roster),
            Hint::BlurredImage { image: "images/player_1.png".to_string() }
        );
    }

    #[test]
    fn clue_prefers_top_ten() {
        let roster = Roster::from_raw(ladder(30));
        let tallest = roster.get(PlayerId(29)).unwrap();
        assert_eq!(
            Hint::reveal(HintTier::Clue, tallest, &roster),
            Hint::TopTen { category: RankCategory::Tallest }
        );
    }

    #[test]
    fn clue_falls_back_to_rare_country() {
        let roster = middle_player_roster("gr", 2);
        let target = roster.get(PlayerId(15)).unwrap();
        assert_eq!(
            Hint::reveal(HintTier::Clue, target, &roster),
            Hint::RareCountry { code: "gr".into(), name: "Greece".into(), count: 3 }
        );
    }

    #[test]
    fn common_country_gives_half_image() {
        let roster = middle_player_roster("us", 0);
        let target = roster.get(PlayerId(15)).unwrap();
        assert_eq!(roster.country_count("us"), 30);
        assert!(matches!(Hint::reveal(HintTier::Clue, target, &roster), Hint::HalfImage { .. }));
    }

    #[test]
    fn fourteen_compatriots_is_still_rare() {
        let roster = middle_player_roster("fr", 13);
        let target = roster.get(PlayerId(15)).unwrap();
        assert_eq!(roster.country_count("fr"), 14);
        assert_eq!(
            Hint::reveal(HintTier::Clue, target, &roster),
            Hint::RareCountry { code: "fr".into(), name: "France".into(), count: 14 }
        );
    }

    #[test]
    fn fifteen_compatriots_gives_half_image() {
        let roster = middle_player_roster("fr", 14);
        let target = roster.get(PlayerId(15)).unwrap();
        assert_eq!(roster.country_count("fr"), 15);
        assert_eq!(
            Hint::reveal(HintTier::Clue, target, &roster),
            Hint::HalfImage { image: "images/player_15.png".into() }
        );
    }

    /// Everyone 6-6 and 25 years old except the player at index 20.
    fn flat_roster_with_age_outlier(age: u32) -> Roster {
        let players = (0..30)
            .map(|i| {
                let player_age = if i == 20 { age } else { 25 };
                raw(&format!("Player {i}"), Position::SG, 78, player_age, "$3,000,000")
            })
            .collect();
        Roster::from_raw(players)
    }

    #[test]
    fn clue_reaches_youngest() {
        let roster = flat_roster_with_age_outlier(19);
        let target = roster.get(PlayerId(20)).unwrap();
        assert_eq!(
            Hint::reveal(HintTier::Clue, target, &roster),
            Hint::TopTen { category: RankCategory::Youngest }
        );
    }

    #[test]
    fn clue_reaches_oldest() {
        let roster = flat_roster_with_age_outlier(40);
        let target = roster.get(PlayerId(20)).unwrap();
        assert_eq!(
            Hint::reveal(HintTier::Clue, target, &roster),
            Hint::TopTen { category: RankCategory::Oldest }
        );
    }

    #[test]
    fn tier_order() {
        assert_eq!(HintTier::from_hints_used(0), Some(HintTier::Salary));
        assert_eq!(HintTier::from_hints_used(2).map(|t| t.number()), Some(3));
        assert_eq!(HintTier::from_hints_used(3), None);
    }
}
