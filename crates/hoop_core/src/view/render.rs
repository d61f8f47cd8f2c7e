//! Render models: plain data a presenter turns into pixels or text.

use super::format::{format_experience, format_height, format_optional, format_salary, image_file_name};
use crate::game::{Direction, GuessOutcome, Hint, HintTier, NumericFeedback, Verdict};
use crate::models::{country_name, flag_url, PlayerRecord};
use serde::Serialize;
use std::fmt;

const VETERAN_AGE: u32 = 30;

/// One attribute box. `verdict` is `None` for neutral (reveal) cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCell {
    pub text: String,
    pub verdict: Option<Verdict>,
    pub direction: Option<Direction>,
}

impl StatCell {
    pub fn neutral(text: impl Into<String>) -> Self {
        Self { text: text.into(), verdict: None, direction: None }
    }

    pub fn judged(text: impl Into<String>, verdict: Verdict) -> Self {
        Self { text: text.into(), verdict: Some(verdict), direction: None }
    }

    pub fn numeric(text: impl Into<String>, feedback: NumericFeedback) -> Self {
        Self { text: text.into(), verdict: Some(feedback.verdict), direction: feedback.direction }
    }

    pub fn marker(&self) -> &'static str {
        match self.verdict {
            Some(Verdict::Exact) => "✅",
            Some(Verdict::Close) => "⚠️",
            Some(Verdict::Miss) => "❌",
            None => "",
        }
    }

    pub fn arrow(&self) -> &'static str {
        match (self.verdict, self.direction) {
            (Some(Verdict::Exact), _) | (_, None) => "",
            (_, Some(Direction::Higher)) => "▲",
            (_, Some(Direction::Lower)) => "▼",
        }
    }
}

impl fmt::Display for StatCell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}{}", self.text, self.marker(), self.arrow())
    }
}

/// Identity line shown above the stat rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerHeader {
    pub name: String,
    pub image: String,
    pub flag_url: String,
    pub country: String,
    pub experience: String,
}

impl PlayerHeader {
    pub fn from_record(player: &PlayerRecord) -> Self {
        Self {
            name: player.name.clone(),
            image: image_file_name(&player.image).to_string(),
            flag_url: flag_url(&player.birth_country_code),
            country: country_name(&player.birth_country_code),
            experience: format_experience(player.years_experience),
        }
    }
}

fn age_icon(age: Option<u32>) -> &'static str {
    if age.is_some_and(|a| a >= VETERAN_AGE) {
        "👴"
    } else {
        "🧒"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessView {
    pub title: String,
    pub header: PlayerHeader,
    /// Position, height, age, number.
    pub main_stats: Vec<StatCell>,
    /// Team, conference, division.
    pub team_stats: Vec<StatCell>,
}

impl GuessView {
    pub fn from_outcome(outcome: &GuessOutcome) -> Self {
        let g = &outcome.guessed;
        let fb = &outcome.feedback;
        Self {
            title: format!("Guess {}", outcome.guess_number),
            header: PlayerHeader::from_record(g),
            main_stats: vec![
                StatCell::judged(format!("🏀 {}", g.position), fb.position),
                StatCell::numeric(format!("📏 {}", format_height(g.height)), fb.height),
                StatCell::numeric(
                    format!("{} Age: {}", age_icon(g.age), format_optional(g.age)),
                    fb.age,
                ),
                StatCell::numeric(format!("#{}", format_optional(g.number)), fb.number),
            ],
            team_stats: vec![
                StatCell::judged(format!("🏙️ Team: {}", g.team), fb.team),
                StatCell::judged(format!("🌎 {}", g.conference_abbr), fb.conference),
                StatCell::judged(format!("📍 Div: {}", g.division_abbr), fb.division),
            ],
        }
    }
}

/// Neutral card for revealing the target at the end of a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerCard {
    pub header: PlayerHeader,
    pub main_stats: Vec<StatCell>,
    pub team_stats: Vec<StatCell>,
}

impl PlayerCard {
    pub fn from_record(p: &PlayerRecord) -> Self {
        Self {
            header: PlayerHeader::from_record(p),
            main_stats: vec![
                StatCell::neutral(format!("🏀 {}", p.position)),
                StatCell::neutral(format!("📏 {}", format_height(p.height))),
                StatCell::neutral(format!("{} Age: {}", age_icon(p.age), format_optional(p.age))),
                StatCell::neutral(format!("#{}", format_optional(p.number))),
            ],
            team_stats: vec![
                StatCell::neutral(format!("🏙️ Team: {}", p.team)),
                StatCell::neutral(format!("🌎 {}", p.conference_abbr)),
                StatCell::neutral(format!("📍 Div: {}", p.division_abbr)),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerKind {
    Victory,
    GameOver,
    NoPlayers,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
    pub player: Option<PlayerCard>,
}

impl Banner {
    pub fn victory(target: &PlayerRecord) -> Self {
        Self {
            kind: BannerKind::Victory,
            message: format!("🏀 Victory! You guessed {} correctly! 🏀", target.name),
            player: Some(PlayerCard::from_record(target)),
        }
    }

    pub fn game_over(target: &PlayerRecord) -> Self {
        Self {
            kind: BannerKind::GameOver,
            message: format!("😢 Game Over! The correct player was {}. 😢", target.name),
            player: Some(PlayerCard::from_record(target)),
        }
    }

    pub fn no_players() -> Self {
        Self {
            kind: BannerKind::NoPlayers,
            message: "No players in this mode. Please change the mode.".to_string(),
            player: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageTreatment {
    Blurred,
    HalfHidden,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageReveal {
    pub file: String,
    pub treatment: ImageTreatment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HintView {
    pub tier: u8,
    pub text: String,
    pub image: Option<ImageReveal>,
    pub flag_url: Option<String>,
}

impl HintView {
    pub fn new(tier: HintTier, hint: &Hint) -> Self {
        let tier = tier.number();
        let base = Self { tier, text: String::new(), image: None, flag_url: None };
        match hint {
            Hint::Salary { amount } => Self {
                text: format!(
                    "🏀 Hint {tier}: The player's salary is approximately ${} per year.",
                    format_salary(*amount)
                ),
                ..base
            },
            Hint::BlurredImage { image } => Self {
                text: format!("🏀 Hint {tier}: Here is a blurred image of the player."),
                image: Some(ImageReveal {
                    file: image_file_name(image).to_string(),
                    treatment: ImageTreatment::Blurred,
                }),
                ..base
            },
            Hint::TopTen { category } => Self {
                text: format!(
                    "🏀 Hint {tier}: This player is among the top 10 {} players in the NBA.",
                    category.label()
                ),
                ..base
            },
            Hint::RareCountry { code, name, count } => Self {
                text: format!("🏀 Hint {tier}: This player is 1 of {count} from {name}."),
                flag_url: Some(flag_url(code)),
                ..base
            },
            Hint::HalfImage { image } => Self {
                text: format!("🏀 Hint {tier}: Here is half of the player's image."),
                image: Some(ImageReveal {
                    file: image_file_name(image).to_string(),
                    treatment: ImageTreatment::HalfHidden,
                }),
                ..base
            },
        }
    }
}
