use crate::error::GameError;
use crate::models::league::{conference_abbr, division_abbr};
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Basketball position codes used by the roster export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Position {
    PG, // Point guard
    SG, // Shooting guard
    SF, // Small forward
    PF, // Power forward
    C,  // Center
    /// Any code outside the five above. Has no neighbors.
    #[default]
    Unknown,
}

impl Position {
    pub fn all() -> &'static [Position] {
        &[Position::PG, Position::SG, Position::SF, Position::PF, Position::C]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Position::PG => "PG",
            Position::SG => "SG",
            Position::SF => "SF",
            Position::PF => "PF",
            Position::C => "C",
            Position::Unknown => "N/A",
        }
    }

    /// Positions one step away on the guard → forward → center line.
    pub fn neighbors(&self) -> &'static [Position] {
        match self {
            Position::PG => &[Position::SG],
            Position::SG => &[Position::PG, Position::SF],
            Position::SF => &[Position::SG, Position::PF],
            Position::PF => &[Position::SF, Position::C],
            Position::C => &[Position::PF],
            Position::Unknown => &[],
        }
    }

    pub fn is_neighbor_of(&self, other: Position) -> bool {
        self.neighbors().contains(&other)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Position {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PG" => Ok(Position::PG),
            "SG" => Ok(Position::SG),
            "SF" => Ok(Position::SF),
            "PF" => Ok(Position::PF),
            "C" => Ok(Position::C),
            "N/A" => Ok(Position::Unknown),
            other => Err(GameError::InvalidPosition(other.to_string())),
        }
    }
}

impl TryFrom<String> for Position {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Position> for String {
    fn from(value: Position) -> Self {
        value.name().to_string()
    }
}

/// Seasons played in the league. The export marks first-year players with `"R"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Experience {
    Rookie,
    Years(u32),
    #[default]
    Unknown,
}

impl Serialize for Experience {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Experience::Rookie => serializer.serialize_str("R"),
            Experience::Years(n) => serializer.serialize_u32(*n),
            Experience::Unknown => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Experience {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: Option<NumOrText> = Option::deserialize(deserializer)?;
        Ok(match raw {
            Some(NumOrText::Text(s)) if s.trim().eq_ignore_ascii_case("r") => Experience::Rookie,
            Some(value) => value.as_u32().map(Experience::Years).unwrap_or(Experience::Unknown),
            None => Experience::Unknown,
        })
    }
}

/// JSON exports are loose about numbers: `"23"`, `23` and `23.0` all occur.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum NumOrText {
    Int(i64),
    Float(f64),
    Text(String),
}

impl NumOrText {
    /// Leading-integer parse, so `"6"` and `" 6 "` both yield 6 while `"N/A"` yields nothing.
    fn as_u32(&self) -> Option<u32> {
        match self {
            NumOrText::Int(n) => u32::try_from(*n).ok(),
            NumOrText::Float(f) if f.is_finite() && *f >= 0.0 => Some(f.trunc() as u32),
            NumOrText::Float(_) => None,
            NumOrText::Text(s) => {
                let digits: String =
                    s.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
                digits.parse().ok()
            }
        }
    }

    fn into_text(self) -> String {
        match self {
            NumOrText::Int(n) => n.to_string(),
            NumOrText::Float(f) => f.to_string(),
            NumOrText::Text(s) => s,
        }
    }
}

fn de_loose_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let raw: Option<NumOrText> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|v| v.as_u32()))
}

fn de_loose_position<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Position, D::Error> {
    let raw: Option<NumOrText> = Option::deserialize(deserializer)?;
    let text = raw.map(NumOrText::into_text).unwrap_or_default();
    Ok(text.parse().unwrap_or_else(|_| {
        log::warn!("Unrecognized position \"{}\", treating as unknown", text);
        Position::Unknown
    }))
}

fn de_loose_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let raw: Option<NumOrText> = Option::deserialize(deserializer)?;
    Ok(raw.map(NumOrText::into_text).unwrap_or_default())
}

/// One row of the roster export, as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPlayer {
    pub player: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized_player: Option<String>,
    #[serde(default, deserialize_with = "de_loose_position")]
    pub pos: Position,
    #[serde(default, deserialize_with = "de_loose_u32")]
    pub number: Option<u32>,
    /// Inches.
    #[serde(default, deserialize_with = "de_loose_u32")]
    pub height: Option<u32>,
    #[serde(default, deserialize_with = "de_loose_u32")]
    pub age: Option<u32>,
    /// Currency string such as `"$12,405,000"`.
    #[serde(default, deserialize_with = "de_loose_text")]
    pub salary: String,
    pub team: String,
    pub conference: String,
    pub division: String,
    pub birth_country_code: String,
    #[serde(default)]
    pub years_experience: Experience,
    #[serde(default)]
    pub image: String,
}

/// Stable identity of a record within a loaded roster (its load order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A roster entry with its derived fields cached at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub name: String,
    pub normalized_name: String,
    pub position: Position,
    pub number: Option<u32>,
    pub height: Option<u32>,
    pub age: Option<u32>,
    pub salary: String,
    pub numeric_salary: u64,
    pub team: String,
    pub conference: String,
    pub conference_abbr: String,
    pub division: String,
    pub division_abbr: String,
    /// Lowercase ISO 3166-1 alpha-2 code.
    pub birth_country_code: String,
    pub years_experience: Experience,
    pub image: String,
}

impl PlayerRecord {
    pub fn from_raw(id: PlayerId, raw: RawPlayer) -> Self {
        let numeric_salary = parse_salary(&raw.salary).unwrap_or_else(|| {
            log::warn!("Invalid salary for {}: \"{}\", using 0", raw.player, raw.salary);
            0
        });
        let normalized_name = crate::game::normalize::normalize_name(
            raw.normalized_player.as_deref().unwrap_or(&raw.player),
        );

        Self {
            id,
            normalized_name,
            position: raw.pos,
            number: raw.number,
            height: raw.height,
            age: raw.age,
            numeric_salary,
            conference_abbr: conference_abbr(&raw.conference).to_string(),
            division_abbr: division_abbr(&raw.division).to_string(),
            birth_country_code: raw.birth_country_code.trim().to_lowercase(),
            years_experience: raw.years_experience,
            name: raw.player,
            salary: raw.salary,
            team: raw.team,
            conference: raw.conference,
            division: raw.division,
            image: raw.image,
        }
    }
}

/// Parse a currency string by keeping its digits: `"$1,017,781"` → 1017781.
///
/// Returns `None` when the string holds no digits at all.
pub fn parse_salary(salary: &str) -> Option<u64> {
    let digits: String = salary.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    // Overflow saturates.
    Some(digits.parse().unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_json() -> serde_json::Value {
        json!({
            "player": "Nikola Jokić",
            "pos": "C",
            "number": "15",
            "height": 83,
            "age": "29",
            "salary": "$51,415,938",
            "team": "Denver Nuggets",
            "conference": "Western Conference",
            "division": "Northwest Division",
            "birth_country_code": "RS",
            "years_experience": 9,
            "image": "images/nikola_jokic.png"
        })
    }

    #[test]
    fn raw_player_accepts_loose_numbers() {
        let raw: RawPlayer = serde_json::from_value(raw_json()).unwrap();
        assert_eq!(raw.number, Some(15));
        assert_eq!(raw.height, Some(83));
        assert_eq!(raw.age, Some(29));
        assert_eq!(raw.years_experience, Experience::Years(9));
    }

    #[test]
    fn rookie_sentinel_and_garbage_experience() {
        let mut value = raw_json();
        value["years_experience"] = json!("R");
        let raw: RawPlayer = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(raw.years_experience, Experience::Rookie);

        value["years_experience"] = json!("n/a");
        let raw: RawPlayer = serde_json::from_value(value).unwrap();
        assert_eq!(raw.years_experience, Experience::Unknown);
    }

    #[test]
    fn record_derives_salary_and_abbreviations() {
        let raw: RawPlayer = serde_json::from_value(raw_json()).unwrap();
        let record = PlayerRecord::from_raw(PlayerId(0), raw);
        assert_eq!(record.numeric_salary, 51_415_938);
        assert_eq!(record.conference_abbr, "West");
        assert_eq!(record.division_abbr, "NW");
        assert_eq!(record.birth_country_code, "rs");
        assert_eq!(record.normalized_name, "nikola jokic");
    }

    #[test]
    fn bad_salary_degrades_to_zero() {
        let mut value = raw_json();
        value["salary"] = json!("TBD");
        let raw: RawPlayer = serde_json::from_value(value).unwrap();
        let record = PlayerRecord::from_raw(PlayerId(3), raw);
        assert_eq!(record.numeric_salary, 0);
        assert_eq!(record.salary, "TBD");
    }

    #[test]
    fn position_parsing_is_case_insensitive() {
        assert_eq!("pf".parse::<Position>().unwrap(), Position::PF);
        assert!("G".parse::<Position>().is_err());
    }

    #[test]
    fn unrecognized_position_loads_as_unknown() {
        for code in ["G", "F-C", ""] {
            let mut value = raw_json();
            value["pos"] = json!(code);
            let raw: RawPlayer = serde_json::from_value(value).unwrap();
            assert_eq!(raw.pos, Position::Unknown);
        }
        let mut value = raw_json();
        value.as_object_mut().unwrap().remove("pos");
        let raw: RawPlayer = serde_json::from_value(value).unwrap();
        assert_eq!(raw.pos, Position::Unknown);
        assert!(Position::Unknown.neighbors().is_empty());
    }

    #[test]
    fn unknown_position_survives_the_cache_encoding() {
        let mut value = raw_json();
        value["pos"] = json!("G-F");
        let raw: RawPlayer = serde_json::from_value(value).unwrap();
        let packed = rmp_serde::to_vec_named(&raw).unwrap();
        let back: RawPlayer = rmp_serde::from_slice(&packed).unwrap();
        assert_eq!(back.pos, Position::Unknown);
    }

    #[test]
    fn neighbor_table_is_symmetric() {
        for a in Position::all() {
            for b in Position::all() {
                assert_eq!(a.is_neighbor_of(*b), b.is_neighbor_of(*a), "{a} vs {b}");
            }
        }
    }
}
