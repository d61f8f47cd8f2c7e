pub mod league;
pub mod player;

pub use league::{conference_abbr, country_name, division_abbr, flag_url};
pub use player::{parse_salary, Experience, PlayerId, PlayerRecord, Position, RawPlayer};
