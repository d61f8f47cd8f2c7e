//! Field-by-field comparison of a guess against the target.

use crate::models::PlayerRecord;
use serde::{Deserialize, Serialize};

pub const NUMBER_CLOSE_TOLERANCE: u32 = 1;
/// Inches either side.
pub const HEIGHT_CLOSE_TOLERANCE: u32 = 1;
pub const AGE_CLOSE_TOLERANCE: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Exact,
    Close,
    Miss,
}

impl Verdict {
    pub fn is_exact(&self) -> bool {
        *self == Verdict::Exact
    }

    fn from_equality(equal: bool) -> Self {
        if equal {
            Verdict::Exact
        } else {
            Verdict::Miss
        }
    }
}

/// Where the target sits relative to the guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Target value is above the guess.
    Higher,
    /// Target value is below the guess.
    Lower,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericFeedback {
    pub verdict: Verdict,
    /// Present whenever both values are known and differ, including close misses.
    pub direction: Option<Direction>,
}

impl NumericFeedback {
    fn compare(guess: Option<u32>, target: Option<u32>, tolerance: u32) -> Self {
        if guess == target {
            return Self { verdict: Verdict::Exact, direction: None };
        }
        match (guess, target) {
            (Some(g), Some(t)) => Self {
                verdict: if g.abs_diff(t) <= tolerance { Verdict::Close } else { Verdict::Miss },
                direction: Some(if t > g { Direction::Higher } else { Direction::Lower }),
            },
            _ => Self { verdict: Verdict::Miss, direction: None },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub position: Verdict,
    pub number: NumericFeedback,
    pub height: NumericFeedback,
    pub age: NumericFeedback,
    pub team: Verdict,
    pub conference: Verdict,
    pub division: Verdict,
}

impl Feedback {
    /// Compare `guess` against `target`. Pure and deterministic.
    pub fn evaluate(guess: &PlayerRecord, target: &PlayerRecord) -> Self {
        let position = if guess.position == target.position {
            Verdict::Exact
        } else if target.position.is_neighbor_of(guess.position) {
            Verdict::Close
        } else {
            Verdict::Miss
        };

        Self {
            position,
            number: NumericFeedback::compare(guess.number, target.number, NUMBER_CLOSE_TOLERANCE),
            height: NumericFeedback::compare(guess.height, target.height, HEIGHT_CLOSE_TOLERANCE),
            age: NumericFeedback::compare(guess.age, target.age, AGE_CLOSE_TOLERANCE),
            team: Verdict::from_equality(guess.team == target.team),
            conference: Verdict::from_equality(guess.conference == target.conference),
            division: Verdict::from_equality(guess.division == target.division),
        }
    }

    pub fn is_all_exact(&self) -> bool {
        [
            self.position,
            self.number.verdict,
            self.height.verdict,
            self.age.verdict,
            self.team,
            self.conference,
            self.division,
        ]
        .iter()
        .all(Verdict::is_exact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::roster::fixtures::raw;
    use crate::models::{PlayerId, Position};

    fn record(pos: Position, height: u32, age: u32) -> PlayerRecord {
        PlayerRecord::from_raw(PlayerId(0), raw("Test Player", pos, height, age, "$1,000,000"))
    }

    #[test]
    fn height_one_inch_short_is_close_and_higher() {
        let target = record(Position::C, 84, 30);
        let fb = Feedback::evaluate(&record(Position::C, 83, 30), &target);
        assert_eq!(fb.height.verdict, Verdict::Close);
        assert_eq!(fb.height.direction, Some(Direction::Higher));
    }

    #[test]
    fn height_two_inches_over_is_miss_and_lower() {
        let target = record(Position::C, 84, 30);
        let fb = Feedback::evaluate(&record(Position::C, 86, 30), &target);
        assert_eq!(fb.height.verdict, Verdict::Miss);
        assert_eq!(fb.height.direction, Some(Direction::Lower));
    }

    #[test]
    fn power_forward_is_close_to_center() {
        let target = record(Position::C, 84, 30);
        assert_eq!(Feedback::evaluate(&record(Position::PF, 84, 30), &target).position, Verdict::Close);
        assert_eq!(Feedback::evaluate(&record(Position::PG, 84, 30), &target).position, Verdict::Miss);
    }

    #[test]
    fn unknown_position_is_never_close() {
        let center = record(Position::C, 84, 30);
        let unknown = record(Position::Unknown, 84, 30);
        assert_eq!(Feedback::evaluate(&unknown, &center).position, Verdict::Miss);
        assert_eq!(Feedback::evaluate(&center, &unknown).position, Verdict::Miss);
        // Two unknowns compare like two missing numbers.
        assert_eq!(Feedback::evaluate(&unknown, &unknown).position, Verdict::Exact);
    }

    #[test]
    fn age_and_number_closeness() {
        let target = record(Position::SF, 80, 25);
        let mut guess = record(Position::SF, 80, 26);
        guess.number = Some(2);
        let fb = Feedback::evaluate(&guess, &target);
        assert_eq!(fb.age.verdict, Verdict::Close);
        assert_eq!(fb.age.direction, Some(Direction::Lower));
        assert_eq!(fb.number.verdict, Verdict::Close);
        assert_eq!(fb.number.direction, Some(Direction::Lower));

        guess.age = Some(28);
        guess.number = Some(0);
        let fb = Feedback::evaluate(&guess, &target);
        assert_eq!(fb.age.verdict, Verdict::Miss);
        assert_eq!(fb.number.verdict, Verdict::Close);
        assert_eq!(fb.number.direction, Some(Direction::Higher));
    }

    #[test]
    fn unknown_number_has_no_direction() {
        let target = record(Position::SF, 80, 25);
        let mut guess = record(Position::SF, 80, 25);
        guess.number = None;
        let fb = Feedback::evaluate(&guess, &target);
        assert_eq!(fb.number, NumericFeedback { verdict: Verdict::Miss, direction: None });
    }

    #[test]
    fn team_fields_are_binary() {
        let target = record(Position::SF, 80, 25);
        let mut guess = record(Position::SF, 80, 25);
        guess.team = "New York Knicks".to_string();
        let fb = Feedback::evaluate(&guess, &target);
        assert_eq!(fb.team, Verdict::Miss);
        assert_eq!(fb.conference, Verdict::Exact);
        assert_eq!(fb.division, Verdict::Exact);
    }
}
