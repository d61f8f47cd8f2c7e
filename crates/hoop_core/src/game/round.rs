//! Per-round state machine: attempts, hints and the terminal verdict.

use crate::error::{GameError, Result};
use crate::game::feedback::Feedback;
use crate::game::hints::HintTier;
use crate::models::PlayerId;
use serde::{Deserialize, Serialize};

pub const MAX_ATTEMPTS: u8 = 6;
pub const MAX_HINTS: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RoundStatus::InProgress)
    }
}

/// One resolved guess and its verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessRecord {
    /// 1-based.
    pub guess_number: u8,
    pub player: PlayerId,
    pub feedback: Feedback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    target: PlayerId,
    attempts_left: u8,
    hints_used: u8,
    status: RoundStatus,
    guesses: Vec<GuessRecord>,
}

impl Round {
    pub fn new(target: PlayerId) -> Self {
        Self {
            target,
            attempts_left: MAX_ATTEMPTS,
            hints_used: 0,
            status: RoundStatus::InProgress,
            guesses: Vec::with_capacity(MAX_ATTEMPTS as usize),
        }
    }

    pub fn target(&self) -> PlayerId {
        self.target
    }

    pub fn attempts_left(&self) -> u8 {
        self.attempts_left
    }

    pub fn hints_used(&self) -> u8 {
        self.hints_used
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    /// Record a resolved guess and advance the state machine.
    ///
    /// A match on identity wins immediately, even on the last attempt.
    pub fn apply_guess(&mut self, guessed: PlayerId, feedback: Feedback) -> Result<RoundStatus> {
        if self.status.is_terminal() {
            return Err(GameError::RoundOver);
        }

        self.attempts_left = self.attempts_left.saturating_sub(1);
        self.guesses.push(GuessRecord {
            guess_number: MAX_ATTEMPTS - self.attempts_left,
            player: guessed,
            feedback,
        });

        self.status = if guessed == self.target {
            RoundStatus::Won
        } else if self.attempts_left == 0 {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        };

        log::debug!(
            "Guess {} -> {:?}, {} attempts left",
            self.guesses.len(),
            self.status,
            self.attempts_left
        );
        Ok(self.status)
    }

    /// Claim the next hint tier, or `None` once all three are spent.
    pub fn take_hint_tier(&mut self) -> Result<Option<HintTier>> {
        if self.status.is_terminal() {
            return Err(GameError::RoundOver);
        }
        let tier = HintTier::from_hints_used(self.hints_used);
        if tier.is_some() {
            self.hints_used += 1;
        }
        Ok(tier)
    }
}
