//! Game session: owns the roster, the active mode's pool, the current round and the tally.
//!
//! Lifecycle is Uninitialized (no roster) → Ready. Every action on an
//! uninitialized session fails with [`GameError::NotReady`].

use crate::data::Roster;
use crate::error::{GameError, Result};
use crate::game::feedback::Feedback;
use crate::game::hints::{Hint, HintOutcome};
use crate::game::mode::Mode;
use crate::game::normalize::normalize_name;
use crate::game::round::{Round, RoundStatus};
use crate::models::{PlayerId, PlayerRecord};
use crate::save::GameStats;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Result of a resolved guess.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuessOutcome {
    pub guess_number: u8,
    pub guessed: PlayerRecord,
    pub feedback: Feedback,
    pub status: RoundStatus,
    pub attempts_left: u8,
    /// Filled once the round is over.
    pub revealed_target: Option<PlayerRecord>,
    pub stats: GameStats,
}

/// Read-only view of the round for presenters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundSnapshot {
    pub mode: Mode,
    pub pool_size: usize,
    pub attempts_left: u8,
    pub hints_used: u8,
    pub guesses_made: usize,
    pub status: RoundStatus,
}

pub struct GameSession {
    roster: Option<Roster>,
    mode: Mode,
    pool: Vec<PlayerId>,
    /// Normalized name → first pool entry carrying it.
    name_index: FxHashMap<String, PlayerId>,
    round: Option<Round>,
    stats: GameStats,
    rng: ChaCha8Rng,
}

impl GameSession {
    pub fn new(stats: GameStats) -> Self {
        Self::with_rng(stats, ChaCha8Rng::from_entropy())
    }

    /// Reproducible target draws.
    pub fn with_seed(stats: GameStats, seed: u64) -> Self {
        Self::with_rng(stats, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(stats: GameStats, rng: ChaCha8Rng) -> Self {
        Self {
            roster: None,
            mode: Mode::default(),
            pool: Vec::new(),
            name_index: FxHashMap::default(),
            round: None,
            stats,
            rng,
        }
    }

    /// Install the loaded roster and filter it for the current mode. No round is started.
    pub fn load_roster(&mut self, roster: Roster) {
        self.roster = Some(roster);
        self.round = None;
        self.refilter();
    }

    pub fn is_ready(&self) -> bool {
        self.roster.is_some()
    }

    pub fn roster(&self) -> Result<&Roster> {
        self.roster.as_ref().ok_or(GameError::NotReady)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn pool(&self) -> &[PlayerId] {
        &self.pool
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Names in the active pool, for autocomplete.
    pub fn suggestions(&self) -> Vec<String> {
        let Some(roster) = self.roster.as_ref() else {
            return Vec::new();
        };
        self.pool.iter().filter_map(|&id| roster.get(id)).map(|p| p.name.clone()).collect()
    }

    fn refilter(&mut self) {
        let Some(roster) = self.roster.as_ref() else {
            return;
        };
        self.pool = self.mode.filter(roster);

        self.name_index.clear();
        for &id in &self.pool {
            if let Some(player) = roster.get(id) {
                self.name_index.entry(player.normalized_name.clone()).or_insert(id);
            }
        }

        log::info!("Mode {}: {} of {} players in pool", self.mode, self.pool.len(), roster.len());
    }

    /// Switch difficulty and start a fresh round in it.
    pub fn set_mode(&mut self, mode: Mode) -> Result<RoundSnapshot> {
        self.roster()?;
        self.mode = mode;
        self.round = None;
        self.refilter();
        self.start_round()
    }

    /// Draw a new target from the pool and reset attempts and hints.
    pub fn start_round(&mut self) -> Result<RoundSnapshot> {
        self.roster()?;
        self.round = None;
        if self.pool.is_empty() {
            log::warn!("Mode {} has no players, round not started", self.mode);
            return Err(GameError::EmptyPool);
        }

        let target = self.pool[self.rng.gen_range(0..self.pool.len())];
        self.round = Some(Round::new(target));
        log::debug!("New round in mode {} ({} candidates)", self.mode, self.pool.len());

        self.snapshot().ok_or(GameError::NoTarget)
    }

    pub fn snapshot(&self) -> Option<RoundSnapshot> {
        self.round.as_ref().map(|round| RoundSnapshot {
            mode: self.mode,
            pool_size: self.pool.len(),
            attempts_left: round.attempts_left(),
            hints_used: round.hints_used(),
            guesses_made: round.guesses().len(),
            status: round.status(),
        })
    }

    /// Look up typed text in the active pool.
    pub fn resolve_guess(&self, input: &str) -> Result<&PlayerRecord> {
        let roster = self.roster()?;
        let normalized = normalize_name(input);
        if normalized.is_empty() {
            return Err(GameError::EmptyInput);
        }
        self.name_index
            .get(&normalized)
            .and_then(|&id| roster.get(id))
            .ok_or_else(|| GameError::NotFound { input: input.trim().to_string() })
    }

    pub fn submit_guess(&mut self, input: &str) -> Result<GuessOutcome> {
        let roster = self.roster()?;
        let round = self.round.as_ref().ok_or(GameError::NoTarget)?;
        if round.status().is_terminal() {
            return Err(GameError::RoundOver);
        }

        let guessed = self.resolve_guess(input)?.clone();
        let target = roster.get(round.target()).ok_or(GameError::NoTarget)?.clone();
        let feedback = Feedback::evaluate(&guessed, &target);

        let round = self.round.as_mut().ok_or(GameError::NoTarget)?;
        let status = round.apply_guess(guessed.id, feedback)?;
        let guess_number = round.guesses().len() as u8;
        let attempts_left = round.attempts_left();

        if status.is_terminal() {
            self.stats.record_result(status == RoundStatus::Won);
            log::info!(
                "Round {:?} after {} guesses (target: {})",
                status,
                guess_number,
                target.name
            );
        }

        Ok(GuessOutcome {
            guess_number,
            guessed,
            feedback,
            status,
            attempts_left,
            revealed_target: status.is_terminal().then_some(target),
            stats: self.stats,
        })
    }

    pub fn request_hint(&mut self) -> Result<HintOutcome> {
        let roster = self.roster.as_ref().ok_or(GameError::NotReady)?;
        let round = self.round.as_mut().ok_or(GameError::NoTarget)?;

        let Some(tier) = round.take_hint_tier()? else {
            return Ok(HintOutcome::Exhausted);
        };
        let target = roster.get(round.target()).ok_or(GameError::NoTarget)?;
        Ok(HintOutcome::Revealed { tier, hint: Hint::reveal(tier, target, roster) })
    }
}
