//! Drives a [`GameSession`] and mirrors every state change onto a [`Presenter`].

use crate::data::Roster;
use crate::error::{GameError, Result};
use crate::game::hints::HintOutcome;
use crate::game::mode::Mode;
use crate::game::round::RoundStatus;
use crate::game::session::{GameSession, GuessOutcome, RoundSnapshot};
use crate::save::StatsStore;
use crate::view::{Banner, GuessView, HintView, Presenter, NO_MORE_HINTS};

pub struct GameController<P: Presenter> {
    session: GameSession,
    presenter: P,
    /// `None` keeps the tally in memory only.
    store: Option<StatsStore>,
}

impl<P: Presenter> GameController<P> {
    pub fn new(session: GameSession, mut presenter: P, store: Option<StatsStore>) -> Self {
        presenter.update_scoreboard(&session.stats());
        presenter.set_input_enabled(false);
        Self { session, presenter, store }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Install the roster and open the first round.
    pub fn initialize(&mut self, roster: Roster) -> Result<RoundSnapshot> {
        self.session.load_roster(roster);
        self.restart()
    }

    /// New target in the current mode. Clears the board.
    pub fn restart(&mut self) -> Result<RoundSnapshot> {
        self.reset_board();
        let started = self.session.start_round();
        self.after_round_start(started)
    }

    pub fn change_mode(&mut self, mode: Mode) -> Result<RoundSnapshot> {
        self.reset_board();
        let started = self.session.set_mode(mode);
        self.after_round_start(started)
    }

    pub fn submit_guess(&mut self, input: &str) -> Result<GuessOutcome> {
        let outcome = match self.session.submit_guess(input) {
            Ok(outcome) => outcome,
            Err(e) => return Err(self.report(e)),
        };

        self.presenter.append_guess(&GuessView::from_outcome(&outcome));
        self.presenter.update_attempts(outcome.attempts_left);

        if let Some(target) = outcome.revealed_target.as_ref() {
            let banner = match outcome.status {
                RoundStatus::Won => Banner::victory(target),
                _ => Banner::game_over(target),
            };
            self.presenter.show_banner(&banner);
            self.presenter.set_input_enabled(false);
            self.presenter.update_scoreboard(&outcome.stats);
            self.persist_stats();
        }

        Ok(outcome)
    }

    pub fn request_hint(&mut self) -> Result<HintOutcome> {
        let outcome = match self.session.request_hint() {
            Ok(outcome) => outcome,
            Err(e) => return Err(self.report(e)),
        };

        match &outcome {
            HintOutcome::Revealed { tier, hint } => {
                self.presenter.show_hint(&HintView::new(*tier, hint));
            }
            HintOutcome::Exhausted => self.presenter.notify(NO_MORE_HINTS),
        }
        Ok(outcome)
    }

    fn reset_board(&mut self) {
        self.presenter.clear_guesses();
        self.presenter.clear_hints();
        self.presenter.hide_banner();
    }

    fn after_round_start(&mut self, started: Result<RoundSnapshot>) -> Result<RoundSnapshot> {
        match started {
            Ok(snapshot) => {
                self.presenter.update_suggestions(&self.session.suggestions());
                self.presenter.update_attempts(snapshot.attempts_left);
                self.presenter.set_input_enabled(true);
                Ok(snapshot)
            }
            Err(GameError::EmptyPool) => {
                self.presenter.update_suggestions(&[]);
                self.presenter.update_attempts(0);
                self.presenter.set_input_enabled(false);
                self.presenter.show_banner(&Banner::no_players());
                Err(GameError::EmptyPool)
            }
            Err(e) => Err(self.report(e)),
        }
    }

    fn report(&mut self, error: GameError) -> GameError {
        if error.is_recoverable() {
            log::debug!("Action rejected: {}", error);
        } else {
            log::error!("Action failed: {}", error);
        }
        self.presenter.notify(&error.to_string());
        error
    }

    fn persist_stats(&self) {
        let Some(store) = self.store.as_ref() else {
            return;
        };
        if let Err(e) = store.save(&self.session.stats()) {
            log::warn!("Could not save stats to {:?}: {}", store.path(), e);
        }
    }
}
