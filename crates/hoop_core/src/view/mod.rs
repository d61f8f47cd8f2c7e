//! Presentation boundary.
//!
//! The game never touches a UI directly. [`crate::game::GameController`] builds
//! render models and pushes them through a [`Presenter`], so a terminal, a web
//! page or a test recorder can sit on the other side.

pub mod format;
pub mod render;

pub use render::{
    Banner, BannerKind, GuessView, HintView, ImageReveal, ImageTreatment, PlayerCard,
    PlayerHeader, StatCell,
};

use crate::save::GameStats;

pub const NO_MORE_HINTS: &str = "🔒 No more hints available.";

pub trait Presenter {
    fn set_input_enabled(&mut self, enabled: bool);

    /// Add one guess row below the previous ones.
    fn append_guess(&mut self, guess: &GuessView);
    fn clear_guesses(&mut self);

    fn show_banner(&mut self, banner: &Banner);
    fn hide_banner(&mut self);

    fn show_hint(&mut self, hint: &HintView);
    fn clear_hints(&mut self);

    /// Replace the autocomplete list.
    fn update_suggestions(&mut self, names: &[String]);
    fn update_attempts(&mut self, attempts_left: u8);
    fn update_scoreboard(&mut self, stats: &GameStats);

    /// Transient message: validation errors, hint exhaustion.
    fn notify(&mut self, message: &str);
}
