//! Game rules: mode filtering, guess resolution, feedback, rounds and hints.

pub mod controller;
pub mod feedback;
pub mod hints;
pub mod mode;
pub mod normalize;
pub mod round;
pub mod session;

pub use controller::GameController;
pub use feedback::{Direction, Feedback, NumericFeedback, Verdict};
pub use hints::{Hint, HintOutcome, HintTier};
pub use mode::Mode;
pub use normalize::normalize_name;
pub use round::{GuessRecord, Round, RoundStatus, MAX_ATTEMPTS, MAX_HINTS};
pub use session::{GameSession, GuessOutcome, RoundSnapshot};
