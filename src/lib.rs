//! Round-based mini-game engine.
//!
//! Each game supplies a [`round::RoundGenerator`]; [`session::GameSession`]
//! owns the rest: the Idle → Playing → GameOver state machine, the countdown,
//! score and streak, and best-score persistence through a
//! [`store::ScoreStore`].

#[path = "core/clock.rs"]
pub mod clock;

#[path = "core/error.rs"]
pub mod error;

#[cfg(feature = "web")]
#[path = "core/local_storage.rs"]
pub mod local_storage;

#[path = "core/prng.rs"]
pub mod prng;

#[path = "core/round.rs"]
pub mod round;

#[path = "core/score.rs"]
pub mod score;

#[path = "core/session.rs"]
pub mod session;

#[path = "core/store.rs"]
pub mod store;

#[path = "core/time.rs"]
pub mod time;

#[path = "core/timer.rs"]
pub mod timer;

pub use error::{GameError, StoreError};
pub use prng::{Prng, RandomSource};
pub use round::{Difficulty, Round, RoundGenerator};
pub use score::{ScoreTracker, ScoringRule};
pub use session::{
    AnswerOutcome, FailurePolicy, GameOverReason, GameOverSummary, GameSession, SessionConfig,
    SessionState,
};
pub use store::{MemoryScoreStore, ScoreStore};
pub use timer::{CountdownTimer, TickOutcome};
