//! Content for the arcade games.
//!
//! Word-scramble, color-match, speed-math and simon-says are
//! [`arcade::RoundGenerator`]s driven by [`arcade::GameSession`]. Memory-match
//! and tic-tac-toe are self-contained board models.

pub mod catalog;
pub mod color_match;
pub mod memory_match;
pub mod simon_says;
pub mod speed_math;
pub mod tic_tac_toe;
pub mod word_scramble;
pub mod words;

pub use catalog::{Category, GameKind};
