use thiserror::Error;

use crate::session::SessionState;

/// Errors surfaced by the session and by round generators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The operation is not valid in the current state. Non-fatal; callers
    /// usually ignore or log it.
    #[error("`{operation}` is not valid while the session is {state:?}")]
    InvalidState {
        operation: &'static str,
        state: SessionState,
    },

    /// A generator cannot build a valid round from its content pool.
    /// Treated as a configuration error.
    #[error("round generation exhausted: {0}")]
    GenerationExhausted(String),
}

/// Persistence failures. These never escape the session: reads degrade to
/// "no best score" and writes are dropped.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("score storage is unavailable")]
    Unavailable,

    #[error("score storage i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("score storage holds malformed data: {0}")]
    Format(String),
}
