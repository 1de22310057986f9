use arcade::{GameError, StoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Bad command line. `main` prints usage and exits non-zero.
    #[error("{0}")]
    Usage(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error("score storage failed: {0}")]
    Store(#[from] StoreError),
}
