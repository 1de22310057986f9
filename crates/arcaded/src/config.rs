//! Optional `config.json` in the data dir. Every field may be omitted;
//! command-line flags win over the file.

use std::path::Path;

use arcade::{Difficulty, SessionConfig};
use arcade_games::GameKind;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::CliError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    /// Countdown override for the timed games.
    #[serde(default)]
    pub time_limit_secs: Option<u32>,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl HostConfig {
    /// A missing file is the default config; a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        let config = serde_json::from_str(&raw)?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }
}

/// Per-invocation overrides from `arcade play`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayOverrides {
    pub difficulty: Option<Difficulty>,
    pub seed: Option<u64>,
    pub time_limit_secs: Option<u32>,
}

impl PlayOverrides {
    pub fn difficulty(&self, config: &HostConfig) -> Difficulty {
        self.difficulty.or(config.difficulty).unwrap_or_default()
    }

    pub fn seed(&self, config: &HostConfig) -> Option<u64> {
        self.seed.or(config.seed)
    }

    pub fn session_config(&self, game: GameKind, config: &HostConfig) -> SessionConfig {
        let mut session = game.session_config(self.difficulty(config));
        if let Some(secs) = self.time_limit_secs.or(config.time_limit_secs) {
            if game.is_timed() {
                session = session.with_time_limit(secs);
            } else {
                warn!("{} is untimed; ignoring time limit", game.id());
            }
        }
        if let Some(seed) = self.seed(config) {
            session = session.with_seed(seed);
        }
        session
    }
}
