//! Best-score persistence.
//!
//! The store is a plain string key/value map. Every game keeps one decimal
//! integer under `"<game>-best-score"`.

use hashbrown::HashMap;
use tracing::warn;

use crate::error::StoreError;

pub const BEST_SCORE_SUFFIX: &str = "-best-score";

pub fn best_score_key(game_id: &str) -> String {
    format!("{game_id}{BEST_SCORE_SUFFIX}")
}

/// Key/value persistence collaborator injected into a session.
pub trait ScoreStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// Read a game's best score. Missing, unreadable or malformed values all
/// count as 0.
pub fn read_best_score(store: &dyn ScoreStore, game_id: &str) -> u32 {
    let key = best_score_key(game_id);
    match store.get(&key) {
        Ok(Some(raw)) => match raw.trim().parse::<u32>() {
            Ok(v) => v,
            Err(_) => {
                warn!("Ignoring malformed best score {:?} under {}", raw, key);
                0
            }
        },
        Ok(None) => 0,
        Err(e) => {
            warn!("Could not read best score for {}: {}", game_id, e);
            0
        }
    }
}

/// Write a game's best score. Failures are logged and dropped.
pub fn write_best_score(store: &mut dyn ScoreStore, game_id: &str, score: u32) -> bool {
    let key = best_score_key(game_id);
    match store.set(&key, &score.to_string()) {
        Ok(()) => true,
        Err(e) => {
            warn!("Could not persist best score for {}: {}", game_id, e);
            false
        }
    }
}

/// In-process store. Counts writes so callers can check persistence
/// happened exactly once.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// A store whose backend is gone (private browsing, quota, missing dir).
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStore;

impl ScoreStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}
