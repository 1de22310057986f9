//! Best scores kept as one JSON object on disk, `{ "<game>-best-score": "12" }`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use arcade::{ScoreStore, StoreError};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct JsonFileScoreStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileScoreStore {
    /// Load the file if present. An unreadable or malformed file starts
    /// empty and is overwritten on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match Self::read(&path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Starting with no best scores: {}", e);
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    fn read(path: &Path) -> Result<BTreeMap<String, String>, StoreError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&raw).map_err(|e| StoreError::Format(e.to_string()))
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec_pretty(&self.entries)
            .map_err(|e| StoreError::Format(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Delete a key. Returns whether it was present.
    pub fn remove(&mut self, key: &str) -> Result<bool, StoreError> {
        if self.entries.remove(key).is_none() {
            return Ok(false);
        }
        self.flush()?;
        Ok(true)
    }
}

impl ScoreStore for JsonFileScoreStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade::store::{read_best_score, write_best_score};

    #[test]
    fn scores_survive_reopening() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("scores.json");

        let mut store = JsonFileScoreStore::open(&path);
        assert_eq!(read_best_score(&store, "speed-math"), 0);
        assert!(write_best_score(&mut store, "speed-math", 14));

        let reopened = JsonFileScoreStore::open(&path);
        assert_eq!(read_best_score(&reopened, "speed-math"), 14);
        assert_eq!(
            reopened.get("speed-math-best-score").unwrap().as_deref(),
            Some("14")
        );
    }

    #[test]
    fn malformed_file_starts_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("scores.json");
        fs::write(&path, "[1, 2").unwrap();

        let mut store = JsonFileScoreStore::open(&path);
        assert_eq!(store.get("simon-says-best-score").unwrap(), None);
        store.set("simon-says-best-score", "3").unwrap();
        assert_eq!(read_best_score(&JsonFileScoreStore::open(&path), "simon-says"), 3);
    }

    #[test]
    fn remove_rewrites_the_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("scores.json");
        let mut store = JsonFileScoreStore::open(&path);
        store.set("color-match-best-score", "9").unwrap();

        assert!(store.remove("color-match-best-score").unwrap());
        assert!(!store.remove("color-match-best-score").unwrap());
        assert_eq!(read_best_score(&JsonFileScoreStore::open(&path), "color-match"), 0);
    }

    #[test]
    fn unwritable_location_fails_the_write() {
        let tmp = tempfile::tempdir().unwrap();
        // The parent "directory" is a regular file.
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let mut store = JsonFileScoreStore::open(blocker.join("scores.json"));
        assert!(matches!(store.set("k", "1"), Err(StoreError::Io(_))));
        assert!(!write_best_score(&mut store, "k", 1));
    }
}
