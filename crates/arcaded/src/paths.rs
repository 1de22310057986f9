//! Cross-platform application paths

use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct AppPaths {
    data_dir: PathBuf,
}

impl AppPaths {
    pub fn new() -> Result<Self, String> {
        let data_dir = Self::get_data_dir()?;
        Self::at(data_dir)
    }

    /// Use an explicit directory instead of the OS data dir.
    pub fn at(data_dir: impl Into<PathBuf>) -> Result<Self, String> {
        let data_dir = data_dir.into();

        // Ensure directory exists
        fs::create_dir_all(&data_dir)
            .map_err(|e| format!("Failed to create data directory: {}", e))?;

        Ok(Self { data_dir })
    }

    fn get_data_dir() -> Result<PathBuf, String> {
        let base = dirs::data_dir().ok_or("Could not determine data directory")?;
        Ok(base.join("arcade"))
    }

    #[allow(dead_code)]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn scores_file(&self) -> PathBuf {
        self.data_dir.join("scores.json")
    }

    pub fn config_file(&self) -> PathBuf {
        self.data_dir.join("config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_live_in_the_data_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("arcade");
        let paths = AppPaths::at(&dir).unwrap();
        assert!(dir.is_dir());
        assert_eq!(paths.data_dir(), dir.as_path());
        assert_eq!(paths.scores_file(), dir.join("scores.json"));
        assert_eq!(paths.config_file(), dir.join("config.json"));
    }
}
