//! Path management for fintrack-core
//!
//! Resolves where the store file, settings, and audit log live on disk for
//! embedders that use the file-backed store. Tests and embedders with their
//! own layout use `with_base_dir`.

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::CoreError;

/// Manages all paths used by fintrack
#[derive(Debug, Clone)]
pub struct FintrackPaths {
    base_dir: PathBuf,
}

impl FintrackPaths {
    /// Resolve the platform default base directory
    /// (e.g. `~/.config/fintrack` on Linux)
    pub fn new() -> Result<Self, CoreError> {
        let dirs = ProjectDirs::from("", "", "fintrack").ok_or_else(|| {
            CoreError::Config("Could not determine a home directory for fintrack data".into())
        })?;
        Ok(Self {
            base_dir: dirs.config_dir().to_path_buf(),
        })
    }

    /// Create paths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// The base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// The data directory
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// The key-value store file
    pub fn store_file(&self) -> PathBuf {
        self.data_dir().join("store.json")
    }

    /// The settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// The audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), CoreError> {
        std::fs::create_dir_all(self.data_dir()).map_err(|e| {
            CoreError::Config(format!(
                "Failed to create directory {}: {}",
                self.data_dir().display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_with_base_dir_layout() {
        let dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(dir.path().to_path_buf());

        assert_eq!(paths.store_file(), dir.path().join("data").join("store.json"));
        assert_eq!(paths.settings_file(), dir.path().join("config.json"));
        assert_eq!(paths.audit_log(), dir.path().join("audit.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(dir.path().join("nested"));
        paths.ensure_directories().unwrap();
        assert!(paths.data_dir().exists());
    }
}
