//! User settings
//!
//! A small JSON settings file next to the data directory. Everything has a
//! default so a missing or partially-written file always loads.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;

use super::paths::FintrackPaths;

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_true() -> bool {
    true
}

/// Settings for a fintrack installation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Whether the built-in demo identity can log in
    #[serde(default = "default_true")]
    pub demo_identity: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            demo_identity: true,
        }
    }
}

impl Settings {
    /// Load settings from the settings file, creating it with defaults if
    /// it does not exist
    pub fn load_or_create(paths: &FintrackPaths) -> CoreResult<Self> {
        let path = paths.settings_file();
        if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            let settings = serde_json::from_str(&raw)?;
            Ok(settings)
        } else {
            let settings = Self::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Write settings to the settings file
    pub fn save(&self, paths: &FintrackPaths) -> CoreResult<()> {
        paths.ensure_directories()?;
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(paths.settings_file(), raw)?;
        Ok(())
    }
}
