//! Optional settings file passed with `--config`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Ambient settings (TOML).
///
/// Every field is optional in the file; missing fields fall back to defaults.
/// Command-line flags take precedence over values loaded here.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Fixed seed for the computer's move. Unset means seed from the clock.
    pub seed: Option<u64>,

    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            log_level: "warn".to_string(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if self.log_level.trim().is_empty() {
            return Err(anyhow!("log_level must not be empty"));
        }
        EnvFilter::try_new(&self.log_level)
            .map_err(|err| anyhow!("invalid log_level '{}': {err}", self.log_level))?;
        Ok(())
    }
}

/// Load settings from a TOML file.
///
/// The path is always user-supplied, so a missing file is an error.
pub fn load_settings(path: &Path) -> Result<Settings> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let settings: Settings =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    settings.validate()?;
    Ok(settings)
}
