//! Theme configuration for Plinth.
//!
//! Parses `theme.toml` with serde and provides auto-discovery of the config
//! file in parent directories. The file lists the service providers the
//! theme activates at startup and any class aliases exposed to templates:
//!
//! ```toml
//! providers = [
//!     "plinth_debug::DebugProvider",
//! ]
//!
//! [aliases]
//! markup = "plinth_markup"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "theme.toml";

/// Theme configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fully-qualified provider type paths activated at startup.
    pub providers: Vec<String>,
    /// Alias name to full module path, exposed to templates.
    pub aliases: BTreeMap<String, String>,

    /// Path the config was loaded from (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a specific file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Discover and load a `theme.toml`, walking up from `start_dir`.
    pub fn discover(start_dir: &Path) -> Result<Self, ConfigError> {
        let mut current = start_dir.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Self::load(&candidate);
            }
            if !current.pop() {
                return Err(ConfigError::NotFound(start_dir.join(CONFIG_FILENAME)));
            }
        }
    }

    /// Whether a provider path is already listed.
    #[must_use]
    pub fn has_provider(&self, provider: &str) -> bool {
        self.providers.iter().any(|p| p == provider)
    }
}

/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
