//! Agency configuration
//!
//! Loaded from an optional TOML file; every field has a default so an empty
//! file (or no file at all) yields the historical behavior.
//!
//! ```toml
//! duplicate_keys = "reject"
//! log_profile = "production"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::logging_facility::Profile;
use crate::policy::DuplicateKeyMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AgencyConfig {
    /// Whether registration accepts or rejects an already-used key
    pub duplicate_keys: DuplicateKeyMode,

    /// Logging profile passed to `logging_facility::init`
    pub log_profile: Profile,
}

impl AgencyConfig {
    /// Parse configuration from TOML text
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` on malformed TOML or unknown values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a configuration file
    ///
    /// # Errors
    /// Returns `ConfigError::Io` if the file cannot be read, or
    /// `ConfigError::Parse` if it is not valid configuration.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Serialize the effective configuration back to TOML
    ///
    /// # Errors
    /// Returns `ConfigError::Serialize` if encoding fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Cannot encode config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
