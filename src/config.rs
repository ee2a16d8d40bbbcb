//! Configuration file handling
//!
//! The configuration is a small TOML file; every field has a default so an
//! absent file or an empty one is valid.
//!
//! ```toml
//! [due]
//! day = 86400
//! week = 604800
//! month = 2592000
//! ```

use crate::todo::DueThresholds;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Due-date bucket boundaries in seconds
    pub due: DueThresholds,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file; a missing file yields defaults
    ///
    /// # Returns
    /// The validated configuration, or an error if the file cannot be read,
    /// does not parse, or carries unusable thresholds
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.due.validate().context("Invalid [due] thresholds")?;
        Ok(())
    }
}
