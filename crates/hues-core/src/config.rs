//! Loader configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default hue table file name.
const DEFAULT_HUES_FILE: &str = "hues.mul";
/// Default radar colour file name.
const DEFAULT_RADAR_FILE: &str = "radarcol.mul";

/// Names of the two table files, resolved by a [`RawBufferProvider`](crate::RawBufferProvider).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HuesConfig {
    /// Hue group table.
    pub hues_file: PathBuf,
    /// Radar colour table.
    pub radar_file: PathBuf,
}

impl Default for HuesConfig {
    fn default() -> Self {
        Self {
            hues_file: PathBuf::from(DEFAULT_HUES_FILE),
            radar_file: PathBuf::from(DEFAULT_RADAR_FILE),
        }
    }
}

impl HuesConfig {
    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
