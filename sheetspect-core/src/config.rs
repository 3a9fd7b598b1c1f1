//! Configuration for inspection defaults

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Inspector configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InspectorConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Default request values, overridable from the command line
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Sheet name to inspect when none is given on the command line
    #[serde(default)]
    pub sheet: Option<String>,
    /// Cell reference to inspect (e.g. "A1")
    #[serde(default)]
    pub cell: Option<String>,
    /// Number of leading columns to report widths for
    #[serde(default)]
    pub columns: Option<u32>,
}

impl InspectorConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: InspectorConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
