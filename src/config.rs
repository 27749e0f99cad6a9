//! YAML configuration file support.
//!
//! An [`EngineConfig`] describes the full engine (the catalog table and the
//! matcher knobs) in a single serde-friendly document, so deployments can
//! swap the candidate table without recompiling.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "observed table"
//!
//! catalog:
//!   groups:
//!     - [n, ball, anger, v, x, vslice]
//!     - [mount, vslice, angel, a, plus, n]
//!     - [a, vslice, plus, angel, mount, n]
//!     - [angel, v, anger, x, vslice, ball]
//!     - [n, scissors, anger, ball, x, vslice]
//!     - [v, scissors, x, ball, vslice, angel]
//!
//! matcher:
//!   required_overlap: 4
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{BUILTIN_GROUPS, Catalog, CatalogError};
use crate::engine::{Matcher, MatcherConfig};
use crate::types::MatchError;

/// Errors that can occur when loading an engine configuration.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),

    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("invalid matcher section: {0}")]
    Matcher(#[from] MatchError),
}

/// Top-level configuration for the matching engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Configuration format version.
    pub version: String,

    /// Optional configuration name/description.
    #[serde(default)]
    pub name: Option<String>,

    /// Candidate table.
    #[serde(default)]
    pub catalog: CatalogSection,

    /// Matcher knobs.
    #[serde(default)]
    pub matcher: MatcherConfig,
}

/// The catalog portion of an [`EngineConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSection {
    /// Candidate groups in catalog order, each a list of symbols in group
    /// order.
    pub groups: Vec<Vec<String>>,
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            groups: BUILTIN_GROUPS
                .iter()
                .map(|group| group.iter().map(|s| (*s).to_string()).collect())
                .collect(),
        }
    }
}

impl EngineConfig {
    /// Load a YAML configuration file from the given path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: EngineConfig = serde_yaml::from_str(yaml)?;
        match config.version.as_str() {
            "1.0" | "1" => Ok(config),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }
    }

    /// Build a validated [`Matcher`] from this configuration.
    ///
    /// All fail-fast rejections (empty catalog, duplicate or blank symbols,
    /// groups too short for the required overlap, a zero overlap) surface
    /// here, before any match traffic.
    pub fn build(&self) -> Result<Matcher, ConfigLoadError> {
        let catalog = Catalog::new(self.catalog.groups.clone())?;
        Ok(Matcher::new(catalog, self.matcher)?)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            catalog: CatalogSection::default(),
            matcher: MatcherConfig::default(),
        }
    }
}
