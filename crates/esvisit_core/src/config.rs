//! Traversal configuration files.
//!
//! A configuration file carries the data half of [`VisitOptions`](crate::VisitOptions):
//! the fallback policy (custom functions cannot be written down) and the
//! override table.
//!
//! ```jsonc
//! {
//!   // "error" (default) or "iteration"
//!   "fallback": "iteration",
//!   "childVisitorKeys": {
//!     "UnknownNode": ["argument"]
//!   }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use jsonc_parser::ParseOptions;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ConfigError;
use crate::keys::ChildKeyTable;

/// Fallback policies that can be expressed in a configuration file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackKind {
    /// Unknown node types are an error.
    #[default]
    Error,
    /// Unknown node types have every own field as a child field.
    Iteration,
}

/// Configuration for traversals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VisitConfig {
    /// Fallback policy for unknown node types.
    #[serde(default)]
    pub fallback: FallbackKind,

    /// Per-type overrides of the default child-key table.
    #[serde(default)]
    pub child_visitor_keys: ChildKeyTable,
}

impl VisitConfig {
    /// File names probed by [`VisitConfig::discover`], in order.
    pub const CONFIG_FILES: &'static [&'static str] = &[".esvisit.jsonc", ".esvisit.json"];

    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        debug!("Loaded config from {}", path.display());
        Self::from_json(&content)
    }

    /// Parses configuration from a JSON string. Comments and trailing commas
    /// are accepted.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let value = jsonc_parser::parse_to_serde_value(json, &ParseOptions::default())
            .map_err(|e| ConfigError::parse(e.to_string()))?
            .unwrap_or(serde_json::Value::Object(serde_json::Map::new()));

        serde_json::from_value(value).map_err(|e| ConfigError::invalid(e.to_string()))
    }

    /// Finds the first configuration file in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        Self::CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }
}
