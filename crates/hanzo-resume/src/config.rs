//! Extractor configuration

use crate::error::{ExtractError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default upper bound on input size (50 MiB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Configuration for resume extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Maximum input file size in bytes
    pub max_file_size: u64,

    /// Resolve DOCX inline hyperlink ids through the relationship table
    /// and emit their targets in document order
    pub resolve_inline_hyperlinks: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            resolve_inline_hyperlinks: false,
        }
    }
}

impl ExtractorConfig {
    /// Load config from a TOML file. Missing keys fall back to defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            ExtractError::InvalidConfig(format!("{}: {}", path.display(), e))
        })?;
        Self::from_toml(&contents)
    }

    /// Parse config from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| ExtractError::InvalidConfig(e.to_string()))
    }

    /// Set the maximum input file size
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    /// Enable or disable inline hyperlink resolution for DOCX
    pub fn with_resolve_inline_hyperlinks(mut self, resolve: bool) -> Self {
        self.resolve_inline_hyperlinks = resolve;
        self
    }
}
