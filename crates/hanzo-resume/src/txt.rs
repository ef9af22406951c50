//! Plain text extraction

use crate::{error::Result, Extractor, RawDocument};
use std::fs;
use std::path::Path;
use tracing::debug;

/// UTF-8 text file extractor
#[derive(Debug, Clone, Copy, Default)]
pub struct TxtExtractor;

impl TxtExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for TxtExtractor {
    fn extract(&self, path: &Path) -> Result<RawDocument> {
        let text = fs::read_to_string(path)?;
        debug!(bytes = text.len(), "read text file");
        Ok(RawDocument::from_text(text))
    }
}
