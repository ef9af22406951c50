//! Extraction result types

use crate::error::{ErrorKind, ExtractError};
use crate::links::{merge_links, LinkUrl};
use crate::patterns;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeSet;

/// Text and native hyperlinks as produced by a format extractor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDocument {
    /// Full extracted text
    pub text: String,
    /// Links from format metadata (PDF annotations, DOCX relationships)
    pub links: Vec<LinkUrl>,
}

impl RawDocument {
    pub fn new(text: String, links: Vec<LinkUrl>) -> Self {
        Self { text, links }
    }

    /// Plain text with no native link metadata
    pub fn from_text(text: String) -> Self {
        Self::new(text, Vec::new())
    }

    /// Run the pattern matchers over the text and merge the results
    /// behind the native links.
    pub fn assemble(self) -> ExtractedResume {
        let harvested = patterns::find_urls(&self.text)
            .into_iter()
            .map(LinkUrl::classify)
            .collect();
        let urls = merge_links(self.links, harvested);
        let emails = patterns::find_emails(&self.text);
        let phones = patterns::find_phones(&self.text);
        let word_count = patterns::word_count(&self.text);

        ExtractedResume {
            text: self.text,
            urls,
            emails,
            phones,
            word_count,
        }
    }
}

/// Successful extraction payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedResume {
    pub text: String,
    pub urls: Vec<LinkUrl>,
    pub emails: BTreeSet<String>,
    pub phones: BTreeSet<String>,
    pub word_count: usize,
}

/// Failure payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionFailure {
    pub error: String,
    pub error_kind: ErrorKind,
}

/// Outcome of one extraction. Serializes with a leading `success` flag
/// followed by the payload fields.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionResult {
    Success(ExtractedResume),
    Failure(ExtractionFailure),
}

impl ExtractionResult {
    pub fn failure(kind: ErrorKind, error: impl Into<String>) -> Self {
        ExtractionResult::Failure(ExtractionFailure {
            error: error.into(),
            error_kind: kind,
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ExtractionResult::Success(_))
    }

    pub fn resume(&self) -> Option<&ExtractedResume> {
        match self {
            ExtractionResult::Success(resume) => Some(resume),
            ExtractionResult::Failure(_) => None,
        }
    }

    pub fn failure_info(&self) -> Option<&ExtractionFailure> {
        match self {
            ExtractionResult::Success(_) => None,
            ExtractionResult::Failure(failure) => Some(failure),
        }
    }
}

impl From<ExtractError> for ExtractionResult {
    fn from(err: ExtractError) -> Self {
        ExtractionResult::failure(err.kind(), err.to_string())
    }
}

impl Serialize for ExtractionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Tagged<'a, T> {
            success: bool,
            #[serde(flatten)]
            body: &'a T,
        }

        match self {
            ExtractionResult::Success(body) => Tagged { success: true, body }.serialize(serializer),
            ExtractionResult::Failure(body) => Tagged { success: false, body }.serialize(serializer),
        }
    }
}
