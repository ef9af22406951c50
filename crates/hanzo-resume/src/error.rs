//! Error types for resume extraction

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur while extracting a resume
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The input path does not exist
    #[error("File not found")]
    FileNotFound(PathBuf),

    /// The file extension has no extractor
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// The parser for this format was not compiled in
    #[error("{format} support not installed: rebuild with the `{feature}` feature")]
    MissingCapability {
        format: &'static str,
        feature: &'static str,
    },

    /// Malformed or unreadable document
    #[error("{0}")]
    Parse(String),

    /// IO or decode error while reading the file
    #[error("{0}")]
    Read(#[from] std::io::Error),

    /// File exceeds the configured size limit
    #[error("File too large: {size} bytes exceeds max {max} bytes")]
    FileTooLarge { size: u64, max: u64 },

    /// Configuration file could not be loaded
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Machine-readable error category, serialized next to the message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    FileNotFound,
    UnsupportedFileType,
    MissingCapability,
    ParseFailure,
    ReadFailure,
    FileTooLarge,
    InvalidConfig,
    /// CLI invoked without a file path
    MissingArgument,
}

impl ExtractError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExtractError::FileNotFound(_) => ErrorKind::FileNotFound,
            ExtractError::UnsupportedFileType(_) => ErrorKind::UnsupportedFileType,
            ExtractError::MissingCapability { .. } => ErrorKind::MissingCapability,
            ExtractError::Parse(_) => ErrorKind::ParseFailure,
            ExtractError::Read(_) => ErrorKind::ReadFailure,
            ExtractError::FileTooLarge { .. } => ErrorKind::FileTooLarge,
            ExtractError::InvalidConfig(_) => ErrorKind::InvalidConfig,
        }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(feature = "pdf")]
impl From<lopdf::Error> for ExtractError {
    fn from(err: lopdf::Error) -> Self {
        ExtractError::Parse(err.to_string())
    }
}

#[cfg(feature = "docx")]
impl From<zip::result::ZipError> for ExtractError {
    fn from(err: zip::result::ZipError) -> Self {
        ExtractError::Parse(err.to_string())
    }
}

#[cfg(feature = "docx")]
impl From<quick_xml::Error> for ExtractError {
    fn from(err: quick_xml::Error) -> Self {
        ExtractError::Parse(err.to_string())
    }
}

#[cfg(feature = "docx")]
impl From<quick_xml::events::attributes::AttrError> for ExtractError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        ExtractError::Parse(err.to_string())
    }
}
