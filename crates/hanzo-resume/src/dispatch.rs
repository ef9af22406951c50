//! Route a file to its format extractor by extension

use crate::{
    config::ExtractorConfig,
    error::{ExtractError, Result},
    txt::TxtExtractor,
    ExtractedResume, ExtractionResult, Extractor, RawDocument,
};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    /// `.docx` and `.doc` both go through the DOCX reader
    Docx,
    Txt,
}

impl FileType {
    /// Detect by case-insensitive extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = extension_of(path);
        match extension.as_str() {
            ".pdf" => Ok(FileType::Pdf),
            ".docx" | ".doc" => Ok(FileType::Docx),
            ".txt" => Ok(FileType::Txt),
            _ => Err(ExtractError::UnsupportedFileType(extension)),
        }
    }
}

/// Lower-cased extension with its leading dot, or empty
fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default()
}

/// Extract a resume with the default configuration
pub fn extract_resume(path: impl AsRef<Path>) -> ExtractionResult {
    extract_resume_with(path, &ExtractorConfig::default())
}

/// Extract a resume. Every failure is folded into the returned result.
pub fn extract_resume_with(path: impl AsRef<Path>, config: &ExtractorConfig) -> ExtractionResult {
    let path = path.as_ref();
    match try_extract(path, config) {
        Ok(resume) => ExtractionResult::Success(resume),
        Err(e) => {
            warn!(path = %path.display(), kind = ?e.kind(), error = %e, "extraction failed");
            e.into()
        }
    }
}

/// Fallible core of [`extract_resume_with`]
pub fn try_extract(path: &Path, config: &ExtractorConfig) -> Result<ExtractedResume> {
    if !path.exists() {
        return Err(ExtractError::FileNotFound(path.to_path_buf()));
    }

    let file_type = FileType::from_path(path)?;

    let size = fs::metadata(path)?.len();
    if size > config.max_file_size {
        return Err(ExtractError::FileTooLarge {
            size,
            max: config.max_file_size,
        });
    }

    info!(path = %path.display(), ?file_type, size, "extracting resume");
    let raw = extract_raw(file_type, path, config)?;
    Ok(raw.assemble())
}

#[cfg_attr(not(feature = "docx"), allow(unused_variables))]
fn extract_raw(file_type: FileType, path: &Path, config: &ExtractorConfig) -> Result<RawDocument> {
    match file_type {
        FileType::Txt => TxtExtractor::new().extract(path),

        #[cfg(feature = "pdf")]
        FileType::Pdf => crate::pdf::PdfExtractor::new().extract(path),
        #[cfg(not(feature = "pdf"))]
        FileType::Pdf => Err(ExtractError::MissingCapability {
            format: "PDF",
            feature: "pdf",
        }),

        #[cfg(feature = "docx")]
        FileType::Docx => crate::docx::DocxExtractor::new(config).extract(path),
        #[cfg(not(feature = "docx"))]
        FileType::Docx => Err(ExtractError::MissingCapability {
            format: "DOCX",
            feature: "docx",
        }),
    }
}
