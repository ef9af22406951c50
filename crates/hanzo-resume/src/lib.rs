//! # Hanzo Resume
//!
//! Text, contact and link extraction from resume documents.
//!
//! Given one PDF, DOCX or TXT file this crate returns the plain text, the
//! email addresses and phone numbers found in it, and every hyperlink,
//! labelled with the platform it points to (LinkedIn, GitHub, ...).
//!
//! ## Features
//!
//! - **TXT**: always available
//! - **PDF** (`pdf`): page text plus link annotations via `lopdf`
//! - **DOCX** (`docx`): paragraph text plus relationship hyperlinks via `zip` and `quick-xml`
//!
//! A build without a format feature reports a `missing_capability` error
//! for that format instead of failing at runtime.
//!
//! ## Example
//!
//! ```rust,no_run
//! use hanzo_resume::extract_resume;
//!
//! let result = extract_resume("resume.pdf");
//! if let Some(resume) = result.resume() {
//!     for link in &resume.urls {
//!         println!("{}: {}", link.platform, link.url);
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌──────────────────┐
//! │ Dispatcher  │ ──► │ Format Extractor │ ──► │ Result Assembler │
//! │ (extension) │     │ (TXT / PDF/DOCX) │     │ (patterns+merge) │
//! └─────────────┘     └──────────────────┘     └──────────────────┘
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod links;
pub mod patterns;
pub mod platform;
pub mod result;
pub mod txt;

#[cfg(feature = "pdf")]
pub mod pdf;

#[cfg(feature = "docx")]
pub mod docx;

pub use config::ExtractorConfig;
pub use dispatch::{extract_resume, extract_resume_with, FileType};
pub use error::{ErrorKind, ExtractError, Result};
pub use links::{dedup_links, merge_links, LinkUrl};
pub use platform::Platform;
pub use result::{ExtractedResume, ExtractionFailure, ExtractionResult, RawDocument};
pub use txt::TxtExtractor;

#[cfg(feature = "pdf")]
pub use pdf::PdfExtractor;

#[cfg(feature = "docx")]
pub use docx::DocxExtractor;

use std::path::Path;

/// Common trait for all format extractors
pub trait Extractor {
    /// Read text and native hyperlinks from the file at `path`
    fn extract(&self, path: &Path) -> Result<RawDocument>;
}
