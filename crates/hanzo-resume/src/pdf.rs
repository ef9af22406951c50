//! PDF document extraction

use crate::{error::Result, links::LinkUrl, Extractor, RawDocument};
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::path::Path;
use tracing::{debug, warn};

/// PDF text and link-annotation extractor
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract from PDF bytes
    pub fn extract_from_bytes(&self, bytes: &[u8]) -> Result<RawDocument> {
        let doc = Document::load_mem(bytes)?;
        Ok(self.extract_from_document(&doc))
    }

    /// Walk pages in order, collecting text and annotation URIs
    fn extract_from_document(&self, doc: &Document) -> RawDocument {
        let mut text = String::new();
        let mut links = Vec::new();

        for (page_num, page_id) in doc.get_pages() {
            match doc.extract_text(&[page_num]) {
                Ok(page_text) => text.push_str(&page_text),
                Err(e) => warn!(page = page_num, error = %e, "skipping unreadable page text"),
            }

            let uris = page_link_uris(doc, page_id);
            debug!(page = page_num, links = uris.len(), "collected link annotations");
            links.extend(uris.into_iter().map(LinkUrl::classify));
        }

        RawDocument::new(text, links)
    }
}

impl Extractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<RawDocument> {
        let doc = Document::load(path)?;
        Ok(self.extract_from_document(&doc))
    }
}

/// Follow an indirect reference, if any
fn resolve<'a>(doc: &'a Document, object: &'a Object) -> Option<&'a Object> {
    match object {
        Object::Reference(id) => doc.get_object(*id).ok(),
        other => Some(other),
    }
}

fn resolve_dict<'a>(doc: &'a Document, object: &'a Object) -> Option<&'a Dictionary> {
    resolve(doc, object).and_then(|o| o.as_dict().ok())
}

/// Target URIs of the page's link annotations, in annotation order
fn page_link_uris(doc: &Document, page_id: ObjectId) -> Vec<String> {
    let Ok(page) = doc.get_dictionary(page_id) else {
        return Vec::new();
    };
    let Some(annots) = page
        .get(b"Annots")
        .ok()
        .and_then(|a| resolve(doc, a))
        .and_then(|a| a.as_array().ok())
    else {
        return Vec::new();
    };

    annots
        .iter()
        .filter_map(|annot| resolve_dict(doc, annot))
        .filter_map(|annot| annotation_uri(doc, annot))
        .collect()
}

fn annotation_uri(doc: &Document, annot: &Dictionary) -> Option<String> {
    let action = resolve_dict(doc, annot.get(b"A").ok()?)?;
    let uri = resolve(doc, action.get(b"URI").ok()?)?;
    let bytes = uri.as_str().ok()?;
    Some(decode_pdf_string(bytes))
}

/// PDF text strings are either UTF-16BE with a BOM or single-byte
fn decode_pdf_string(bytes: &[u8]) -> String {
    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = utf16
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    }
}
