//! DOCX (Office Open XML) extraction
//!
//! A `.docx` file is a zip package. Paragraph text comes from
//! `word/document.xml`; hyperlink targets come from the relationship part
//! `word/_rels/document.xml.rels`, which maps ids like `rId5` to URLs.

use crate::{
    config::ExtractorConfig,
    error::{ExtractError, Result},
    links::LinkUrl,
    Extractor, RawDocument,
};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use tracing::{debug, warn};
use zip::result::ZipError;
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";
const DOCUMENT_RELS_PART: &str = "word/_rels/document.xml.rels";

/// DOCX paragraph text and hyperlink extractor
#[derive(Debug, Clone, Default)]
pub struct DocxExtractor {
    resolve_inline_hyperlinks: bool,
}

/// One `<Relationship>` entry of a package part
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relationship {
    pub id: String,
    pub rel_type: String,
    pub target: String,
}

impl Relationship {
    pub fn is_hyperlink(&self) -> bool {
        self.rel_type.contains("hyperlink")
    }
}

#[derive(Debug, Default, PartialEq)]
struct DocumentBody {
    text: String,
    /// `r:id` values of inline `w:hyperlink` elements, in document order
    inline_ids: Vec<String>,
}

impl DocxExtractor {
    pub fn new(config: &ExtractorConfig) -> Self {
        Self {
            resolve_inline_hyperlinks: config.resolve_inline_hyperlinks,
        }
    }

    /// Extract from any seekable DOCX byte source
    pub fn extract_from_reader<R: Read + Seek>(&self, reader: R) -> Result<RawDocument> {
        let mut archive = ZipArchive::new(reader)?;

        let document_xml = read_part(&mut archive, DOCUMENT_PART)?
            .ok_or_else(|| ExtractError::parse(format!("missing {}", DOCUMENT_PART)))?;
        let body = parse_document(&document_xml)?;

        let relationships = match read_part(&mut archive, DOCUMENT_RELS_PART) {
            Ok(Some(xml)) => parse_relationships(&xml).unwrap_or_else(|e| {
                warn!(error = %e, "ignoring unreadable relationship part");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "ignoring unreadable relationship part");
                Vec::new()
            }
        };

        let links = self.collect_links(&body.inline_ids, &relationships);
        debug!(
            text_bytes = body.text.len(),
            relationships = relationships.len(),
            links = links.len(),
            "parsed docx package"
        );

        Ok(RawDocument::new(body.text, links))
    }

    fn collect_links(&self, inline_ids: &[String], relationships: &[Relationship]) -> Vec<LinkUrl> {
        let hyperlinks: Vec<&Relationship> =
            relationships.iter().filter(|r| r.is_hyperlink()).collect();
        let mut links = Vec::new();

        if self.resolve_inline_hyperlinks {
            for id in inline_ids {
                match hyperlinks.iter().find(|r| &r.id == id) {
                    Some(rel) => links.push(LinkUrl::classify(rel.target.as_str())),
                    None => warn!(id = %id, "inline hyperlink has no hyperlink relationship"),
                }
            }
        } else if !inline_ids.is_empty() {
            debug!(count = inline_ids.len(), "inline hyperlink ids left unresolved");
        }

        links.extend(hyperlinks.iter().map(|r| LinkUrl::classify(r.target.as_str())));
        links
    }
}

impl Extractor for DocxExtractor {
    fn extract(&self, path: &Path) -> Result<RawDocument> {
        let file = File::open(path)?;
        self.extract_from_reader(BufReader::new(file))
    }
}

/// Read a package part as UTF-8, `None` when the part is absent
fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<Option<String>> {
    let mut part = match archive.by_name(name) {
        Ok(part) => part,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut contents = String::new();
    part.read_to_string(&mut contents)
        .map_err(|e| ExtractError::parse(format!("{}: {}", name, e)))?;
    Ok(Some(contents))
}

/// Parse a relationship part, keeping file order
pub fn parse_relationships(xml: &str) -> Result<Vec<Relationship>> {
    let mut reader = Reader::from_str(xml);
    let mut relationships = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                let mut rel = Relationship::default();
                for attr in e.attributes() {
                    let attr = attr?;
                    let value = attr.unescape_value()?.into_owned();
                    match attr.key.local_name().as_ref() {
                        b"Id" => rel.id = value,
                        b"Type" => rel.rel_type = value,
                        b"Target" => rel.target = value,
                        _ => {}
                    }
                }
                relationships.push(rel);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(relationships)
}

/// Paragraph text plus inline hyperlink ids. Every outermost `w:p` ends
/// with a newline. Text-box paragraphs nested inside a paragraph are set
/// off by newlines, and the `mc:Fallback` copy of a text box is skipped.
fn parse_document(xml: &str) -> Result<DocumentBody> {
    let mut reader = Reader::from_str(xml);
    let mut body = DocumentBody::default();
    let mut paragraph = String::new();
    let mut paragraph_depth = 0usize;
    let mut properties_depth = 0usize;
    let mut fallback_depth = 0usize;
    let mut in_text = false;

    loop {
        let event = reader.read_event()?;

        // Word stores each text box twice; only the Choice copy is read.
        match &event {
            Event::Start(e) if e.local_name().as_ref() == b"Fallback" => {
                fallback_depth += 1;
                continue;
            }
            Event::End(e) if e.local_name().as_ref() == b"Fallback" => {
                fallback_depth = fallback_depth.saturating_sub(1);
                continue;
            }
            Event::Eof => break,
            _ if fallback_depth > 0 => continue,
            _ => {}
        }

        match event {
            Event::Start(e) => match e.local_name().as_ref() {
                b"p" => {
                    if paragraph_depth > 0 && !paragraph.is_empty() && !paragraph.ends_with('\n') {
                        paragraph.push('\n');
                    }
                    paragraph_depth += 1;
                }
                b"pPr" | b"rPr" => properties_depth += 1,
                b"t" => in_text = properties_depth == 0,
                b"hyperlink" => push_relationship_id(&e, &mut body.inline_ids)?,
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"p" if paragraph_depth == 0 => body.text.push('\n'),
                b"tab" if paragraph_depth > 0 && properties_depth == 0 => paragraph.push('\t'),
                b"br" | b"cr" if paragraph_depth > 0 && properties_depth == 0 => {
                    paragraph.push('\n')
                }
                b"hyperlink" => push_relationship_id(&e, &mut body.inline_ids)?,
                _ => {}
            },
            Event::Text(t) if in_text && paragraph_depth > 0 => {
                paragraph.push_str(&t.unescape()?);
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"pPr" | b"rPr" => properties_depth = properties_depth.saturating_sub(1),
                b"p" => {
                    paragraph_depth = paragraph_depth.saturating_sub(1);
                    if paragraph_depth == 0 {
                        body.text.push_str(&paragraph);
                        body.text.push('\n');
                        paragraph.clear();
                    } else {
                        paragraph.push('\n');
                    }
                }
                _ => {}
            },
            _ => {}
        }
    }

    Ok(body)
}

fn push_relationship_id(element: &BytesStart<'_>, ids: &mut Vec<String>) -> Result<()> {
    for attr in element.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == b"id" {
            ids.push(attr.unescape_value()?.into_owned());
        }
    }
    Ok(())
}
