use std::io::{Cursor, Read};

use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;

use super::{DocumentError, DocumentFormat};

/// Main document part inside the OOXML package.
const DOCUMENT_PART: &str = "word/document.xml";

const TEXT_BOX: &[u8] = b"w:txbxContent";

pub(super) fn extract(bytes: &[u8]) -> Result<String, DocumentError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)?
        .read_to_string(&mut xml)
        .map_err(|e| DocumentError::parse(DocumentFormat::Docx, e.to_string()))?;

    paragraphs_to_text(&xml)
}

/// Joins the text of every `w:p`, one paragraph per line.
///
/// Only `w:t` content is text; `w:tab` and `w:br` map to their whitespace.
/// Text boxes (`w:txbxContent`) are skipped: their paragraphs sit inside a run
/// of the enclosing paragraph and would otherwise split it.
pub(super) fn paragraphs_to_text(xml: &str) -> Result<String, DocumentError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut text = String::new();
    let mut paragraph = String::new();
    let mut in_text_run = false;
    let mut text_box_depth = 0usize;

    loop {
        let event = reader.read_event()?;

        match &event {
            Event::Start(e) if e.name().as_ref() == TEXT_BOX => {
                text_box_depth += 1;
                continue;
            }
            Event::End(e) if e.name().as_ref() == TEXT_BOX => {
                text_box_depth = text_box_depth.saturating_sub(1);
                continue;
            }
            Event::Eof => break,
            _ if text_box_depth > 0 => continue,
            _ => {}
        }

        match event {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => {
                    text.push_str(&paragraph);
                    text.push('\n');
                    paragraph.clear();
                }
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => paragraph.push('\t'),
                b"w:br" | b"w:cr" => paragraph.push('\n'),
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text_run => {
                let unescaped = t
                    .unescape()
                    .map_err(|e| DocumentError::parse(DocumentFormat::Docx, e.to_string()))?;
                paragraph.push_str(&unescaped);
            }
            _ => {}
        }
    }

    Ok(text)
}
