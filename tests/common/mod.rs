//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::io::{Cursor, Write};
use std::sync::Arc;

use resume_fit::{Analyzer, AnalyzerOptions, EmbedderConfig, EmbeddingProvider};
use zip::write::SimpleFileOptions;

pub const JOB_RU: &str = "Требуется Python разработчик с опытом Docker";
pub const RESUME_RU: &str = "Опыт работы: разработка на Python, без Docker";

/// Analyzer over the deterministic stub embedder.
pub fn stub_analyzer(options: AnalyzerOptions) -> Analyzer {
    Analyzer::new(Arc::new(EmbeddingProvider::stub()), options)
}

/// Analyzer whose model can never load (offline, empty cache).
///
/// Keep the returned directory alive for the analyzer's lifetime.
pub fn unavailable_analyzer() -> (Analyzer, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let provider = EmbeddingProvider::new(EmbedderConfig {
        cache_dir: dir.path().to_path_buf(),
        offline: true,
        ..Default::default()
    });
    (
        Analyzer::new(Arc::new(provider), AnalyzerOptions::default()),
        dir,
    )
}

/// Minimal DOCX with one `<w:p>` per paragraph.
pub fn docx_with_paragraphs(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t xml:space=\"preserve\">{p}</w:t></w:r></w:p>"))
        .collect();

    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    );

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    writer
        .start_file("[Content_Types].xml", options)
        .expect("start content types");
    writer
        .write_all(br#"<?xml version="1.0" encoding="UTF-8"?><Types/>"#)
        .expect("write content types");
    writer
        .start_file("word/document.xml", options)
        .expect("start document");
    writer.write_all(xml.as_bytes()).expect("write document");
    writer.finish().expect("finish zip").into_inner()
}

/// Minimal PDF with one line of Helvetica text per page.
///
/// Page text must be plain ASCII without parentheses or backslashes.
pub fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
    let page_ids: Vec<usize> = (0..pages.len()).map(|i| 4 + 2 * i).collect();
    let kids = page_ids
        .iter()
        .map(|id| format!("{id} 0 R"))
        .collect::<Vec<_>>()
        .join(" ");

    let mut objects = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!("<< /Type /Pages /Kids [{kids}] /Count {} >>", pages.len()),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    ];
    for (text, page_id) in pages.iter().zip(&page_ids) {
        let content = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            page_id + 1
        ));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{content}\nendstream",
            content.len()
        ));
    }

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }

    let xref_offset = pdf.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        xref.push_str(&format!("{offset:010} 00000 n \n"));
    }
    xref.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
        objects.len() + 1
    ));
    pdf.extend_from_slice(xref.as_bytes());
    pdf
}
