//! Plain-text extraction from uploaded résumé documents.
//!
//! A [`RawDocument`] is consumed once by [`extract_text`]. Failures are fatal
//! for the caller: there is no partial or best-effort recovery.

mod docx;
mod error;
mod pdf;


pub use error::DocumentError;

use std::fmt;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

/// Declared format tag of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Maps a bare extension (`"pdf"`, `".DOCX"`) to a format.
    pub fn from_extension(extension: &str) -> Result<Self, DocumentError> {
        let normalized = extension.trim().trim_start_matches('.').to_ascii_lowercase();
        match normalized.as_str() {
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            _ => Err(DocumentError::UnsupportedFormat {
                extension: normalized,
            }),
        }
    }

    /// Maps a file name (`"cv.pdf"`) to a format using its extension.
    pub fn from_file_name(name: &str) -> Result<Self, DocumentError> {
        let extension = Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        Self::from_extension(extension)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uploaded bytes plus their declared format.
#[derive(Debug, Clone)]
pub struct RawDocument {
    bytes: Vec<u8>,
    format: DocumentFormat,
}

impl RawDocument {
    pub fn new(bytes: impl Into<Vec<u8>>, format: DocumentFormat) -> Self {
        Self {
            bytes: bytes.into(),
            format,
        }
    }

    /// Builds a document from an upload, taking the format from the file name.
    pub fn from_upload(file_name: &str, bytes: impl Into<Vec<u8>>) -> Result<Self, DocumentError> {
        let format = DocumentFormat::from_file_name(file_name)?;
        Ok(Self::new(bytes, format))
    }

    /// Reads a document from disk. The extension is checked before any I/O.
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        let format = DocumentFormat::from_extension(extension)?;

        let bytes = std::fs::read(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::new(bytes, format))
    }

    pub fn format(&self) -> DocumentFormat {
        self.format
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Converts a document into plain text.
///
/// PDF: every page's extractable text, in page order. DOCX: every paragraph's
/// text followed by a newline, in document order.
pub fn extract_text(document: RawDocument) -> Result<String, DocumentError> {
    debug!(
        format = %document.format,
        byte_len = document.bytes.len(),
        "Extracting document text"
    );

    if document.bytes.is_empty() {
        return Err(DocumentError::parse(document.format, "document is empty"));
    }

    let text = match document.format {
        DocumentFormat::Pdf => pdf::extract(&document.bytes)?,
        DocumentFormat::Docx => docx::extract(&document.bytes)?,
    };

    info!(
        format = %document.format,
        text_len = text.len(),
        "Document text extracted"
    );

    Ok(text)
}

/// Reads and extracts a document from disk in one step.
pub fn extract_text_from_path(path: &Path) -> Result<String, DocumentError> {
    extract_text(RawDocument::from_path(path)?)
}
