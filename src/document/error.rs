use std::path::PathBuf;
use thiserror::Error;

use super::DocumentFormat;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("unsupported document format: '{extension}' (expected pdf or docx)")]
    UnsupportedFormat { extension: String },

    #[error("failed to parse {format} document: {reason}")]
    ParseError {
        format: DocumentFormat,
        reason: String,
    },

    #[error("failed to read document {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DocumentError {
    pub(crate) fn parse(format: DocumentFormat, reason: impl Into<String>) -> Self {
        DocumentError::ParseError {
            format,
            reason: reason.into(),
        }
    }
}

impl From<zip::result::ZipError> for DocumentError {
    fn from(err: zip::result::ZipError) -> Self {
        DocumentError::parse(DocumentFormat::Docx, err.to_string())
    }
}

impl From<quick_xml::Error> for DocumentError {
    fn from(err: quick_xml::Error) -> Self {
        DocumentError::parse(DocumentFormat::Docx, err.to_string())
    }
}
