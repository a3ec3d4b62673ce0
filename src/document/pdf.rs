use std::panic::{self, AssertUnwindSafe};

use tracing::warn;

use super::{DocumentError, DocumentFormat};

/// Extracts the text of every page in order, one line break between pages.
///
/// `pdf-extract` panics on some malformed inputs; those panics are reported
/// as parse errors like any other unreadable file.
pub(super) fn extract(bytes: &[u8]) -> Result<String, DocumentError> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    }));

    match outcome {
        Ok(Ok(pages)) => Ok(pages.join("\n")),
        Ok(Err(e)) => Err(DocumentError::parse(DocumentFormat::Pdf, e.to_string())),
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "pdf parser panicked".to_string());
            warn!(reason = %reason, "PDF parser panicked on malformed input");
            Err(DocumentError::parse(DocumentFormat::Pdf, reason))
        }
    }
}
