use thiserror::Error;

use crate::document::DocumentError;

/// Failures that abort an analysis.
///
/// Model problems never appear here; they degrade the result instead.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Document(#[from] DocumentError),
}
