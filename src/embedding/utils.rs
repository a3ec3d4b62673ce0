use std::path::Path;

use tokenizers::{Tokenizer, TruncationParams};

use super::error::EmbeddingError;

/// Reads `tokenizer.json` and caps every encode at `max_len` tokens.
///
/// Single sentences are encoded one at a time, so padding is turned off.
pub fn load_tokenizer(path: &Path, max_len: usize) -> Result<Tokenizer, EmbeddingError> {
    let failed = |reason: String| EmbeddingError::TokenizationFailed {
        reason: format!("{}: {reason}", path.display()),
    };

    let mut tokenizer = Tokenizer::from_file(path).map_err(|e| failed(e.to_string()))?;
    tokenizer
        .with_truncation(Some(TruncationParams {
            max_length: max_len,
            ..Default::default()
        }))
        .map_err(|e| failed(e.to_string()))?;
    tokenizer.with_padding(None);

    Ok(tokenizer)
}
