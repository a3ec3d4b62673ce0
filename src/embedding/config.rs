use std::path::PathBuf;
use std::time::Duration;

use super::device::DevicePreference;
use super::error::EmbeddingError;
use crate::constants::{
    DEFAULT_CACHE_DIR, DEFAULT_EMBEDDING_CACHE_CAPACITY, DEFAULT_EMBEDDING_DIM,
    DEFAULT_ENCODE_TIMEOUT_SECS, DEFAULT_HUB_ENDPOINT, DEFAULT_LOAD_TIMEOUT_SECS,
    DEFAULT_MAX_SEQ_LEN, DEFAULT_MODEL_NAME,
};

#[derive(Debug, Clone)]
/// Configuration for [`SentenceEmbedder`](super::SentenceEmbedder) and
/// [`EmbeddingProvider`](super::EmbeddingProvider).
pub struct EmbedderConfig {
    /// Hub repository id, e.g. `sentence-transformers/paraphrase-multilingual-MiniLM-L12-v2`.
    pub model_name: String,
    /// Directory holding `config.json`, `tokenizer.json` and `model.safetensors`.
    /// Takes precedence over the download cache.
    pub model_dir: Option<PathBuf>,
    pub cache_dir: PathBuf,
    pub hub_endpoint: String,
    /// Never download; a cache miss is [`EmbeddingError::ModelNotFound`].
    pub offline: bool,
    pub device: DevicePreference,
    /// Max tokens to consider.
    pub max_seq_len: usize,
    /// Expected output dimension (checked against the model's hidden size).
    pub embedding_dim: usize,
    pub load_timeout: Duration,
    /// Per-encode guard. `None` runs encodes inline.
    pub encode_timeout: Option<Duration>,
    /// Memoized embeddings; `0` disables the cache.
    pub cache_capacity: u64,
    /// If true, run in deterministic stub mode (no model files required).
    pub testing_stub: bool,
}

impl Default for EmbedderConfig {
    fn default() -> Self {
        Self {
            model_name: DEFAULT_MODEL_NAME.to_string(),
            model_dir: None,
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            hub_endpoint: DEFAULT_HUB_ENDPOINT.to_string(),
            offline: false,
            device: DevicePreference::default(),
            max_seq_len: DEFAULT_MAX_SEQ_LEN,
            embedding_dim: DEFAULT_EMBEDDING_DIM,
            load_timeout: Duration::from_secs(DEFAULT_LOAD_TIMEOUT_SECS),
            encode_timeout: Some(Duration::from_secs(DEFAULT_ENCODE_TIMEOUT_SECS)),
            cache_capacity: DEFAULT_EMBEDDING_CACHE_CAPACITY,
            testing_stub: false,
        }
    }
}

impl EmbedderConfig {
    /// Creates a config for a local model directory (no hub access).
    pub fn new<P: Into<PathBuf>>(model_dir: P) -> Self {
        Self {
            model_dir: Some(model_dir.into()),
            offline: true,
            ..Default::default()
        }
    }

    /// Creates a stub config (no model files; produces deterministic embeddings).
    pub fn stub() -> Self {
        Self {
            model_name: "stub".to_string(),
            testing_stub: true,
            encode_timeout: None,
            ..Default::default()
        }
    }

    /// Validates required fields for non-stub mode.
    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.max_seq_len == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "max_seq_len must be at least 1".to_string(),
            });
        }

        if self.embedding_dim == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "embedding_dim must be at least 1".to_string(),
            });
        }

        if self.testing_stub {
            return Ok(());
        }

        if self.model_name.trim().is_empty() && self.model_dir.is_none() {
            return Err(EmbeddingError::InvalidConfig {
                reason: "model_name or model_dir is required (stubbing is disabled)".to_string(),
            });
        }

        if let Some(ref dir) = self.model_dir {
            if !dir.is_dir() {
                return Err(EmbeddingError::ModelNotFound { path: dir.clone() });
            }
        }

        Ok(())
    }
}
