use candle_core::{Device, Tensor};
use tracing::{debug, info, warn};

use super::bert::SentenceBert;
use super::config::EmbedderConfig;
use super::device::select_device;
use super::error::EmbeddingError;
use super::hub::resolve_model_files;
use super::utils::load_tokenizer;
use super::vector::Embedding;
use crate::hashing::hash_to_u64;
use crate::text::tokenize;

enum EmbedderBackend {
    Model {
        model: SentenceBert,
        tokenizer: tokenizers::Tokenizer,
        device: Device,
    },
    Stub,
}

/// Sentence encoder backed by a BERT checkpoint (supports stub mode).
pub struct SentenceEmbedder {
    backend: EmbedderBackend,
    config: EmbedderConfig,
}

impl std::fmt::Debug for SentenceEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentenceEmbedder")
            .field(
                "backend",
                &match &self.backend {
                    EmbedderBackend::Model { device, .. } => format!("Model({:?})", device),
                    EmbedderBackend::Stub => "Stub".to_string(),
                },
            )
            .field("model_name", &self.config.model_name)
            .field("embedding_dim", &self.config.embedding_dim)
            .field("max_seq_len", &self.config.max_seq_len)
            .finish()
    }
}

impl SentenceEmbedder {
    /// Loads the embedder from a config, fetching model files if needed.
    ///
    /// Blocks for as long as the download and weight mapping take; callers
    /// wanting a bound go through [`EmbeddingProvider`](super::EmbeddingProvider).
    pub fn load(config: EmbedderConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        if config.testing_stub {
            warn!("Embedder running in STUB mode (testing only)");
            return Ok(Self {
                backend: EmbedderBackend::Stub,
                config,
            });
        }

        let device = select_device(config.device)?;
        debug!(?device, "Selected compute device for embedder");

        let files = resolve_model_files(&config)?;

        let tokenizer = load_tokenizer(&files.tokenizer(), config.max_seq_len)?;

        let model = SentenceBert::load(&files.config(), &files.weights(), &device).map_err(|e| {
            EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to load BERT model: {}", e),
            }
        })?;

        if model.hidden_size() != config.embedding_dim {
            return Err(EmbeddingError::InvalidConfig {
                reason: format!(
                    "embedding_dim ({}) does not match model hidden_size ({})",
                    config.embedding_dim,
                    model.hidden_size()
                ),
            });
        }

        info!(
            model = %config.model_name,
            dir = %files.dir().display(),
            embedding_dim = config.embedding_dim,
            max_seq_len = config.max_seq_len,
            "Sentence model loaded successfully"
        );

        Ok(Self {
            backend: EmbedderBackend::Model {
                model,
                tokenizer,
                device,
            },
            config,
        })
    }

    /// Generates an embedding for a single string.
    pub fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError> {
        if text.trim().is_empty() {
            return Err(EmbeddingError::EmptyInput);
        }

        match &self.backend {
            EmbedderBackend::Model {
                model,
                tokenizer,
                device,
            } => self.embed_with_model(text, model, tokenizer, device),
            EmbedderBackend::Stub => Ok(self.embed_stub(text)),
        }
    }

    fn embed_with_model(
        &self,
        text: &str,
        model: &SentenceBert,
        tokenizer: &tokenizers::Tokenizer,
        device: &Device,
    ) -> Result<Embedding, EmbeddingError> {
        let encoding =
            tokenizer
                .encode(text, true)
                .map_err(|e| EmbeddingError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        if encoding.get_ids().is_empty() {
            return Err(EmbeddingError::EmptyInput);
        }

        debug!(
            text_len = text.len(),
            token_count = encoding.get_ids().len(),
            "Generating embedding (transformer forward pass)"
        );

        let input_ids = Tensor::new(encoding.get_ids(), device)?.unsqueeze(0)?;
        let type_ids = Tensor::new(encoding.get_type_ids(), device)?.unsqueeze(0)?;
        let attention_mask = Tensor::new(encoding.get_attention_mask(), device)?.unsqueeze(0)?;

        let pooled = model
            .forward(&input_ids, &type_ids, &attention_mask)
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("Transformer forward pass failed: {}", e),
            })?;

        let values = pooled.squeeze(0)?.to_vec1::<f32>()?;
        Ok(Embedding::new(normalize(values)))
    }

    /// Signed feature hashing over lowercased tokens.
    ///
    /// Texts sharing words get positive similarity; identical token bags get
    /// identical vectors.
    fn embed_stub(&self, text: &str) -> Embedding {
        debug!(text_len = text.len(), "Generating stub embedding");

        let dim = self.config.embedding_dim;
        let mut values = vec![0.0f32; dim];

        let mut tokens = tokenize(text);
        if tokens.is_empty() {
            tokens.push(text.trim().to_lowercase());
        }

        for token in &tokens {
            let hash = hash_to_u64(token.as_bytes());
            let index = (hash % dim as u64) as usize;
            let sign = if (hash >> 63) == 0 { 1.0 } else { -1.0 };
            values[index] += sign;
        }

        Embedding::new(normalize(values))
    }

    /// Returns the configured output embedding dimension.
    pub fn embedding_dim(&self) -> usize {
        self.config.embedding_dim
    }

    /// Returns `true` if running in stub mode.
    pub fn is_stub(&self) -> bool {
        matches!(self.backend, EmbedderBackend::Stub)
    }

    /// Returns `true` if a model is loaded.
    pub fn has_model(&self) -> bool {
        matches!(self.backend, EmbedderBackend::Model { .. })
    }

    pub fn config(&self) -> &EmbedderConfig {
        &self.config
    }
}

fn normalize(mut values: Vec<f32>) -> Vec<f32> {
    let norm: f32 = values.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm > 0.0 {
        for x in &mut values {
            *x /= norm;
        }
    }

    values
}
