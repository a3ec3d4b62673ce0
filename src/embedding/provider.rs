//! Lazily-loaded, shareable embedding provider.
//!
//! The model is loaded on the first encode, at most once per provider. A load
//! failure is remembered: every later call fails fast with
//! [`EmbeddingError::ModelUnavailable`] instead of retrying the download.

use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::cache::EmbeddingCache;
use super::config::EmbedderConfig;
use super::embedder::SentenceEmbedder;
use super::error::EmbeddingError;
use super::vector::Embedding;

enum ProviderState {
    Uninitialized,
    Ready(Arc<SentenceEmbedder>),
    Unavailable(String),
}

/// Observable lifecycle of an [`EmbeddingProvider`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum ProviderStatus {
    Uninitialized,
    Ready,
    Unavailable { reason: String },
}

/// Shared handle to one sentence encoder.
///
/// Wrap in an [`Arc`] to share between the analyzer stages; all methods take
/// `&self`.
pub struct EmbeddingProvider {
    config: EmbedderConfig,
    state: Mutex<ProviderState>,
    cache: Option<EmbeddingCache>,
}

impl std::fmt::Debug for EmbeddingProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingProvider")
            .field("model_name", &self.config.model_name)
            .field("status", &self.status())
            .field("cache", &self.cache)
            .finish()
    }
}

impl EmbeddingProvider {
    /// Creates a provider; nothing is loaded until the first encode.
    pub fn new(config: EmbedderConfig) -> Self {
        let cache = (config.cache_capacity > 0)
            .then(|| EmbeddingCache::with_capacity(&config.model_name, config.cache_capacity));

        Self {
            config,
            state: Mutex::new(ProviderState::Uninitialized),
            cache,
        }
    }

    /// Provider over the deterministic stub encoder.
    pub fn stub() -> Self {
        Self::new(EmbedderConfig::stub())
    }

    /// Wraps an already-loaded embedder.
    pub fn from_embedder(embedder: SentenceEmbedder) -> Self {
        let provider = Self::new(embedder.config().clone());
        *provider.state.lock() = ProviderState::Ready(Arc::new(embedder));
        provider
    }

    pub fn config(&self) -> &EmbedderConfig {
        &self.config
    }

    pub fn status(&self) -> ProviderStatus {
        match &*self.state.lock() {
            ProviderState::Uninitialized => ProviderStatus::Uninitialized,
            ProviderState::Ready(_) => ProviderStatus::Ready,
            ProviderState::Unavailable(reason) => ProviderStatus::Unavailable {
                reason: reason.clone(),
            },
        }
    }

    /// `false` only once a load has been attempted and failed.
    pub fn is_available(&self) -> bool {
        !matches!(&*self.state.lock(), ProviderState::Unavailable(_))
    }

    /// Loads the model if needed; `true` when it is usable.
    pub fn ready(&self) -> bool {
        self.embedder().is_ok()
    }

    /// Returns the loaded embedder, loading it on first use.
    ///
    /// Concurrent first callers block on the same load.
    pub fn embedder(&self) -> Result<Arc<SentenceEmbedder>, EmbeddingError> {
        let mut state = self.state.lock();

        match &*state {
            ProviderState::Ready(embedder) => return Ok(Arc::clone(embedder)),
            ProviderState::Unavailable(reason) => {
                return Err(EmbeddingError::ModelUnavailable {
                    reason: reason.clone(),
                });
            }
            ProviderState::Uninitialized => {}
        }

        info!(
            model = %self.config.model_name,
            stub = self.config.testing_stub,
            "Loading embedding model"
        );

        let config = self.config.clone();
        let loaded = if config.testing_stub {
            SentenceEmbedder::load(config)
        } else {
            run_with_timeout(self.config.load_timeout, "model load", move || {
                SentenceEmbedder::load(config)
            })
        };

        match loaded {
            Ok(embedder) => {
                let embedder = Arc::new(embedder);
                *state = ProviderState::Ready(Arc::clone(&embedder));
                Ok(embedder)
            }
            Err(e) => {
                let reason = e.to_string();
                warn!(
                    model = %self.config.model_name,
                    error = %reason,
                    "Embedding model unavailable; semantic scores disabled"
                );
                *state = ProviderState::Unavailable(reason.clone());
                Err(EmbeddingError::ModelUnavailable { reason })
            }
        }
    }

    /// Encodes one text into a fixed-dimension vector.
    ///
    /// Whitespace-only input is [`EmbeddingError::EmptyInput`]. Repeated texts
    /// are served from the memo cache.
    pub fn encode(&self, text: &str) -> Result<Embedding, EmbeddingError> {
        if text.trim().is_empty() {
            return Err(EmbeddingError::EmptyInput);
        }

        if let Some(hit) = self.cache.as_ref().and_then(|cache| cache.get(text)) {
            debug!(text_len = text.len(), "Embedding cache hit");
            return Ok(hit);
        }

        let embedder = self.embedder()?;

        let embedding = match self.config.encode_timeout {
            Some(timeout) if embedder.has_model() => {
                let text = text.to_string();
                let worker = Arc::clone(&embedder);
                run_with_timeout(timeout, "encode", move || worker.embed(&text))?
            }
            _ => embedder.embed(text)?,
        };

        if let Some(cache) = &self.cache {
            cache.insert(text, embedding.clone());
        }

        Ok(embedding)
    }

    /// Output dimension of this provider's vectors.
    pub fn embedding_dim(&self) -> usize {
        self.config.embedding_dim
    }

    #[cfg(test)]
    pub(crate) fn cache(&self) -> Option<&EmbeddingCache> {
        self.cache.as_ref()
    }
}

/// Runs `work` on a helper thread and waits at most `timeout` for it.
///
/// On timeout the helper is detached; its eventual result is dropped.
pub(crate) fn run_with_timeout<T, F>(
    timeout: Duration,
    operation: &'static str,
    work: F,
) -> Result<T, EmbeddingError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, EmbeddingError> + Send + 'static,
{
    let (tx, rx) = mpsc::channel();

    thread::Builder::new()
        .name(format!("resume-fit-{}", operation.replace(' ', "-")))
        .spawn(move || {
            let _ = tx.send(work());
        })
        .map_err(|e| EmbeddingError::InferenceFailed {
            reason: format!("failed to spawn {operation} worker: {e}"),
        })?;

    match rx.recv_timeout(timeout) {
        Ok(result) => result,
        Err(RecvTimeoutError::Timeout) => {
            warn!(operation, ?timeout, "Operation timed out");
            Err(EmbeddingError::Timeout { operation, timeout })
        }
        Err(RecvTimeoutError::Disconnected) => Err(EmbeddingError::InferenceFailed {
            reason: format!("{operation} worker exited without a result"),
        }),
    }
}
