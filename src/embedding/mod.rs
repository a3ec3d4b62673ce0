//! Sentence embeddings.
//!
//! - [`EmbeddingProvider`] is the shared, lazily-loaded entry point used by
//!   [`crate::responsibilities`], [`crate::scoring`] and [`crate::sections`].
//! - [`SentenceEmbedder`] wraps a BERT checkpoint (or the test stub).

/// BERT encoder with mean pooling.
pub mod bert;
mod cache;
mod config;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod embedder;
mod error;
/// Model file resolution and download.
pub mod hub;
mod provider;
/// Tokenizer loading.
pub mod utils;
mod vector;

#[cfg(test)]
mod tests;

pub use cache::EmbeddingCache;
pub use config::EmbedderConfig;
pub use device::DevicePreference;
pub use embedder::SentenceEmbedder;
pub use error::EmbeddingError;
pub use provider::{EmbeddingProvider, ProviderStatus};
pub use vector::Embedding;
