//! In-memory embedding memo.
//!
//! Keys are BLAKE3-derived from the model name and the exact text, so one
//! sentence is encoded once per provider no matter how many stages ask.

use moka::sync::Cache;

use super::vector::Embedding;
use crate::hashing::hash_embedding_key;

/// Bounded embedding cache (LRU-style eviction).
pub struct EmbeddingCache {
    model: String,
    entries: Cache<u64, Embedding>,
}

impl EmbeddingCache {
    /// Creates a cache with a max entry capacity.
    #[inline]
    pub fn with_capacity(model: impl Into<String>, capacity: u64) -> Self {
        Self {
            model: model.into(),
            entries: Cache::builder().max_capacity(capacity).build(),
        }
    }

    #[inline]
    pub fn get(&self, text: &str) -> Option<Embedding> {
        self.entries.get(&hash_embedding_key(&self.model, text))
    }

    #[inline]
    pub fn insert(&self, text: &str, embedding: Embedding) {
        self.entries
            .insert(hash_embedding_key(&self.model, text), embedding);
    }

    /// Approximate entry count (pending maintenance is not flushed).
    #[inline]
    pub fn len(&self) -> u64 {
        self.entries.entry_count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.entry_count() == 0
    }

    #[inline]
    pub fn contains(&self, text: &str) -> bool {
        self.entries
            .contains_key(&hash_embedding_key(&self.model, text))
    }

    #[inline]
    pub fn clear(&self) {
        self.entries.invalidate_all();
    }
}

impl std::fmt::Debug for EmbeddingCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingCache")
            .field("model", &self.model)
            .field("entries", &self.entries.entry_count())
            .finish()
    }
}
