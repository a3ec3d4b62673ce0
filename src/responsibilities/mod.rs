//! Responsibility sentence extraction with embedding-based deduplication.


use tracing::{debug, warn};

use crate::constants::{DEFAULT_DEDUP_THRESHOLD, DEFAULT_MAX_SENTENCES};
use crate::embedding::{Embedding, EmbeddingError, EmbeddingProvider};
use crate::scoring::cosine_similarity;
use crate::text::split_sentences;

/// Duty-describing stems and inflections, Russian and English.
///
/// Matched as substrings, so `test` also covers `tested` and `testing`.
pub const RESPONSIBILITY_KEYWORDS: &[&str] = &[
    "разработка",
    "development",
    "разработать",
    "develop",
    "создание",
    "creation",
    "создать",
    "create",
    "внедрение",
    "implementation",
    "внедрить",
    "implement",
    "оптимизация",
    "optimization",
    "оптимизировать",
    "optimize",
    "поддержка",
    "maintenance",
    "поддерживать",
    "maintain",
    "тестирование",
    "testing",
    "тестировать",
    "test",
    "анализ",
    "analysis",
    "анализировать",
    "analyze",
    "управление",
    "management",
    "управлять",
    "manage",
    "координация",
    "coordination",
    "координировать",
    "coordinate",
];

/// Returns `true` if lower-cased `text` contains any responsibility keyword.
pub fn contains_responsibility_keyword(text: &str) -> bool {
    RESPONSIBILITY_KEYWORDS
        .iter()
        .any(|keyword| text.contains(keyword))
}

/// An accepted responsibility sentence and the vector it was deduplicated by.
#[derive(Debug, Clone)]
pub struct Responsibility {
    pub text: String,
    pub embedding: Embedding,
}

/// Extracts responsibility sentences in order of first occurrence.
#[derive(Debug, Clone, Copy)]
pub struct ResponsibilityExtractor {
    dedup_threshold: f32,
    max_candidates: usize,
}

impl Default for ResponsibilityExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_DEDUP_THRESHOLD, DEFAULT_MAX_SENTENCES)
    }
}

impl ResponsibilityExtractor {
    /// A candidate is a duplicate when its cosine similarity to an accepted
    /// responsibility is strictly above `dedup_threshold`.
    pub fn new(dedup_threshold: f32, max_candidates: usize) -> Self {
        Self {
            dedup_threshold,
            max_candidates,
        }
    }

    pub fn dedup_threshold(&self) -> f32 {
        self.dedup_threshold
    }

    /// Lower-cased keyword-bearing sentences, before deduplication.
    ///
    /// Capped at `max_candidates`; dedup is quadratic in this count.
    pub fn candidates(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let mut candidates: Vec<String> = split_sentences(&lowered)
            .into_iter()
            .filter(|sentence| contains_responsibility_keyword(sentence))
            .collect();

        if candidates.len() > self.max_candidates {
            debug!(
                found = candidates.len(),
                kept = self.max_candidates,
                "Truncating responsibility candidates"
            );
            candidates.truncate(self.max_candidates);
        }

        candidates
    }

    /// Extracts and deduplicates responsibilities.
    ///
    /// Fails only with [`EmbeddingError::ModelUnavailable`]; a sentence that
    /// fails to encode is skipped.
    pub fn extract(
        &self,
        text: &str,
        provider: &EmbeddingProvider,
    ) -> Result<Vec<Responsibility>, EmbeddingError> {
        let candidates = self.candidates(text);
        let mut accepted: Vec<Responsibility> = Vec::with_capacity(candidates.len());

        for sentence in candidates {
            let embedding = match provider.encode(&sentence) {
                Ok(embedding) => embedding,
                Err(e) if e.is_model_unavailable() => return Err(e),
                Err(e) => {
                    warn!(error = %e, sentence_len = sentence.len(), "Skipping responsibility");
                    continue;
                }
            };

            let duplicate = accepted.iter().any(|existing| {
                cosine_similarity(existing.embedding.as_slice(), embedding.as_slice())
                    > self.dedup_threshold
            });

            if duplicate {
                debug!(sentence = %sentence, "Dropping near-duplicate responsibility");
                continue;
            }

            accepted.push(Responsibility {
                text: sentence,
                embedding,
            });
        }

        debug!(count = accepted.len(), "Responsibilities extracted");
        Ok(accepted)
    }
}
