use std::sync::Arc;

use tracing::{debug, warn};

use crate::constants::DEFAULT_MAX_SENTENCES;
use crate::embedding::{Embedding, EmbeddingError, EmbeddingProvider};
use crate::text::split_sentences;

use super::types::{DocumentScoring, NegativePolicy, SimilarityScore};

/// Cosine similarity in `[-1, 1]`; `0.0` for mismatched, empty or zero vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot_product / (norm_a * norm_b)
    }
}

/// Embedding-based similarity between texts, reported as percentages.
pub struct SimilarityScorer {
    provider: Arc<EmbeddingProvider>,
    policy: NegativePolicy,
    mode: DocumentScoring,
    max_sentences: usize,
}

impl std::fmt::Debug for SimilarityScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityScorer")
            .field("policy", &self.policy)
            .field("mode", &self.mode)
            .field("max_sentences", &self.max_sentences)
            .finish()
    }
}

impl SimilarityScorer {
    pub fn new(provider: Arc<EmbeddingProvider>) -> Self {
        Self {
            provider,
            policy: NegativePolicy::default(),
            mode: DocumentScoring::default(),
            max_sentences: DEFAULT_MAX_SENTENCES,
        }
    }

    pub fn with_policy(mut self, policy: NegativePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_mode(mut self, mode: DocumentScoring) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_max_sentences(mut self, max_sentences: usize) -> Self {
        self.max_sentences = max_sentences.max(1);
        self
    }

    pub fn policy(&self) -> NegativePolicy {
        self.policy
    }

    pub fn mode(&self) -> DocumentScoring {
        self.mode
    }

    pub fn provider(&self) -> &EmbeddingProvider {
        &self.provider
    }

    /// Percentage similarity of two embeddings under the negative policy.
    pub fn score(&self, a: &Embedding, b: &Embedding) -> f32 {
        self.policy
            .apply(cosine_similarity(a.as_slice(), b.as_slice()))
    }

    /// Document-level similarity of `text_a` against `text_b` in the configured mode.
    ///
    /// A model that cannot be loaded is `Unavailable` whatever the input, as is
    /// a text none of whose sentences encode. Otherwise empty input on either
    /// side scores `0.0`.
    pub fn document_similarity(&self, text_a: &str, text_b: &str) -> SimilarityScore {
        match self.mode {
            DocumentScoring::SentenceLevel => self.sentence_similarity(text_a, text_b),
            DocumentScoring::WholeDocument => self.text_similarity(text_a, text_b),
        }
    }

    /// Similarity of the two texts embedded whole.
    pub fn text_similarity(&self, text_a: &str, text_b: &str) -> SimilarityScore {
        if let Err(e) = self.provider.embedder() {
            return unavailable(e);
        }
        if text_a.trim().is_empty() || text_b.trim().is_empty() {
            return SimilarityScore::Scored(0.0);
        }

        let a = match self.provider.encode(text_a) {
            Ok(e) => e,
            Err(e) => return unavailable(e),
        };
        let b = match self.provider.encode(text_b) {
            Ok(e) => e,
            Err(e) => return unavailable(e),
        };

        SimilarityScore::Scored(self.score(&a, &b))
    }

    /// Best-match-per-sentence averaging: for every sentence of `text_a`, the
    /// maximum cosine against the sentences of `text_b`, averaged.
    fn sentence_similarity(&self, text_a: &str, text_b: &str) -> SimilarityScore {
        if let Err(e) = self.provider.embedder() {
            return unavailable(e);
        }

        let sentences_a = self.capped_sentences(text_a);
        let sentences_b = self.capped_sentences(text_b);

        if sentences_a.is_empty() || sentences_b.is_empty() {
            return SimilarityScore::Scored(0.0);
        }

        let embeddings_a = match self.encode_all(&sentences_a) {
            Ok(e) => e,
            Err(score) => return score,
        };
        let embeddings_b = match self.encode_all(&sentences_b) {
            Ok(e) => e,
            Err(score) => return score,
        };

        let total: f32 = embeddings_a
            .iter()
            .map(|a| {
                embeddings_b
                    .iter()
                    .map(|b| cosine_similarity(a.as_slice(), b.as_slice()))
                    .fold(f32::NEG_INFINITY, f32::max)
            })
            .sum();
        let mean = total / embeddings_a.len() as f32;

        debug!(
            sentences_a = embeddings_a.len(),
            sentences_b = embeddings_b.len(),
            mean_best_cosine = mean,
            "Sentence-level similarity computed"
        );

        SimilarityScore::Scored(self.policy.apply(mean))
    }

    fn capped_sentences(&self, text: &str) -> Vec<String> {
        let mut sentences = split_sentences(text);
        if sentences.len() > self.max_sentences {
            debug!(
                found = sentences.len(),
                kept = self.max_sentences,
                "Truncating sentences for scoring"
            );
            sentences.truncate(self.max_sentences);
        }
        sentences
    }

    /// Encodes every sentence, skipping individual failures.
    fn encode_all(&self, sentences: &[String]) -> Result<Vec<Embedding>, SimilarityScore> {
        let mut embeddings = Vec::with_capacity(sentences.len());
        let mut last_error = None;

        for sentence in sentences {
            match self.provider.encode(sentence) {
                Ok(e) => embeddings.push(e),
                Err(e) if e.is_model_unavailable() => return Err(unavailable(e)),
                Err(e) => {
                    warn!(error = %e, sentence_len = sentence.len(), "Skipping sentence");
                    last_error = Some(e);
                }
            }
        }

        match (embeddings.is_empty(), last_error) {
            (true, Some(e)) => Err(unavailable(e)),
            _ => Ok(embeddings),
        }
    }
}

fn unavailable(error: EmbeddingError) -> SimilarityScore {
    match error {
        EmbeddingError::ModelUnavailable { reason } => SimilarityScore::Unavailable { reason },
        other => SimilarityScore::unavailable(other.to_string()),
    }
}
