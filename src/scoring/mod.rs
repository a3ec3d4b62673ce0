//! Cosine similarity and document-level aggregation.
//!
//! Raw cosines live in `[-1, 1]`; everything leaving this module is a
//! percentage produced by the configured [`NegativePolicy`].

pub mod scorer;
pub mod types;


pub use scorer::{SimilarityScorer, cosine_similarity};
pub use types::{DocumentScoring, NegativePolicy, SimilarityScore};
