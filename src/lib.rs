//! Résumé / job-description matching library (used by the CLI and integration tests).
//!
//! # Pipeline
//!
//! - [`document`] turns PDF/DOCX bytes into plain text.
//! - [`skills`] extracts technology tokens lexically ([`SkillStrategy`] picks
//!   plain, categorized or context-aware matching).
//! - [`responsibilities`] keeps duty-describing sentences, deduplicated by
//!   embedding similarity.
//! - [`embedding`] provides the lazily-loaded sentence encoder
//!   ([`EmbeddingProvider`]).
//! - [`scoring`] turns cosine similarities into percentages.
//! - [`sections`] locates résumé sections and scores each against the job.
//! - [`analysis`] ties the stages together into an [`AnalysisResult`].
//!
//! Document errors abort an analysis. An unavailable model never does: the
//! semantic fields degrade and [`AnalysisResult::model_available`] is `false`.
//!
//! ```no_run
//! use std::sync::Arc;
//! use resume_fit::{Analyzer, AnalyzerOptions, EmbeddingProvider};
//!
//! let analyzer = Analyzer::new(Arc::new(EmbeddingProvider::stub()), AnalyzerOptions::default());
//! let result = analyzer.analyze("Python developer, Docker", "Experience: Python services");
//! println!("{}", result.overall_score);
//! ```

pub mod analysis;
pub mod config;
pub mod constants;
pub mod document;
pub mod embedding;
pub mod hashing;
pub mod responsibilities;
pub mod scoring;
pub mod sections;
pub mod skills;
pub mod text;

pub use analysis::{AnalysisError, AnalysisResult, Analyzer, AnalyzerOptions};
pub use config::{Config, ConfigError};
pub use document::{DocumentError, DocumentFormat, RawDocument, extract_text};
pub use embedding::{
    DevicePreference, EmbedderConfig, Embedding, EmbeddingError, EmbeddingProvider,
    ProviderStatus, SentenceEmbedder,
};
pub use hashing::{hash_embedding_key, hash_to_u64};
pub use responsibilities::{Responsibility, ResponsibilityExtractor};
pub use scoring::{
    DocumentScoring, NegativePolicy, SimilarityScore, SimilarityScorer, cosine_similarity,
};
pub use sections::{ResumeSection, SectionAnalyzer, SectionReport};
pub use skills::{SkillCategory, SkillExtractor, SkillSet, SkillStrategy};
