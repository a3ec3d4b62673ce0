//! The matching pipeline: skills, similarity, experience and sections.
//!
//! One [`Analyzer`] owns a shared [`EmbeddingProvider`] and may be reused
//! across many pairs. Semantic stages degrade when the model is unavailable
//! (score `0.0`, empty experience list); lexical stages always run.

mod error;
mod types;


pub use error::AnalysisError;
pub use types::{AnalysisResult, AnalyzerOptions};

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::{Config, ConfigError};
use crate::document::{RawDocument, extract_text};
use crate::embedding::{EmbeddingError, EmbeddingProvider};
use crate::responsibilities::{Responsibility, ResponsibilityExtractor};
use crate::scoring::{SimilarityScore, SimilarityScorer, cosine_similarity};
use crate::sections::{ResumeSection, SectionAnalyzer, SectionReport};
use crate::skills::{SkillExtractor, SkillSet};

/// Résumé vs job-description matcher.
#[derive(Debug)]
pub struct Analyzer {
    provider: Arc<EmbeddingProvider>,
    skills: SkillExtractor,
    responsibilities: ResponsibilityExtractor,
    scorer: SimilarityScorer,
    sections: SectionAnalyzer,
    options: AnalyzerOptions,
}

impl Analyzer {
    pub fn new(provider: Arc<EmbeddingProvider>, options: AnalyzerOptions) -> Self {
        let scorer = SimilarityScorer::new(Arc::clone(&provider))
            .with_policy(options.negative_policy)
            .with_mode(options.document_scoring)
            .with_max_sentences(options.max_sentences);

        Self {
            provider,
            skills: SkillExtractor::new(options.skill_strategy),
            responsibilities: ResponsibilityExtractor::new(
                options.dedup_threshold,
                options.max_sentences,
            ),
            scorer,
            sections: SectionAnalyzer::new(),
            options,
        }
    }

    /// Builds an analyzer (and a lazily-loaded provider) from configuration.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let provider = Arc::new(EmbeddingProvider::new(config.embedder_config()));
        Ok(Self::new(provider, config.analyzer_options()))
    }

    pub fn provider(&self) -> &Arc<EmbeddingProvider> {
        &self.provider
    }

    pub fn options(&self) -> &AnalyzerOptions {
        &self.options
    }

    pub fn extract_skills(&self, text: &str) -> SkillSet {
        self.skills.extract(text)
    }

    /// Job skills not present in the résumé (lexical; needs no model).
    pub fn missing_skills(&self, job_description: &str, resume: &str) -> SkillSet {
        let job = self.extract_skills(job_description);
        let candidate = self.extract_skills(resume);
        job.missing_from(&candidate)
    }

    pub fn extract_responsibilities(
        &self,
        text: &str,
    ) -> Result<Vec<Responsibility>, EmbeddingError> {
        self.responsibilities.extract(text, &self.provider)
    }

    /// Overall similarity as a percentage; `0.0` when the model is unavailable.
    pub fn calculate_similarity(&self, job_description: &str, resume: &str) -> f32 {
        self.similarity_score(job_description, resume)
            .value_or_zero()
    }

    /// Overall similarity, keeping the reason when no score was possible.
    pub fn similarity_score(&self, job_description: &str, resume: &str) -> SimilarityScore {
        let score = self.scorer.document_similarity(job_description, resume);
        if let SimilarityScore::Unavailable { ref reason } = score {
            warn!(reason = %reason, "Similarity unavailable, reporting 0");
        }
        score
    }

    /// Job responsibilities whose best résumé match is below the experience
    /// threshold. Empty when the model is unavailable.
    pub fn missing_experience(&self, job_description: &str, resume: &str) -> Vec<String> {
        let job = match self.extract_responsibilities(job_description) {
            Ok(found) => found,
            Err(e) => {
                warn!(error = %e, "Skipping experience analysis");
                return Vec::new();
            }
        };

        if job.is_empty() {
            return Vec::new();
        }

        let candidate = match self.extract_responsibilities(resume) {
            Ok(found) => found,
            Err(e) => {
                warn!(error = %e, "Skipping experience analysis");
                return Vec::new();
            }
        };

        let missing: Vec<String> = job
            .into_iter()
            .filter(|duty| {
                let best = candidate
                    .iter()
                    .map(|held| {
                        cosine_similarity(duty.embedding.as_slice(), held.embedding.as_slice())
                    })
                    .fold(f32::NEG_INFINITY, f32::max);
                best < self.options.experience_threshold
            })
            .map(|duty| duty.text)
            .collect();

        debug!(
            missing = missing.len(),
            resume_responsibilities = candidate.len(),
            "Experience analysis complete"
        );
        missing
    }

    /// Per-section text and relevance to the job description.
    pub fn detailed_analysis(
        &self,
        job_description: &str,
        resume: &str,
    ) -> BTreeMap<ResumeSection, SectionReport> {
        self.sections.analyze(job_description, resume, &self.scorer)
    }

    /// Runs every stage on two plain texts.
    pub fn analyze(&self, job_description: &str, resume: &str) -> AnalysisResult {
        info!(
            job_len = job_description.len(),
            resume_len = resume.len(),
            strategy = %self.options.skill_strategy,
            "Analyzing résumé"
        );

        let model_available = self.provider.ready();
        let missing_skills = self.missing_skills(job_description, resume);
        let overall_score = self.similarity_score(job_description, resume);
        let missing_experience = self.missing_experience(job_description, resume);
        let sections = self.detailed_analysis(job_description, resume);

        let result = AnalysisResult {
            overall_score,
            missing_skills,
            missing_experience,
            sections,
            model_available,
        };

        info!(
            score = %result.overall_score,
            missing_skills = result.missing_skills.len(),
            missing_experience = result.missing_experience.len(),
            sections = result.sections.len(),
            "Analysis complete"
        );
        result
    }

    /// Extracts the résumé's text, then analyzes it.
    pub fn analyze_document(
        &self,
        job_description: &str,
        resume: RawDocument,
    ) -> Result<AnalysisResult, AnalysisError> {
        let text = extract_text(resume)?;
        Ok(self.analyze(job_description, &text))
    }
}
