use std::collections::BTreeMap;

use serde::Serialize;

use crate::constants::{DEFAULT_DEDUP_THRESHOLD, DEFAULT_EXPERIENCE_THRESHOLD, DEFAULT_MAX_SENTENCES};
use crate::scoring::{DocumentScoring, NegativePolicy, SimilarityScore};
use crate::sections::{ResumeSection, SectionReport};
use crate::skills::{SkillSet, SkillStrategy};

/// Tunables for an [`Analyzer`](super::Analyzer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyzerOptions {
    pub skill_strategy: SkillStrategy,
    pub negative_policy: NegativePolicy,
    pub document_scoring: DocumentScoring,
    /// Cosine above which two responsibilities are duplicates.
    pub dedup_threshold: f32,
    /// Best-match cosine below which a job responsibility is missing.
    pub experience_threshold: f32,
    pub max_sentences: usize,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            skill_strategy: SkillStrategy::default(),
            negative_policy: NegativePolicy::default(),
            document_scoring: DocumentScoring::default(),
            dedup_threshold: DEFAULT_DEDUP_THRESHOLD,
            experience_threshold: DEFAULT_EXPERIENCE_THRESHOLD,
            max_sentences: DEFAULT_MAX_SENTENCES,
        }
    }
}

/// Everything known about one (job description, résumé) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Document-level similarity of the job description against the résumé.
    pub overall_score: SimilarityScore,
    /// Job skills absent from the résumé, by category.
    pub missing_skills: SkillSet,
    /// Job responsibilities with no close résumé counterpart (lower-cased).
    pub missing_experience: Vec<String>,
    pub sections: BTreeMap<ResumeSection, SectionReport>,
    /// `false` when the embedding model could not be loaded and every
    /// semantic field is degraded.
    pub model_available: bool,
}

impl AnalysisResult {
    /// `true` if any skill or experience is missing.
    pub fn has_gaps(&self) -> bool {
        !self.missing_skills.is_empty() || !self.missing_experience.is_empty()
    }
}
