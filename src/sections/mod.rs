//! Résumé section location and per-section relevance.
//!
//! A section is the remainder of the line starting at its earliest anchor
//! keyword. Sections without an anchor are absent from the result rather
//! than scored zero.


use std::collections::BTreeMap;
use std::fmt;

use regex::{Regex, RegexBuilder};
use serde::Serialize;
use tracing::debug;

use crate::scoring::{SimilarityScore, SimilarityScorer};

/// The four canonical résumé sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeSection {
    Experience,
    Education,
    Skills,
    Projects,
}

impl ResumeSection {
    pub const ALL: [ResumeSection; 4] = [
        ResumeSection::Experience,
        ResumeSection::Education,
        ResumeSection::Skills,
        ResumeSection::Projects,
    ];

    /// Heading keywords, Russian and English.
    pub fn anchors(&self) -> &'static [&'static str] {
        match self {
            ResumeSection::Experience => &["опыт работы", "experience", "work experience"],
            ResumeSection::Education => &["образование", "education"],
            ResumeSection::Skills => &["навыки", "skills", "технические навыки"],
            ResumeSection::Projects => &["проекты", "projects"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResumeSection::Experience => "experience",
            ResumeSection::Education => "education",
            ResumeSection::Skills => "skills",
            ResumeSection::Projects => "projects",
        }
    }
}

impl fmt::Display for ResumeSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A located section and its relevance to the job description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionReport {
    pub text: String,
    pub relevance: SimilarityScore,
}

/// Finds sections by anchor keyword (case-insensitive).
#[derive(Debug, Clone)]
pub struct SectionAnalyzer {
    patterns: Vec<(ResumeSection, Regex)>,
}

impl Default for SectionAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionAnalyzer {
    pub fn new() -> Self {
        let patterns = ResumeSection::ALL
            .iter()
            .filter_map(|section| anchor_pattern(section.anchors()).map(|re| (*section, re)))
            .collect();

        Self { patterns }
    }

    /// Section text keyed by section, for every section with an anchor.
    ///
    /// The text runs from the earliest anchor occurrence to the end of its
    /// line and keeps the résumé's original casing.
    pub fn locate(&self, resume: &str) -> BTreeMap<ResumeSection, String> {
        let mut located = BTreeMap::new();

        for (section, pattern) in &self.patterns {
            let Some(found) = pattern.find(resume) else {
                continue;
            };

            let rest = &resume[found.start()..];
            let line = rest.split('\n').next().unwrap_or(rest).trim_end();
            located.insert(*section, line.to_string());
        }

        debug!(sections = located.len(), "Résumé sections located");
        located
    }

    /// Locates sections and scores each against the whole job description.
    pub fn analyze(
        &self,
        job_description: &str,
        resume: &str,
        scorer: &SimilarityScorer,
    ) -> BTreeMap<ResumeSection, SectionReport> {
        self.locate(resume)
            .into_iter()
            .map(|(section, text)| {
                let relevance = scorer.text_similarity(&text, job_description);
                (section, SectionReport { text, relevance })
            })
            .collect()
    }
}

/// One alternation per section; longer anchors first so that a longer
/// heading wins over its own prefix at the same position.
fn anchor_pattern(anchors: &[&str]) -> Option<Regex> {
    let mut sorted: Vec<&str> = anchors.to_vec();
    sorted.sort_by_key(|anchor| std::cmp::Reverse(anchor.chars().count()));

    let alternation = sorted
        .iter()
        .map(|anchor| regex::escape(anchor))
        .collect::<Vec<_>>()
        .join("|");

    RegexBuilder::new(&alternation)
        .case_insensitive(true)
        .build()
        .ok()
}
