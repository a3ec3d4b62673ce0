use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::config::ConfigError;

/// Dictionary category a skill token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Languages,
    Frameworks,
    Databases,
    Devops,
    Methodologies,
    AiMl,
    /// Accepted by a structural heuristic but absent from every dictionary.
    Other,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 7] = [
        SkillCategory::Languages,
        SkillCategory::Frameworks,
        SkillCategory::Databases,
        SkillCategory::Devops,
        SkillCategory::Methodologies,
        SkillCategory::AiMl,
        SkillCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Languages => "languages",
            SkillCategory::Frameworks => "frameworks",
            SkillCategory::Databases => "databases",
            SkillCategory::Devops => "devops",
            SkillCategory::Methodologies => "methodologies",
            SkillCategory::AiMl => "ai_ml",
            SkillCategory::Other => "other",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How skill tokens are accepted and grouped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillStrategy {
    /// Dictionary or structural match; every token lands in [`SkillCategory::Other`].
    Plain,
    /// Same acceptance as `Plain`, grouped by dictionary membership.
    Categorized,
    /// `Categorized`, plus negation and experience-language filtering.
    ///
    /// Fewer false positives, but skills mentioned without experience
    /// language nearby are dropped.
    #[default]
    ContextAware,
}

impl SkillStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillStrategy::Plain => "plain",
            SkillStrategy::Categorized => "categorized",
            SkillStrategy::ContextAware => "context-aware",
        }
    }
}

impl fmt::Display for SkillStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "plain" => Ok(SkillStrategy::Plain),
            "categorized" => Ok(SkillStrategy::Categorized),
            "context-aware" | "contextaware" => Ok(SkillStrategy::ContextAware),
            _ => Err(ConfigError::InvalidChoice {
                value: s.to_string(),
                expected: "plain, categorized, context-aware",
            }),
        }
    }
}

/// Lower-cased skill tokens grouped by category.
///
/// A token appears at most once per category; it may appear in several
/// categories (`pytorch` is both a framework and an AI/ML tool). Categories
/// are never present with an empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillSet {
    categories: BTreeMap<SkillCategory, BTreeSet<String>>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the token was not already in that category.
    pub fn insert(&mut self, category: SkillCategory, token: impl Into<String>) -> bool {
        self.categories
            .entry(category)
            .or_default()
            .insert(token.into())
    }

    /// Returns `true` if the token is present in any category.
    pub fn contains(&self, token: &str) -> bool {
        self.categories.values().any(|tokens| tokens.contains(token))
    }

    pub fn category(&self, category: SkillCategory) -> Option<&BTreeSet<String>> {
        self.categories.get(&category)
    }

    pub fn categories(&self) -> impl Iterator<Item = (SkillCategory, &BTreeSet<String>)> {
        self.categories.iter().map(|(category, tokens)| (*category, tokens))
    }

    /// Unique tokens across all categories, sorted.
    pub fn tokens(&self) -> BTreeSet<&str> {
        self.categories
            .values()
            .flatten()
            .map(String::as_str)
            .collect()
    }

    /// Number of unique tokens across all categories.
    pub fn len(&self) -> usize {
        self.tokens().len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Tokens of `self` that appear in no category of `other`, keeping `self`'s grouping.
    pub fn missing_from(&self, other: &SkillSet) -> SkillSet {
        let mut missing = SkillSet::new();
        for (category, tokens) in self.categories() {
            for token in tokens.iter().filter(|token| !other.contains(token)) {
                missing.insert(category, token.clone());
            }
        }
        missing
    }

    /// Returns `true` if every token of `self` is present somewhere in `other`.
    pub fn is_subset_of(&self, other: &SkillSet) -> bool {
        self.tokens().into_iter().all(|token| other.contains(token))
    }
}
