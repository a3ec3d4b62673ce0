use tracing::debug;

use crate::responsibilities::contains_responsibility_keyword;
use crate::text::{is_numeric, is_stop_word, split_sentences, tokenize};

use super::dictionary;
use super::types::{SkillCategory, SkillSet, SkillStrategy};

/// Tokens considered on each side of a skill for context checks.
pub const CONTEXT_WINDOW: usize = 3;

/// Minimum token length (in characters) for a skill candidate.
pub const MIN_TOKEN_CHARS: usize = 3;

/// Lexical skill extractor. Pure and deterministic for a given strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkillExtractor {
    strategy: SkillStrategy,
}

impl SkillExtractor {
    pub fn new(strategy: SkillStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> SkillStrategy {
        self.strategy
    }

    /// Extracts skill tokens from free text.
    pub fn extract(&self, text: &str) -> SkillSet {
        let mut skills = SkillSet::new();

        for sentence in split_sentences(&text.to_lowercase()) {
            let tokens = tokenize(&sentence);

            for (idx, token) in tokens.iter().enumerate() {
                if !is_candidate(token) || !is_skill(token) {
                    continue;
                }

                if self.strategy == SkillStrategy::ContextAware && !context_supports(&tokens, idx)
                {
                    debug!(token = %token, "Skill dropped by context filter");
                    continue;
                }

                self.insert(&mut skills, token);
            }
        }

        debug!(
            strategy = %self.strategy,
            text_len = text.len(),
            skill_count = skills.len(),
            "Skills extracted"
        );

        skills
    }

    fn insert(&self, skills: &mut SkillSet, token: &str) {
        if self.strategy == SkillStrategy::Plain {
            skills.insert(SkillCategory::Other, token);
            return;
        }

        let categories = dictionary::categories_of(token);
        if categories.is_empty() {
            skills.insert(SkillCategory::Other, token);
        } else {
            for category in categories {
                skills.insert(*category, token);
            }
        }
    }
}

/// Cheap rejections applied before any skill test.
fn is_candidate(token: &str) -> bool {
    token.chars().count() >= MIN_TOKEN_CHARS
        && !is_numeric(token)
        && !is_stop_word(token)
        && !dictionary::in_excluded_phrase(token)
}

fn is_skill(token: &str) -> bool {
    dictionary::in_dictionary(token) || dictionary::looks_like_technology(token)
}

/// Negation scopes forward: a marker among the preceding tokens rejects the
/// skill. Support may come from either side.
fn context_supports(tokens: &[String], idx: usize) -> bool {
    let before = &tokens[idx.saturating_sub(CONTEXT_WINDOW)..idx];
    if before.iter().any(|t| dictionary::is_negation(t)) {
        return false;
    }

    let end = (idx + CONTEXT_WINDOW + 1).min(tokens.len());
    let after = &tokens[idx + 1..end];

    before.iter().chain(after).any(|t| {
        dictionary::is_experience_marker(t) || contains_responsibility_keyword(t)
    })
}
