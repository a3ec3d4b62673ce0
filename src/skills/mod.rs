//! Lexical skill extraction.
//!
//! Tokens are accepted by exact dictionary match or by a structural heuristic
//! (technology suffix or family prefix). The [`SkillStrategy`] picks whether
//! results are grouped by category and whether negation/experience context
//! is required.

pub mod dictionary;
mod extractor;
mod types;


pub use extractor::{CONTEXT_WINDOW, MIN_TOKEN_CHARS, SkillExtractor};
pub use types::{SkillCategory, SkillSet, SkillStrategy};
