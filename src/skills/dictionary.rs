//! Curated technology vocabulary and surface patterns.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::types::SkillCategory;

const LANGUAGES: &[&str] = &[
    "python", "java", "javascript", "typescript", "c++", "c#", "php", "ruby", "go", "rust",
    "swift", "kotlin", "scala", "r", "matlab",
];

const FRAMEWORKS: &[&str] = &[
    "django", "flask", "fastapi", "spring", "laravel", "express", "asp.net", "rails",
    "react", "angular", "vue", "node.js", "tensorflow", "pytorch", "pandas", "numpy",
    "scikit-learn", "keras", "spark", "hadoop", "langchain", "chromadb", "transformers",
    "huggingface", "streamlit", "gradio",
];

const DATABASES: &[&str] = &[
    "sql", "nosql", "mongodb", "postgresql", "mysql", "oracle", "redis", "elasticsearch",
    "cassandra", "neo4j", "dynamodb", "pinecone", "weaviate", "qdrant",
];

const DEVOPS: &[&str] = &[
    "docker", "kubernetes", "aws", "azure", "gcp", "linux", "unix", "git", "jenkins",
    "gitlab", "jira", "confluence", "ansible", "terraform", "prometheus", "grafana",
];

const METHODOLOGIES: &[&str] = &["agile", "scrum", "kanban", "waterfall", "devops", "ci/cd"];

const AI_ML: &[&str] = &[
    "langchain", "chromadb", "transformers", "huggingface", "pinecone", "weaviate", "qdrant",
    "tensorflow", "pytorch", "scikit-learn", "keras",
];

const DICTIONARY: &[(SkillCategory, &[&str])] = &[
    (SkillCategory::Languages, LANGUAGES),
    (SkillCategory::Frameworks, FRAMEWORKS),
    (SkillCategory::Databases, DATABASES),
    (SkillCategory::Devops, DEVOPS),
    (SkillCategory::Methodologies, METHODOLOGIES),
    (SkillCategory::AiMl, AI_ML),
];

/// Token endings typical of technology names (`nextjs`, `numpy`, `mysql`, `openai`).
pub const TECH_SUFFIXES: &[&str] = &["js", "py", "net", "db", "sql", "api", "sdk", "ml", "ai"];

/// Token beginnings of technology families (`reactnative`, `nodejs`, `springboot`).
pub const TECH_PREFIXES: &[&str] = &[
    "react", "angular", "vue", "node", "django", "flask", "fast", "spring", "laravel",
];

/// Generic phrases whose fragments are never skills.
pub const EXCLUDED_PHRASES: &[&str] = &["опыт работы", "work experience"];

/// Markers that negate a following skill mention.
pub const NEGATION_MARKERS: &[&str] = &["no", "not", "without", "never", "без", "не", "нет"];

/// Prefixes of words that signal hands-on experience.
pub const EXPERIENCE_MARKERS: &[&str] = &[
    "experience", "worked", "working", "used", "using", "опыт", "работал", "использ",
    "применял",
];

static CATEGORY_INDEX: LazyLock<HashMap<&'static str, Vec<SkillCategory>>> = LazyLock::new(|| {
    let mut index: HashMap<&'static str, Vec<SkillCategory>> = HashMap::new();
    for (category, tokens) in DICTIONARY {
        for token in *tokens {
            index.entry(*token).or_default().push(*category);
        }
    }
    index
});

/// Dictionary categories containing `token`, in category order. Empty if unknown.
pub fn categories_of(token: &str) -> &'static [SkillCategory] {
    CATEGORY_INDEX
        .get(token)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

pub fn in_dictionary(token: &str) -> bool {
    CATEGORY_INDEX.contains_key(token)
}

/// Structural heuristic: known technology suffix or family prefix.
pub fn looks_like_technology(token: &str) -> bool {
    TECH_SUFFIXES.iter().any(|suffix| token.ends_with(suffix))
        || TECH_PREFIXES.iter().any(|prefix| token.starts_with(prefix))
}

/// Returns `true` when the token is a fragment of an excluded phrase.
pub fn in_excluded_phrase(token: &str) -> bool {
    EXCLUDED_PHRASES.iter().any(|phrase| phrase.contains(token))
}

pub fn is_negation(token: &str) -> bool {
    NEGATION_MARKERS.contains(&token)
}

pub fn is_experience_marker(token: &str) -> bool {
    EXPERIENCE_MARKERS
        .iter()
        .any(|marker| token.starts_with(marker))
}
