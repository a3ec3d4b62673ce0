//! Property tests for extraction and scoring invariants.

mod common;

use proptest::prelude::*;

use common::stub_analyzer;
use resume_fit::{
    AnalyzerOptions, EmbeddingProvider, ResponsibilityExtractor, SkillExtractor, SkillStrategy,
    cosine_similarity,
};

const VOCAB: &[&str] = &[
    "python", "Docker", "kubernetes", "react", "reactnative", "fastapi", "PostgreSQL", "c++",
    "node.js", "без", "without", "not", "опыт", "experience", "used", "разработка", "develop",
    "maintain", "testing", "управление", "команда", "team", "the", "and", "2024", "work",
    "работы", "data", "pipelines", "services", "backend", "ml", "scikit-learn", "ci/cd",
];

const SEPARATORS: &[&str] = &[" ", " ", " ", ", ", ". ", "\n", "! "];

fn strategy() -> impl Strategy<Value = SkillStrategy> {
    prop::sample::select(vec![
        SkillStrategy::Plain,
        SkillStrategy::Categorized,
        SkillStrategy::ContextAware,
    ])
}

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (prop::sample::select(VOCAB), prop::sample::select(SEPARATORS)),
        0..40,
    )
    .prop_map(|parts| {
        parts
            .into_iter()
            .map(|(word, sep)| format!("{word}{sep}"))
            .collect()
    })
}

proptest! {
    #[test]
    fn test_extract_skills_idempotent(text in text(), strategy in strategy()) {
        let extractor = SkillExtractor::new(strategy);
        prop_assert_eq!(extractor.extract(&text), extractor.extract(&text));
    }

    #[test]
    fn test_missing_is_subset_of_job(job in text(), resume in text(), strategy in strategy()) {
        let analyzer = stub_analyzer(AnalyzerOptions {
            skill_strategy: strategy,
            ..Default::default()
        });

        let job_skills = analyzer.extract_skills(&job);
        let missing = analyzer.missing_skills(&job, &resume);
        prop_assert!(missing.is_subset_of(&job_skills));
    }

    #[test]
    fn test_resume_with_all_skills_misses_none(job in text(), strategy in strategy()) {
        let analyzer = stub_analyzer(AnalyzerOptions {
            skill_strategy: strategy,
            ..Default::default()
        });

        prop_assert!(analyzer.missing_skills(&job, &job).is_empty());

        if strategy != SkillStrategy::ContextAware {
            let listed = analyzer
                .extract_skills(&job)
                .tokens()
                .into_iter()
                .collect::<Vec<_>>()
                .join(" ");
            prop_assert!(analyzer.missing_skills(&job, &listed).is_empty());
        }
    }

    #[test]
    fn test_cosine_self_similarity(values in prop::collection::vec(-100.0f32..100.0, 1..64)) {
        prop_assume!(values.iter().any(|v| v.abs() > 1e-3));
        let cos = cosine_similarity(&values, &values);
        prop_assert!((cos - 1.0).abs() < 1e-4, "cos = {}", cos);
    }

    #[test]
    fn test_cosine_bounded(
        pairs in prop::collection::vec((-10.0f32..10.0, -10.0f32..10.0), 1..64)
    ) {
        let (a, b): (Vec<f32>, Vec<f32>) = pairs.into_iter().unzip();
        let cos = cosine_similarity(&a, &b);
        prop_assert!((-1.0001..=1.0001).contains(&cos));
    }

    #[test]
    fn test_dedup_invariant(text in text()) {
        let provider = EmbeddingProvider::stub();
        let extractor = ResponsibilityExtractor::default();
        let found = extractor.extract(&text, &provider).unwrap();

        for (i, a) in found.iter().enumerate() {
            for b in &found[i + 1..] {
                let cos = cosine_similarity(a.embedding.as_slice(), b.embedding.as_slice());
                prop_assert!(cos <= extractor.dedup_threshold());
            }
        }
    }

    #[test]
    fn test_self_similarity_is_100(text in text()) {
        prop_assume!(!text.trim().is_empty());
        let analyzer = stub_analyzer(AnalyzerOptions::default());
        let score = analyzer.calculate_similarity(&text, &text);
        prop_assert!((score - 100.0).abs() < 1e-2, "score = {}", score);
    }
}
