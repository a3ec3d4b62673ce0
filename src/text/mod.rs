//! Sentence splitting and token cleanup shared by the extractors.

mod stopwords;

#[cfg(test)]
mod tests;

pub use stopwords::is_stop_word;

use std::sync::LazyLock;

use regex::Regex;

/// Sentence boundary: terminal punctuation followed by whitespace, or a line break.
static SENTENCE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[.!?…]+[\s]+|[\r\n]+").expect("sentence boundary pattern is valid")
});

/// Splits text into trimmed, non-empty sentences in order of appearance.
///
/// Terminal punctuation stays attached to its sentence. Line breaks also end
/// a sentence, since extracted documents rarely punctuate list items.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        let chunk = &text[start..boundary.start()];
        let punctuation = boundary.as_str().trim_end();
        push_sentence(&mut sentences, chunk, punctuation);
        start = boundary.end();
    }
    push_sentence(&mut sentences, &text[start..], "");

    sentences
}

fn push_sentence(sentences: &mut Vec<String>, chunk: &str, punctuation: &str) {
    let trimmed = chunk.trim();
    if trimmed.is_empty() {
        return;
    }
    let mut sentence = trimmed.to_string();
    sentence.push_str(punctuation);
    sentences.push(sentence);
}

/// Strips surrounding punctuation from a whitespace-delimited token.
///
/// Inner punctuation survives (`node.js`, `ci/cd`, `scikit-learn`), as do
/// trailing `+` and `#` (`c++`, `c#`).
pub fn clean_token(word: &str) -> &str {
    word.trim_start_matches(|c: char| !c.is_alphanumeric())
        .trim_end_matches(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
}

/// Lower-cases and splits into cleaned, non-empty tokens.
pub fn tokenize(sentence: &str) -> Vec<String> {
    sentence
        .split_whitespace()
        .map(|word| clean_token(word).to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Returns `true` when every character is a digit.
pub fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_numeric())
}
