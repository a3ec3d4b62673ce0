use super::*;

#[test]
fn test_split_sentences_on_punctuation() {
    let sentences = split_sentences("We build APIs. You will test them! Ready?");
    assert_eq!(
        sentences,
        vec!["We build APIs.", "You will test them!", "Ready?"]
    );
}

#[test]
fn test_split_sentences_on_line_breaks() {
    let sentences = split_sentences("Опыт работы\n\nPython, Docker\r\nEducation");
    assert_eq!(sentences, vec!["Опыт работы", "Python, Docker", "Education"]);
}

#[test]
fn test_split_sentences_keeps_inner_dots() {
    let sentences = split_sentences("Built services with node.js and asp.net core");
    assert_eq!(sentences.len(), 1);
}

#[test]
fn test_split_sentences_empty() {
    assert!(split_sentences("").is_empty());
    assert!(split_sentences("  \n\n ").is_empty());
}

#[test]
fn test_clean_token() {
    assert_eq!(clean_token("(Docker),"), "Docker");
    assert_eq!(clean_token("c++,"), "c++");
    assert_eq!(clean_token("c#."), "c#");
    assert_eq!(clean_token("node.js."), "node.js");
    assert_eq!(clean_token("«python»"), "python");
    assert_eq!(clean_token("--"), "");
}

#[test]
fn test_tokenize_lowercases_and_drops_empty() {
    assert_eq!(
        tokenize("Опыт работы: разработка на Python, без Docker —"),
        vec!["опыт", "работы", "разработка", "на", "python", "без", "docker"]
    );
}

#[test]
fn test_is_numeric() {
    assert!(is_numeric("2024"));
    assert!(!is_numeric("neo4j"));
    assert!(!is_numeric(""));
}

#[test]
fn test_stop_words() {
    assert!(is_stop_word("the"));
    assert!(is_stop_word("для"));
    assert!(is_stop_word("опыт"));
    assert!(is_stop_word("using"));
    assert!(!is_stop_word("python"));
    assert!(!is_stop_word("docker"));
}
