//! Lexical feature extraction shared by the chunker and the ranker.

use std::collections::HashSet;

use crate::stopwords::is_stop_word;

/// Cap on extracted key phrases per text.
const MAX_KEY_PHRASES: usize = 15;
/// Cap on extracted concepts per text.
const MAX_CONCEPTS: usize = 10;
/// Character cap on the question stem.
const STEM_MAX_CHARS: usize = 50;
/// Interrogative words stripped (once) from the front of a question,
/// in alternation order.
const INTERROGATIVES: [&str; 17] = [
    "what", "how", "why", "when", "where", "who", "which", "can", "could", "would", "should",
    "is", "are", "does", "do", "did", "will",
];
/// Derivational suffixes that mark 5-letter tokens as concept-like.
const CONCEPT_SUFFIXES: [&str; 6] = ["tion", "sion", "ment", "ing", "ity", "ism"];

/// Lowercased tokens longer than 2 characters that are not stop words,
/// deduplicated in first-occurrence order.
pub fn significant_words(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut seen = HashSet::new();
    let mut words = Vec::new();
    for token in lower.split(|c: char| !(c.is_alphanumeric() || c == '_')) {
        if token.chars().count() > 2 && !is_stop_word(token) && seen.insert(token.to_string()) {
            words.push(token.to_string());
        }
    }
    words
}

/// Contiguous bigrams (> 5 chars) and stop-word-free trigrams (> 8 chars)
/// over the filtered token stream, deduplicated, earliest first, capped.
pub fn key_phrases(text: &str) -> Vec<String> {
    let words: Vec<String> = text
        .split_whitespace()
        .map(|w| {
            w.chars()
                .filter(|c| c.is_alphanumeric() || *c == '_')
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|w| w.chars().count() > 2 && !is_stop_word(w))
        .collect();

    let mut phrases = Vec::new();
    for pair in words.windows(2) {
        let phrase = format!("{} {}", pair[0], pair[1]);
        if phrase.chars().count() > 5 {
            phrases.push(phrase);
        }
    }
    for triple in words.windows(3) {
        let phrase = format!("{} {} {}", triple[0], triple[1], triple[2]);
        if phrase.chars().count() > 8 && !triple.iter().any(|w| is_stop_word(w)) {
            phrases.push(phrase);
        }
    }

    let mut seen = HashSet::new();
    phrases.retain(|p| seen.insert(p.clone()));
    phrases.truncate(MAX_KEY_PHRASES);
    phrases
}

/// The question with one leading interrogative stripped, lowercased and
/// capped at 50 characters, used for near-verbatim matching.
pub fn question_stem(question: &str) -> String {
    let lower = question.to_lowercase();
    let trimmed = lower.trim();
    let stripped = INTERROGATIVES
        .iter()
        .find_map(|lead| {
            let rest = trimmed.strip_prefix(lead)?;
            let rest = rest.strip_prefix(|c: char| c.is_whitespace())?;
            Some(rest.trim_start())
        })
        .unwrap_or(trimmed);
    let capped: String = stripped.chars().take(STEM_MAX_CHARS).collect();
    capped.trim().to_string()
}

/// Coarse concept tokens: longer than 4 characters, not stop words, and
/// either longer than 5 characters or carrying a derivational suffix.
pub fn concepts(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for raw in text.split_whitespace() {
        let word: String = raw
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '_')
            .collect::<String>()
            .to_lowercase();
        if word.chars().count() > 4 && !is_stop_word(&word) {
            let suffixed = word.chars().all(|c| c.is_ascii_alphabetic())
                && CONCEPT_SUFFIXES
                    .iter()
                    .any(|s| word.len() > s.len() && word.ends_with(s));
            if (word.chars().count() > 5 || suffixed) && seen.insert(word.clone()) {
                out.push(word);
            }
        }
    }
    out.truncate(MAX_CONCEPTS);
    out
}

/// All lexical features of one question, extracted once per retrieval.
#[derive(Debug, Clone)]
pub struct QueryFeatures {
    pub words: Vec<String>,
    pub phrases: Vec<String>,
    pub stem: String,
    pub concepts: Vec<String>,
}

impl QueryFeatures {
    pub fn extract(question: &str) -> Self {
        Self {
            words: significant_words(question),
            phrases: key_phrases(question),
            stem: question_stem(question),
            concepts: concepts(question),
        }
    }
}
