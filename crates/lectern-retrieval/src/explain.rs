//! Human-facing match explanations.

use lectern_text::features::significant_words;

/// The question's significant words that literally occur in the chunk,
/// case-insensitively, in question order.
pub fn matched_terms(question: &str, chunk_text: &str) -> Vec<String> {
    let lower = chunk_text.to_lowercase();
    significant_words(question)
        .into_iter()
        .filter(|w| lower.contains(w.as_str()))
        .collect()
}
