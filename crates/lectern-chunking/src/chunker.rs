//! Greedy sentence accumulation into bounded concept chunks, plus an
//! optional synthesized summary chunk.

use lectern_core::{Chunk, ChunkType, ChunkingConfig, Difficulty, SourceId};
use lectern_text::assess_difficulty;

use crate::splitter::split_sentences;

/// Discourse markers that open a new topic sentence (prefix match).
const TOPIC_MARKERS: [&str; 9] = [
    "now", "next", "furthermore", "additionally", "moreover", "however", "therefore", "thus",
    "hence",
];
/// Leading words that often reframe the material (prefix match).
const TOPIC_OPENERS: [&str; 7] = ["in", "for", "when", "where", "what", "how", "why"];
/// `<word> <linking verb>` openings read as definitions.
const LINKING_VERBS: [&str; 8] = ["is", "are", "was", "were", "has", "have", "does", "do"];

/// Splits one document into ordered, bounded, difficulty-labeled chunks.
pub struct Chunker {
    config: ChunkingConfig,
}

impl Chunker {
    pub fn new(config: ChunkingConfig) -> Self {
        Self { config }
    }

    /// Chunk one document. Empty or whitespace-only input yields no
    /// chunks; calling twice on identical input yields identical output.
    pub fn chunk(&self, source: &SourceId, text: &str) -> Vec<Chunk> {
        let sentences: Vec<&str> = split_sentences(text)
            .into_iter()
            .filter(|s| s.trim().chars().count() > self.config.min_sentence_chars)
            .collect();

        let mut chunks: Vec<Chunk> = Vec::new();
        let mut buffer: Vec<&str> = Vec::new();
        let mut buffered_words = 0usize;

        for (i, sentence) in sentences.iter().copied().enumerate() {
            let words = sentence.split_whitespace().count();

            if buffered_words + words > self.config.max_chunk_words && !buffer.is_empty() {
                self.flush(&mut chunks, &buffer, source);
                buffer.clear();
                buffer.push(sentence);
                buffered_words = words;
                continue;
            }

            buffer.push(sentence);
            buffered_words += words;

            // Past the target size, a new-topic opener in the next
            // sentence ends the chunk early.
            if buffered_words >= self.config.target_chunk_words
                && i + 1 < sentences.len()
                && opens_new_topic(sentences[i + 1])
            {
                self.flush(&mut chunks, &buffer, source);
                buffer.clear();
                buffered_words = 0;
            }
        }

        if !buffer.is_empty() {
            self.flush(&mut chunks, &buffer, source);
        }

        if text.chars().count() > self.config.summary_min_text_chars
            && chunks.len() >= self.config.summary_min_concepts
        {
            if let Some(summary) = self.summarize(text) {
                chunks.push(Chunk {
                    text: summary,
                    kind: ChunkType::Summary,
                    difficulty: Difficulty::Medium,
                    order: chunks.len(),
                    source: source.clone(),
                });
            }
        }

        chunks
    }

    fn flush(&self, chunks: &mut Vec<Chunk>, buffer: &[&str], source: &SourceId) {
        let text = buffer.join(" ").trim().to_string();
        if text.chars().count() > self.config.min_chunk_chars {
            chunks.push(Chunk {
                difficulty: assess_difficulty(&text),
                text,
                kind: ChunkType::Concept,
                order: chunks.len(),
                source: source.clone(),
            });
        }
    }

    /// Summary body: up to the first `summary_max_paragraphs` non-blank
    /// paragraphs, joined, capped, trimmed; discarded when too short.
    fn summarize(&self, text: &str) -> Option<String> {
        let paragraphs = split_paragraphs(text);
        if paragraphs.is_empty() {
            return None;
        }
        let joined = paragraphs
            .iter()
            .take(self.config.summary_max_paragraphs)
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
        let capped: String = joined.chars().take(self.config.summary_max_chars).collect();
        let trimmed = capped.trim();
        if trimmed.chars().count() > self.config.summary_min_chars {
            Some(format!("Summary: {trimmed}"))
        } else {
            None
        }
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new(ChunkingConfig::default())
    }
}

/// Paragraphs are separated by runs of two or more newlines; blank-only
/// paragraphs are dropped.
fn split_paragraphs(text: &str) -> Vec<&str> {
    let mut paragraphs = Vec::new();
    let mut start = 0usize;
    let bytes = text.as_bytes();
    let mut i = 0usize;
    while i < bytes.len() {
        if bytes[i] == b'\n' {
            let mut j = i + 1;
            while j < bytes.len() && bytes[j] == b'\n' {
                j += 1;
            }
            if j - i >= 2 {
                if !text[start..i].trim().is_empty() {
                    paragraphs.push(&text[start..i]);
                }
                start = j;
            }
            i = j;
        } else {
            i += 1;
        }
    }
    if start < text.len() && !text[start..].trim().is_empty() {
        paragraphs.push(&text[start..]);
    }
    paragraphs
}

/// New-topic heuristic over the sentence that would follow a flush.
fn opens_new_topic(next: &str) -> bool {
    let lower = next.trim().to_lowercase();

    if TOPIC_MARKERS
        .iter()
        .chain(TOPIC_OPENERS.iter())
        .any(|m| lower.starts_with(m))
    {
        return true;
    }

    // `<word> <linking verb …>` openings, e.g. "Osmosis is …".
    if let Some((head, rest)) = lower.split_once(' ') {
        if head.chars().count() >= 2
            && head.chars().all(|c| c.is_ascii_alphabetic())
            && LINKING_VERBS.iter().any(|v| rest.starts_with(v))
        {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn src() -> SourceId {
        SourceId::new("lesson-1")
    }

    fn words(n: usize, word: &str) -> String {
        vec![word; n].join(" ")
    }

    #[test]
    fn empty_and_whitespace_input_yield_nothing() {
        let chunker = Chunker::default();
        assert!(chunker.chunk(&src(), "").is_empty());
        assert!(chunker.chunk(&src(), "   \n\n  ").is_empty());
    }

    #[test]
    fn short_fragments_are_discarded() {
        let chunker = Chunker::default();
        assert!(chunker.chunk(&src(), "A. B. C.").is_empty());
    }

    #[test]
    fn one_long_sentence_becomes_one_chunk() {
        let chunker = Chunker::default();
        let text = format!("The river {} flows to the sea.", words(20, "slowly"));
        let chunks = chunker.chunk(&src(), &text);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].kind, ChunkType::Concept);
        assert_eq!(chunks[0].order, 0);
        assert_eq!(chunks[0].text, text);
    }

    #[test]
    fn oversize_buffers_flush_before_the_next_sentence() {
        let chunker = Chunker::default();
        // Each sentence is ~160 words, so two never fit in one 300-word chunk.
        let sentence = format!("Water {} keeps moving onward.", words(155, "gently"));
        let text = format!("{sentence} {sentence} {sentence}");
        let chunks = chunker.chunk(&src(), &text);
        let concepts: Vec<_> = chunks.iter().filter(|c| c.kind == ChunkType::Concept).collect();
        assert_eq!(concepts.len(), 3);
        for c in &concepts {
            assert!(c.text.split_whitespace().count() <= 300);
        }
    }

    #[test]
    fn new_topic_sentence_ends_a_chunk_early() {
        let chunker = Chunker::default();
        let filler = format!("The valley {} stretched on.", words(150, "quietly"));
        let text = format!("{filler} However, the mountain was different. It stood apart from the rest.");
        let chunks = chunker.chunk(&src(), &text);
        assert!(chunks.len() >= 2);
        assert!(chunks[0].text.starts_with("The valley"));
        assert!(chunks[1].text.starts_with("However"));
    }

    #[test]
    fn orders_are_dense_and_increasing() {
        let chunker = Chunker::default();
        let sentence = format!("Plants {} turn light into sugar.", words(150, "busily"));
        let text = format!("{sentence} {sentence} {sentence} {sentence}");
        let chunks = chunker.chunk(&src(), &text);
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.order, i);
        }
    }

    #[test]
    fn summary_chunk_is_added_last_for_substantial_documents() {
        let chunker = Chunker::default();
        let para = format!("Energy {} moves through the food chain.", words(150, "steadily"));
        let text = format!("{para}\n\n{para}\n\n{para}\n\n{para}");
        let chunks = chunker.chunk(&src(), &text);

        let summary: Vec<_> = chunks.iter().filter(|c| c.kind == ChunkType::Summary).collect();
        assert_eq!(summary.len(), 1);
        let last = chunks.last().unwrap();
        assert_eq!(last.kind, ChunkType::Summary);
        assert_eq!(last.difficulty, Difficulty::Medium);
        assert!(last.text.starts_with("Summary: "));
        // "Summary: " prefix plus a 500-char cap on the body.
        assert!(last.text.chars().count() <= 509);
    }

    #[test]
    fn small_documents_get_no_summary() {
        let chunker = Chunker::default();
        let text = "Light enters the leaf through the surface. Water arrives from the roots below.";
        let chunks = chunker.chunk(&src(), text);
        assert!(chunks.iter().all(|c| c.kind == ChunkType::Concept));
    }

    #[test]
    fn chunking_is_idempotent() {
        let chunker = Chunker::default();
        let sentence = format!("Sound {} travels through the air.", words(140, "loudly"));
        let text = format!("{sentence} {sentence} {sentence}");
        assert_eq!(chunker.chunk(&src(), &text), chunker.chunk(&src(), &text));
    }

    #[test]
    fn paragraph_splitting_skips_blank_runs() {
        let paragraphs = split_paragraphs("first\n\nsecond\n\n\n\nthird\n\n   \n\n");
        assert_eq!(paragraphs, vec!["first", "second", "third"]);
    }

    #[test]
    fn new_topic_detects_markers_openers_and_definitions() {
        assert!(opens_new_topic("However, things changed."));
        assert!(opens_new_topic("Next we consider heat."));
        assert!(opens_new_topic("Why does this happen?"));
        assert!(opens_new_topic("Osmosis is the movement of water."));
        assert!(!opens_new_topic("Continuing the same idea here."));
    }
}
