use serde::{Deserialize, Serialize};

use super::defaults;

/// Chunker configuration. All lengths are characters unless named otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkingConfig {
    /// Hard ceiling on chunk size, in whitespace-split words.
    pub max_chunk_words: usize,
    /// Target chunk size in words; reaching it arms the new-topic check.
    pub target_chunk_words: usize,
    /// Sentences at or below this length are discarded as fragments.
    pub min_sentence_chars: usize,
    /// Flushed chunks at or below this length are discarded.
    pub min_chunk_chars: usize,
    /// Minimum document length before a summary chunk is considered.
    pub summary_min_text_chars: usize,
    /// Minimum number of concept chunks before a summary chunk is considered.
    pub summary_min_concepts: usize,
    /// How many leading paragraphs feed the summary chunk.
    pub summary_max_paragraphs: usize,
    /// Character cap on the summary body.
    pub summary_max_chars: usize,
    /// Summaries at or below this length are discarded.
    pub summary_min_chars: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_chunk_words: defaults::DEFAULT_MAX_CHUNK_WORDS,
            target_chunk_words: defaults::DEFAULT_TARGET_CHUNK_WORDS,
            min_sentence_chars: defaults::DEFAULT_MIN_SENTENCE_CHARS,
            min_chunk_chars: defaults::DEFAULT_MIN_CHUNK_CHARS,
            summary_min_text_chars: defaults::DEFAULT_SUMMARY_MIN_TEXT_CHARS,
            summary_min_concepts: defaults::DEFAULT_SUMMARY_MIN_CONCEPTS,
            summary_max_paragraphs: defaults::DEFAULT_SUMMARY_MAX_PARAGRAPHS,
            summary_max_chars: defaults::DEFAULT_SUMMARY_MAX_CHARS,
            summary_min_chars: defaults::DEFAULT_SUMMARY_MIN_CHARS,
        }
    }
}
