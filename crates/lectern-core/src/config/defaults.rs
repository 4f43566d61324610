//! Default values for every config field.

// --- Chunking ---

/// Hard ceiling on chunk size, in whitespace-split words.
pub const DEFAULT_MAX_CHUNK_WORDS: usize = 300;
/// Target chunk size; a new-topic sentence may end a chunk past this.
pub const DEFAULT_TARGET_CHUNK_WORDS: usize = 150;
/// Sentences at or below this many characters are discarded as fragments.
pub const DEFAULT_MIN_SENTENCE_CHARS: usize = 10;
/// Flushed chunks at or below this many characters are discarded.
pub const DEFAULT_MIN_CHUNK_CHARS: usize = 20;
/// Minimum document length before a summary chunk is considered.
pub const DEFAULT_SUMMARY_MIN_TEXT_CHARS: usize = 200;
/// Minimum number of concept chunks before a summary chunk is considered.
pub const DEFAULT_SUMMARY_MIN_CONCEPTS: usize = 3;
/// How many leading paragraphs feed the summary chunk.
pub const DEFAULT_SUMMARY_MAX_PARAGRAPHS: usize = 3;
/// Character cap on the summary body.
pub const DEFAULT_SUMMARY_MAX_CHARS: usize = 500;
/// Summaries at or below this many characters are discarded.
pub const DEFAULT_SUMMARY_MIN_CHARS: usize = 50;

// --- Retrieval selection ---

/// Absolute floor of the adaptive relevance threshold.
pub const DEFAULT_THRESHOLD_FLOOR: f64 = 0.5;
/// Fraction of the pool's mean score used as the adaptive threshold.
pub const DEFAULT_THRESHOLD_RATIO: f64 = 0.3;
/// Hard cap on the number of hits per retrieval.
pub const DEFAULT_MAX_RESULTS: usize = 10;
/// Below this many accepted hits the per-source cap is not enforced.
pub const DEFAULT_GUARANTEED_RESULTS: usize = 5;
/// Maximum hits contributed by one source once the guarantee is met.
pub const DEFAULT_MAX_PER_SOURCE: usize = 4;
