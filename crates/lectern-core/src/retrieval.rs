//! Retrieval result models. Derived per call, never persisted.

use serde::{Deserialize, Serialize};

use crate::chunk::Chunk;
use crate::question::Topic;

/// A chunk with its raw relevance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredChunk {
    pub chunk: Chunk,
    /// Raw additive relevance score, always >= 0.
    pub score: f64,
}

/// One entry of the final result set, with explanation artifacts for
/// human-facing "why this match" rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedChunk {
    pub chunk: Chunk,
    /// Raw relevance score.
    pub score: f64,
    /// Score normalized against the best hit, 0..=100. The top hit of a
    /// non-empty result always reports 100.
    pub match_percent: u8,
    /// The question's significant words that literally occur in the chunk.
    pub matched_terms: Vec<String>,
    /// `"Subject: Chapter"` label of the owning source, empty when the
    /// caller supplied no metadata for it.
    pub source_label: String,
}

/// The ordered outcome of one retrieval call: at most `max_results` hits
/// by strictly descending score (pool order breaks ties), plus the
/// question's classified topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalResult {
    pub hits: Vec<RetrievedChunk>,
    pub topic: Topic,
}

impl RetrievalResult {
    /// Whether any material cleared the relevance threshold.
    pub fn is_grounded(&self) -> bool {
        !self.hits.is_empty()
    }

    /// Hit texts joined for use as grounding context in a prompt.
    pub fn context_text(&self) -> String {
        self.hits
            .iter()
            .map(|h| h.chunk.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
