//! Chunks: the atomic unit of retrieval.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of one ingested document/session.
///
/// Callers supply any stable identifier; [`SourceId::random`] is a
/// convenience for ingestion seams that have none yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(String);

impl SourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// A fresh UUID v4 identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SourceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SourceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Whether a chunk carries lesson material or a synthesized overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkType {
    Concept,
    Summary,
}

/// Heuristic difficulty label assigned at chunking time and used as a
/// ranking preference at retrieval time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}

/// A bounded, ordered segment of one source document.
///
/// Immutable once created: a source's chunks are only ever replaced
/// wholesale when the document is re-indexed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// Segment text, trimmed.
    pub text: String,
    /// Concept segment or synthesized summary.
    pub kind: ChunkType,
    /// Difficulty label assigned when the chunk was created.
    pub difficulty: Difficulty,
    /// Dense 0-based position within the source, in emission order.
    pub order: usize,
    /// The source document this chunk belongs to.
    pub source: SourceId,
}

/// Every chunk of one source plus the fingerprint of the text they were
/// derived from: the unit of atomic replacement handed to a
/// [`crate::traits::ChunkStore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkSet {
    pub source: SourceId,
    /// blake3 hash of the sanitized source text.
    pub fingerprint: String,
    pub chunks: Vec<Chunk>,
}

impl ChunkSet {
    /// Fingerprint for a piece of source text.
    pub fn fingerprint_of(text: &str) -> String {
        blake3::hash(text.as_bytes()).to_hex().to_string()
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}
