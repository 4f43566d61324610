//! Ingestion pipeline: sanitize → fingerprint → chunk → replace atomically.

use lectern_core::{ChunkSet, ChunkStore, LecternResult, SourceId};
use tracing::{debug, info};

use crate::chunker::Chunker;
use crate::sanitize::sanitize_text;

/// Outcome of indexing one document.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexOutcome {
    pub chunks_created: usize,
    /// Fingerprint of the sanitized text the chunks were derived from.
    pub fingerprint: String,
    /// True when the store already held this exact text for the source
    /// and the existing chunk set was kept.
    pub unchanged: bool,
}

/// Chunks documents and persists them through a [`ChunkStore`], replacing
/// any previous chunk set for the source in one atomic step.
pub struct Indexer<'a> {
    chunker: Chunker,
    store: &'a dyn ChunkStore,
}

impl<'a> Indexer<'a> {
    pub fn new(chunker: Chunker, store: &'a dyn ChunkStore) -> Self {
        Self { chunker, store }
    }

    /// Index one document for `source`. Re-indexing identical text is a
    /// no-op: the stored fingerprint is compared first.
    pub fn index_document(&self, source: &SourceId, text: &str) -> LecternResult<IndexOutcome> {
        let sanitized = sanitize_text(text);
        let fingerprint = ChunkSet::fingerprint_of(&sanitized);

        if self.store.fingerprint(source)?.as_deref() == Some(fingerprint.as_str()) {
            debug!(source = %source, "text unchanged, keeping existing chunks");
            let existing = self.store.pool(std::slice::from_ref(source))?.len();
            return Ok(IndexOutcome {
                chunks_created: existing,
                fingerprint,
                unchanged: true,
            });
        }

        let chunks = self.chunker.chunk(source, &sanitized);
        let chunks_created = chunks.len();
        self.store.replace(ChunkSet {
            source: source.clone(),
            fingerprint: fingerprint.clone(),
            chunks,
        })?;
        info!(source = %source, chunks = chunks_created, "indexed document");

        Ok(IndexOutcome {
            chunks_created,
            fingerprint,
            unchanged: false,
        })
    }
}
