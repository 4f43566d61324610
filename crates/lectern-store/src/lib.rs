//! # lectern-store
//!
//! In-memory reference implementation of [`ChunkStore`] for tests and
//! single-process embedding. The production datastore lives outside this
//! workspace; this store exists so the replacement contract has an
//! executable specification.

use std::collections::HashMap;
use std::sync::RwLock;

use lectern_core::{Chunk, ChunkSet, ChunkStore, LecternError, LecternResult, SourceId};

struct StoredSet {
    fingerprint: String,
    chunks: Vec<Chunk>,
}

/// Thread-safe in-memory chunk store. One write guard covers the whole
/// swap, so a reader never observes a mix of a source's old and new
/// chunk sets.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<HashMap<SourceId, StoredSet>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sources currently held.
    pub fn source_count(&self) -> usize {
        self.inner.read().map(|g| g.len()).unwrap_or(0)
    }
}

impl ChunkStore for MemoryStore {
    fn replace(&self, set: ChunkSet) -> LecternResult<()> {
        let mut guard = self.inner.write().map_err(|_| poisoned())?;
        guard.insert(
            set.source.clone(),
            StoredSet {
                fingerprint: set.fingerprint,
                chunks: set.chunks,
            },
        );
        Ok(())
    }

    fn pool(&self, sources: &[SourceId]) -> LecternResult<Vec<Chunk>> {
        let guard = self.inner.read().map_err(|_| poisoned())?;
        let mut pool = Vec::new();
        for source in sources {
            if let Some(set) = guard.get(source) {
                pool.extend(set.chunks.iter().cloned());
            }
        }
        Ok(pool)
    }

    fn remove(&self, source: &SourceId) -> LecternResult<()> {
        let mut guard = self.inner.write().map_err(|_| poisoned())?;
        guard.remove(source);
        Ok(())
    }

    fn fingerprint(&self, source: &SourceId) -> LecternResult<Option<String>> {
        let guard = self.inner.read().map_err(|_| poisoned())?;
        Ok(guard.get(source).map(|s| s.fingerprint.clone()))
    }
}

fn poisoned() -> LecternError {
    LecternError::Store {
        reason: "store lock poisoned".to_string(),
    }
}
