use crate::chunk::{Chunk, ChunkSet, SourceId};
use crate::errors::LecternResult;

/// Storage seam for chunk persistence. The engine never manages storage
/// itself; the production datastore lives outside this workspace.
///
/// `replace` must be atomic with respect to `pool`: no reader may observe
/// a mix of a source's old and new chunk sets.
pub trait ChunkStore: Send + Sync {
    /// Replace every chunk for `set.source` with `set`, atomically.
    fn replace(&self, set: ChunkSet) -> LecternResult<()>;

    /// All chunks for the given sources, sources in argument order and
    /// chunks in document order within each source.
    fn pool(&self, sources: &[SourceId]) -> LecternResult<Vec<Chunk>>;

    /// Drop a source's chunk set entirely.
    fn remove(&self, source: &SourceId) -> LecternResult<()>;

    /// Fingerprint of the text a source was last indexed from, if any.
    fn fingerprint(&self, source: &SourceId) -> LecternResult<Option<String>>;
}
