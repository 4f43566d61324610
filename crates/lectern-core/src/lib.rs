//! # lectern-core
//!
//! Foundation crate for the Lectern retrieval engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod chunk;
pub mod config;
pub mod constants;
pub mod errors;
pub mod question;
pub mod retrieval;
pub mod source;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use chunk::{Chunk, ChunkSet, ChunkType, Difficulty, SourceId};
pub use config::{ChunkingConfig, LecternConfig, RetrievalConfig};
pub use errors::{LecternError, LecternResult};
pub use question::{Question, Topic};
pub use retrieval::{RetrievalResult, RetrievedChunk, ScoredChunk};
pub use source::Source;
pub use traits::ChunkStore;
