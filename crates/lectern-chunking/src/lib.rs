//! # lectern-chunking
//!
//! Splits extracted lesson text into bounded, ordered, difficulty-labeled
//! chunks, and drives the ingestion pipeline that replaces a source's
//! chunk set atomically.

pub mod chunker;
pub mod indexer;
pub mod sanitize;
pub mod splitter;

pub use chunker::Chunker;
pub use indexer::{IndexOutcome, Indexer};
pub use sanitize::sanitize_text;
