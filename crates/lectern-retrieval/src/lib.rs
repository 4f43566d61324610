//! # lectern-retrieval
//!
//! Deterministic lexical retrieval: a multi-factor scorer, an adaptive
//! threshold with diversity-capped selection, and the engine that turns a
//! question plus a chunk pool into an explained, percent-normalized
//! result set. Pure and synchronous: every call is a plain computation
//! over its arguments.

pub mod engine;
pub mod explain;
pub mod ranking;

pub use engine::RetrievalEngine;
pub use ranking::Ranker;
