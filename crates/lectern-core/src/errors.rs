//! Error types for the Lectern engine.
//!
//! The engine itself has no recoverable-error taxonomy: degenerate input
//! (empty text, empty pools) yields empty output, not errors. Failures
//! exist only at the validation and store seams.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LecternError {
    #[error("invalid question: {reason}")]
    InvalidQuestion { reason: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("store operation failed: {reason}")]
    Store { reason: String },
}

pub type LecternResult<T> = std::result::Result<T, LecternError>;
