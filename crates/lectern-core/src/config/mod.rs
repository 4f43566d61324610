//! Engine configuration.
//!
//! Every tunable constant of the chunker and the ranker lives here, as
//! the single source of truth, loadable from TOML with per-field defaults.

pub mod defaults;

mod chunking_config;
mod retrieval_config;

pub use chunking_config::ChunkingConfig;
pub use retrieval_config::RetrievalConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{LecternError, LecternResult};

/// Top-level configuration for the whole engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LecternConfig {
    pub chunking: ChunkingConfig,
    pub retrieval: RetrievalConfig,
}

impl LecternConfig {
    /// Parse a TOML document. Missing keys fall back to defaults.
    pub fn from_toml_str(raw: &str) -> LecternResult<Self> {
        toml::from_str(raw).map_err(|e| LecternError::InvalidConfig {
            reason: e.to_string(),
        })
    }
}
