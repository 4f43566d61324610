use serde::{Deserialize, Serialize};

use super::defaults;

/// Threshold and selection configuration for the ranker. Scoring factor
/// weights live with the scorer itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Absolute floor of the adaptive relevance threshold.
    pub threshold_floor: f64,
    /// Fraction of the pool's mean score used as the adaptive threshold.
    pub threshold_ratio: f64,
    /// Hard cap on the number of hits per retrieval.
    pub max_results: usize,
    /// Below this many accepted hits the per-source cap is not enforced.
    pub guaranteed_results: usize,
    /// Maximum hits contributed by one source once the guarantee is met.
    pub max_per_source: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            threshold_floor: defaults::DEFAULT_THRESHOLD_FLOOR,
            threshold_ratio: defaults::DEFAULT_THRESHOLD_RATIO,
            max_results: defaults::DEFAULT_MAX_RESULTS,
            guaranteed_results: defaults::DEFAULT_GUARANTEED_RESULTS,
            max_per_source: defaults::DEFAULT_MAX_PER_SOURCE,
        }
    }
}
