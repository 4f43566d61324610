//! Ranking pipeline: score → threshold → diversity-capped selection.

pub mod scorer;
pub mod selection;

use lectern_core::{Chunk, Difficulty, RetrievalConfig, ScoredChunk};
use lectern_text::QueryFeatures;

use scorer::ScorerWeights;

/// Full ranking pipeline for one question against one chunk pool.
pub struct Ranker {
    weights: ScorerWeights,
    config: RetrievalConfig,
}

impl Ranker {
    pub fn new(config: RetrievalConfig) -> Self {
        Self {
            weights: ScorerWeights::default(),
            config,
        }
    }

    pub fn with_weights(config: RetrievalConfig, weights: ScorerWeights) -> Self {
        Self { weights, config }
    }

    /// Rank the pool. An empty pool yields an empty result and skips the
    /// threshold step entirely.
    pub fn rank(
        &self,
        features: &QueryFeatures,
        pool: &[Chunk],
        preference: Difficulty,
    ) -> Vec<ScoredChunk> {
        if pool.is_empty() {
            return Vec::new();
        }
        let scored = scorer::score(features, pool, preference, &self.weights);
        selection::select(scored, &self.config)
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(RetrievalConfig::default())
    }
}
