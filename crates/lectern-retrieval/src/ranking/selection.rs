//! Adaptive threshold and diversity-capped top-K selection.

use std::collections::HashMap;

use lectern_core::{RetrievalConfig, ScoredChunk, SourceId};

/// Adaptive relevance threshold: a fixed floor or a fraction of the
/// pool's mean score, whichever is higher.
pub fn threshold(scored: &[ScoredChunk], config: &RetrievalConfig) -> f64 {
    if scored.is_empty() {
        return config.threshold_floor;
    }
    let avg = scored.iter().map(|s| s.score).sum::<f64>() / scored.len() as f64;
    config.threshold_floor.max(avg * config.threshold_ratio)
}

/// Keep chunks strictly above the threshold, sort by descending score
/// (stable, so pool order breaks ties), then walk the list capping each
/// source's contribution. The cap is waived while fewer than
/// `guaranteed_results` chunks have been accepted, and selection stops at
/// `max_results`.
pub fn select(scored: Vec<ScoredChunk>, config: &RetrievalConfig) -> Vec<ScoredChunk> {
    if scored.is_empty() {
        return scored;
    }
    let cutoff = threshold(&scored, config);
    let mut survivors: Vec<ScoredChunk> =
        scored.into_iter().filter(|s| s.score > cutoff).collect();
    survivors.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

    let mut selected: Vec<ScoredChunk> = Vec::new();
    let mut per_source: HashMap<SourceId, usize> = HashMap::new();
    for candidate in survivors {
        if selected.len() >= config.max_results {
            break;
        }
        let count = per_source.get(&candidate.chunk.source).copied().unwrap_or(0);
        if count < config.max_per_source || selected.len() < config.guaranteed_results {
            *per_source.entry(candidate.chunk.source.clone()).or_default() += 1;
            selected.push(candidate);
        }
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use lectern_core::{Chunk, ChunkType, Difficulty};

    fn scored(source: &str, order: usize, score: f64) -> ScoredChunk {
        ScoredChunk {
            chunk: Chunk {
                text: format!("chunk {order} of {source}"),
                kind: ChunkType::Concept,
                difficulty: Difficulty::Medium,
                order,
                source: SourceId::new(source),
            },
            score,
        }
    }

    #[test]
    fn threshold_has_a_floor() {
        let config = RetrievalConfig::default();
        let pool = vec![scored("a", 0, 0.1), scored("a", 1, 0.2)];
        assert_eq!(threshold(&pool, &config), 0.5);
    }

    #[test]
    fn threshold_scales_with_the_mean() {
        let config = RetrievalConfig::default();
        let pool = vec![scored("a", 0, 10.0), scored("a", 1, 30.0)];
        // mean 20 * 0.3
        assert!((threshold(&pool, &config) - 6.0).abs() < 1e-9);
    }

    #[test]
    fn survivors_must_clear_the_threshold_strictly() {
        let config = RetrievalConfig::default();
        // mean = 0.5 → threshold stays at the 0.5 floor; a 0.5 score is out.
        let pool = vec![scored("a", 0, 0.5), scored("a", 1, 0.5)];
        assert!(select(pool, &config).is_empty());
    }

    #[test]
    fn results_sort_by_score_with_pool_order_tiebreak() {
        let config = RetrievalConfig::default();
        let pool = vec![
            scored("a", 0, 5.0),
            scored("b", 0, 9.0),
            scored("a", 1, 5.0),
        ];
        let picked = select(pool, &config);
        assert_eq!(picked[0].score, 9.0);
        assert_eq!(picked[1].chunk.source, SourceId::new("a"));
        assert_eq!(picked[1].chunk.order, 0);
        assert_eq!(picked[2].chunk.order, 1);
    }

    #[test]
    fn single_source_pools_stop_at_the_guarantee() {
        let config = RetrievalConfig::default();
        let pool: Vec<ScoredChunk> = (0..12).map(|i| scored("only", i, 10.0)).collect();
        let picked = select(pool, &config);
        // 4 within the cap, then one more under the guarantee, then no more.
        assert_eq!(picked.len(), 5);
    }

    #[test]
    fn two_sources_cap_at_four_each() {
        let config = RetrievalConfig::default();
        let mut pool = Vec::new();
        for i in 0..8 {
            pool.push(scored("a", i, 20.0 - i as f64));
            pool.push(scored("b", i, 19.5 - i as f64));
        }
        let picked = select(pool, &config);
        assert_eq!(picked.len(), 8);
        let from_a = picked.iter().filter(|s| s.chunk.source == SourceId::new("a")).count();
        let from_b = picked.iter().filter(|s| s.chunk.source == SourceId::new("b")).count();
        assert_eq!(from_a, 4);
        assert_eq!(from_b, 4);
    }

    #[test]
    fn three_sources_fill_up_to_max_results() {
        let config = RetrievalConfig::default();
        let mut pool = Vec::new();
        for source in ["a", "b", "c"] {
            for i in 0..6 {
                pool.push(scored(source, i, 30.0 - i as f64));
            }
        }
        let picked = select(pool, &config);
        assert_eq!(picked.len(), 10);
        for source in ["a", "b", "c"] {
            let n = picked
                .iter()
                .filter(|s| s.chunk.source == SourceId::new(source))
                .count();
            assert!(n <= 4, "source {source} contributed {n} > 4");
        }
    }

    #[test]
    fn empty_input_selects_nothing() {
        assert!(select(Vec::new(), &RetrievalConfig::default()).is_empty());
    }
}
