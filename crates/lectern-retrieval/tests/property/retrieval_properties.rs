//! Property tests for ranking invariants.

use lectern_core::{Chunk, ChunkType, Difficulty, Question, SourceId};
use lectern_retrieval::ranking::scorer::{self, ScorerWeights};
use lectern_retrieval::RetrievalEngine;
use lectern_text::QueryFeatures;
use proptest::prelude::*;

const QUESTION: &str = "How does photosynthesis turn sunlight into energy?";

/// Chunk texts of 8..30 short words stay below the 500- and 1000-char
/// length boundaries even after one appended term, so the length-shaping
/// factor can only gain across the monotonicity comparison.
fn chunk_text() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{3,9}", 8..30).prop_map(|words| words.join(" "))
}

fn pool() -> impl Strategy<Value = Vec<Chunk>> {
    prop::collection::vec((chunk_text(), 0..4usize), 1..30).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (text, source))| Chunk {
                // Guarantee some term overlap somewhere in the pool.
                text: if i % 3 == 0 {
                    format!("{text} photosynthesis energy")
                } else {
                    text
                },
                kind: ChunkType::Concept,
                difficulty: Difficulty::Medium,
                order: i,
                source: SourceId::new(format!("source-{source}")),
            })
            .collect()
    })
}

fn retrieve(pool: &[Chunk]) -> lectern_core::RetrievalResult {
    let question = Question::new(QUESTION, Difficulty::Medium).unwrap();
    RetrievalEngine::default().retrieve(&question, pool, &[], None)
}

proptest! {
    #[test]
    fn results_never_exceed_ten(pool in pool()) {
        prop_assert!(retrieve(&pool).hits.len() <= 10);
    }

    #[test]
    fn diversity_cap_holds_beyond_five_hits(pool in pool()) {
        let result = retrieve(&pool);
        if result.hits.len() > 5 {
            for source in pool.iter().map(|c| &c.source) {
                let n = result.hits.iter().filter(|h| &h.chunk.source == source).count();
                prop_assert!(n <= 4, "source {source} contributed {n} hits");
            }
        }
    }

    #[test]
    fn percentages_stay_in_bounds_with_top_at_100(pool in pool()) {
        let result = retrieve(&pool);
        for hit in &result.hits {
            prop_assert!(hit.match_percent <= 100);
        }
        if let Some(top) = result.hits.first() {
            prop_assert_eq!(top.match_percent, 100);
        }
    }

    #[test]
    fn scores_are_never_negative(pool in pool()) {
        for hit in retrieve(&pool).hits {
            prop_assert!(hit.score > 0.0);
        }
    }

    #[test]
    fn adding_a_question_term_never_lowers_that_chunks_score(
        pool in pool(),
        index in any::<prop::sample::Index>(),
    ) {
        let features = QueryFeatures::extract(QUESTION);
        let weights = ScorerWeights::default();
        let target = index.index(pool.len());

        let before = scorer::score(&features, &pool, Difficulty::Medium, &weights);

        let mut modified = pool.clone();
        modified[target].text.push_str(" photosynthesis");
        let after = scorer::score(&features, &modified, Difficulty::Medium, &weights);

        prop_assert!(
            after[target].score >= before[target].score,
            "score dropped from {} to {} after adding a question term",
            before[target].score,
            after[target].score
        );
    }
}
