//! RetrievalEngine: classify → filter → rank → explain.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use lectern_core::{
    Chunk, Question, RetrievalConfig, RetrievalResult, RetrievedChunk, Source, SourceId,
};
use lectern_text::{classify_topic, QueryFeatures};

use crate::explain::matched_terms;
use crate::ranking::Ranker;

/// The main retrieval engine: a pure, synchronous pipeline from one
/// question and one chunk pool to a diversity-capped, percent-normalized
/// result set. Holds no state beyond configuration and may be shared
/// freely across callers.
pub struct RetrievalEngine {
    ranker: Ranker,
}

impl RetrievalEngine {
    pub fn new(config: RetrievalConfig) -> Self {
        Self {
            ranker: Ranker::new(config),
        }
    }

    /// Retrieve grounding material for `question` from `pool`.
    ///
    /// `sources` supplies per-source metadata for labels and the optional
    /// `date_filter`: chunks whose source was created after the boundary
    /// are dropped before ranking, and chunks of unknown sources are kept.
    /// An empty (or fully filtered) pool yields an empty result with the
    /// question's topic still classified.
    pub fn retrieve(
        &self,
        question: &Question,
        pool: &[Chunk],
        sources: &[Source],
        date_filter: Option<DateTime<Utc>>,
    ) -> RetrievalResult {
        let topic = classify_topic(question.text());
        debug!(?topic, "classified question");

        let filtered;
        let pool = match date_filter {
            Some(boundary) => {
                let dates: HashMap<&SourceId, DateTime<Utc>> =
                    sources.iter().map(|s| (&s.id, s.created_at)).collect();
                filtered = pool
                    .iter()
                    .filter(|c| dates.get(&c.source).map_or(true, |d| *d <= boundary))
                    .cloned()
                    .collect::<Vec<_>>();
                filtered.as_slice()
            }
            None => pool,
        };

        if pool.is_empty() {
            debug!("empty chunk pool");
            return RetrievalResult {
                hits: Vec::new(),
                topic,
            };
        }

        let features = QueryFeatures::extract(question.text());
        let ranked = self.ranker.rank(&features, pool, question.difficulty());
        info!(
            candidates = pool.len(),
            selected = ranked.len(),
            "ranking complete"
        );

        let labels: HashMap<&SourceId, String> =
            sources.iter().map(|s| (&s.id, s.label())).collect();
        let max_score = ranked.iter().map(|s| s.score).fold(0.0_f64, f64::max);
        // Normalization guard: a non-positive maximum divides as 1.
        let denominator = if max_score > 0.0 { max_score } else { 1.0 };

        let hits = ranked
            .into_iter()
            .map(|s| {
                let matched = matched_terms(question.text(), &s.chunk.text);
                let source_label = labels.get(&s.chunk.source).cloned().unwrap_or_default();
                RetrievedChunk {
                    match_percent: ((s.score / denominator) * 100.0).round() as u8,
                    matched_terms: matched,
                    source_label,
                    score: s.score,
                    chunk: s.chunk,
                }
            })
            .collect();

        RetrievalResult { hits, topic }
    }
}

impl Default for RetrievalEngine {
    fn default() -> Self {
        Self::new(RetrievalConfig::default())
    }
}
