//! Multi-factor lexical relevance scorer (8 factors).
//!
//! Factors: tf-idf term weight, key-phrase proximity, question-stem match,
//! concept overlap, chunk type, difficulty preference, recency, and
//! length shaping.

use std::collections::HashMap;

use lectern_core::{Chunk, ChunkType, Difficulty, ScoredChunk};
use lectern_text::features::{concepts, significant_words, QueryFeatures};
use lectern_text::matching::whole_word_count;

/// Weights for the 8 scoring factors.
#[derive(Debug, Clone)]
pub struct ScorerWeights {
    /// Multiplier on each term's tf-idf contribution.
    pub term: f64,
    /// Base weight of a matched key phrase; doubled on proximity.
    pub phrase: f64,
    /// Weight when a phrase matches but its words cannot all be located.
    pub phrase_fallback: f64,
    /// Bonus for a verbatim question-stem match.
    pub stem: f64,
    /// Weight per shared concept.
    pub concept: f64,
    /// Type weight of concept chunks.
    pub concept_chunk: f64,
    /// Type weight of summary chunks.
    pub summary_chunk: f64,
    /// Bonus for matching the requested difficulty exactly.
    pub difficulty_match: f64,
    /// Bonus for a medium chunk under an easy or hard preference.
    pub difficulty_adjacent: f64,
    /// Multiplier on the positional recency boost.
    pub recency: f64,
    /// Bonus for comfortably sized chunks.
    pub length_bonus: f64,
    /// Multiplier applied (last) to overlong chunks.
    pub long_penalty: f64,
}

impl Default for ScorerWeights {
    fn default() -> Self {
        Self {
            term: 1.5,
            phrase: 4.0,
            phrase_fallback: 3.0,
            stem: 6.0,
            concept: 2.0,
            concept_chunk: 2.0,
            summary_chunk: 1.0,
            difficulty_match: 2.0,
            difficulty_adjacent: 0.5,
            recency: 0.5,
            length_bonus: 0.3,
            long_penalty: 0.9,
        }
    }
}

/// Chunk orders at or beyond this earn no recency boost.
const RECENCY_HORIZON: f64 = 20.0;
/// Exclusive character range rewarded as a comfortable grounding size.
const LENGTH_BONUS_RANGE: (usize, usize) = (50, 500);
/// Characters beyond which a chunk is penalized as overlong.
const LONG_CHUNK_CHARS: usize = 1000;

/// Document frequency of every significant word across the pool: each
/// word counts once per chunk containing it.
pub fn document_frequencies(pool: &[Chunk]) -> HashMap<String, usize> {
    let mut df: HashMap<String, usize> = HashMap::new();
    for chunk in pool {
        for word in significant_words(&chunk.text) {
            *df.entry(word).or_default() += 1;
        }
    }
    df
}

/// Score every chunk in the pool against the question features.
pub fn score(
    features: &QueryFeatures,
    pool: &[Chunk],
    preference: Difficulty,
    weights: &ScorerWeights,
) -> Vec<ScoredChunk> {
    let df = document_frequencies(pool);
    let total = pool.len();
    pool.iter()
        .map(|chunk| ScoredChunk {
            score: score_chunk(features, chunk, preference, &df, total, weights),
            chunk: chunk.clone(),
        })
        .collect()
}

fn score_chunk(
    features: &QueryFeatures,
    chunk: &Chunk,
    preference: Difficulty,
    df: &HashMap<String, usize>,
    total: usize,
    weights: &ScorerWeights,
) -> f64 {
    let lower = chunk.text.to_lowercase();
    let mut score = 0.0;

    // Factor 1: tf-idf over the question's significant words. A word that
    // occurs only inside a larger word still counts as present with a
    // whole-word frequency of zero.
    for word in &features.words {
        if lower.contains(word.as_str()) {
            let term_freq = whole_word_count(&lower, word) as f64;
            let tf = 1.0 + (1.0 + term_freq).ln();
            let doc_freq = df.get(word).copied().unwrap_or(1) as f64;
            let idf = ((total as f64 + 1.0) / (doc_freq + 1.0)).ln() + 1.0;
            score += tf * idf * weights.term;
        }
    }

    // Factor 2: key phrases, doubled when the phrase words sit close
    // together. The span is in byte offsets, compared against twice the
    // phrase's character length.
    for phrase in &features.phrases {
        if lower.contains(phrase.as_str()) {
            let words: Vec<&str> = phrase.split_whitespace().collect();
            let positions: Vec<usize> = words.iter().filter_map(|w| lower.find(w)).collect();
            if positions.len() == words.len() {
                let span = positions.iter().copied().max().unwrap_or(0)
                    - positions.iter().copied().min().unwrap_or(0);
                let proximity = if span < phrase.chars().count() * 2 { 2.0 } else { 1.0 };
                score += weights.phrase * proximity;
            } else {
                score += weights.phrase_fallback;
            }
        }
    }

    // Factor 3: verbatim question-stem match.
    if !features.stem.is_empty() && lower.contains(features.stem.as_str()) {
        score += weights.stem;
    }

    // Factor 4: concept overlap.
    let chunk_concepts = concepts(&chunk.text);
    let overlap = features
        .concepts
        .iter()
        .filter(|c| chunk_concepts.contains(c))
        .count();
    score += overlap as f64 * weights.concept;

    // Factor 5: chunk type.
    score += match chunk.kind {
        ChunkType::Concept => weights.concept_chunk,
        ChunkType::Summary => weights.summary_chunk,
    };

    // Factor 6: difficulty preference. Medium chunks stay acceptable
    // under either non-medium preference.
    if chunk.difficulty == preference {
        score += weights.difficulty_match;
    } else if chunk.difficulty == Difficulty::Medium {
        score += weights.difficulty_adjacent;
    }

    // Factor 7: recency within the document.
    let recency = (1.0 - chunk.order as f64 / RECENCY_HORIZON).max(0.0);
    score += recency * weights.recency;

    // Factor 8: length shaping; the overlong penalty multiplies last.
    let len = chunk.text.chars().count();
    if len > LENGTH_BONUS_RANGE.0 && len < LENGTH_BONUS_RANGE.1 {
        score += weights.length_bonus;
    } else if len > LONG_CHUNK_CHARS {
        score *= weights.long_penalty;
    }

    score
}
