//! Questions and their classified topics.

use serde::{Deserialize, Serialize};

use crate::chunk::Difficulty;
use crate::constants::MAX_QUESTION_CHARS;
use crate::errors::{LecternError, LecternResult};

/// A student question, validated on construction and alive for the
/// duration of one retrieval call.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    text: String,
    difficulty: Difficulty,
}

impl Question {
    /// Validate and wrap a question. The text must be 1 to
    /// [`MAX_QUESTION_CHARS`] characters.
    pub fn new(text: impl Into<String>, difficulty: Difficulty) -> LecternResult<Self> {
        let text = text.into();
        let chars = text.chars().count();
        if chars == 0 {
            return Err(LecternError::InvalidQuestion {
                reason: "question is empty".to_string(),
            });
        }
        if chars > MAX_QUESTION_CHARS {
            return Err(LecternError::InvalidQuestion {
                reason: format!("question is {chars} characters, max {MAX_QUESTION_CHARS}"),
            });
        }
        Ok(Self { text, difficulty })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The difficulty level the answer should be pitched at.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

/// Coarse topic of a question.
///
/// Exposed to callers so the answering pipeline can pick an instruction
/// template and decide whether non-grounded general-knowledge answering is
/// permitted when retrieval comes back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Calculation,
    Math,
    Science,
    Explanation,
    General,
}

impl Topic {
    /// Every topic, in tie-break priority order.
    pub const ALL: [Topic; 5] = [
        Topic::Calculation,
        Topic::Math,
        Topic::Science,
        Topic::Explanation,
        Topic::General,
    ];

    /// Whether an academic fallback to general knowledge is acceptable
    /// when no chunk clears the relevance threshold.
    pub fn allows_general_fallback(self) -> bool {
        self != Topic::General
    }
}
