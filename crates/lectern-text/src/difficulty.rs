//! Heuristic difficulty labeling for chunk text.
//!
//! Cue groups are named so each predicate can be audited and tested alone;
//! a group scores 1 when any of its keywords occurs in the lowercased text.

use lectern_core::Difficulty;

/// One named cue group over normalized text.
#[derive(Debug)]
pub struct CueGroup {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

impl CueGroup {
    /// True when any keyword occurs as a substring of the lowercased text.
    pub fn matches(&self, lower: &str) -> bool {
        self.keywords.iter().any(|k| lower.contains(k))
    }
}

/// Cues for introductory material.
pub const EASY_CUES: [CueGroup; 3] = [
    CueGroup {
        name: "introductory",
        keywords: &["example", "simple", "basic", "introduction", "overview", "summary"],
    },
    CueGroup {
        name: "first_steps",
        keywords: &["first", "begin", "start", "learn", "understand", "know"],
    },
    CueGroup {
        name: "plain_language",
        keywords: &["easy", "simple", "straightforward", "clear"],
    },
];

/// Cues for advanced material.
pub const HARD_CUES: [CueGroup; 4] = [
    CueGroup {
        name: "formal_math",
        keywords: &["theorem", "proof", "derivative", "integral", "calculus", "advanced", "complex"],
    },
    CueGroup {
        name: "deductive",
        keywords: &["assume", "suppose", "therefore", "thus", "hence", "consequently"],
    },
    CueGroup {
        name: "abstract",
        keywords: &["mathematical", "theoretical", "abstract", "sophisticated"],
    },
    CueGroup {
        name: "notation",
        keywords: &["formula", "equation", "algorithm", "methodology"],
    },
];

/// Characters that read as algebraic notation.
const OPERATOR_CHARS: [char; 8] = ['=', '+', '-', '*', '/', '^', '(', ')'];
/// Average word length above which prose reads as technical.
const LONG_WORD_THRESHOLD: f64 = 6.0;

/// Label a chunk's difficulty. Decision order, first match wins:
/// hard on strong hard cues or long technical words with operators;
/// easy on strong easy cues with no hard cue; hard on digits with
/// operators; medium otherwise.
pub fn assess_difficulty(text: &str) -> Difficulty {
    let lower = text.to_lowercase();
    let easy = EASY_CUES.iter().filter(|g| g.matches(&lower)).count();
    let hard = HARD_CUES.iter().filter(|g| g.matches(&lower)).count();

    let long_words = average_word_length(text) > LONG_WORD_THRESHOLD;
    let has_digits = text.chars().any(|c| c.is_ascii_digit());
    let has_operators = text.chars().any(|c| OPERATOR_CHARS.contains(&c));

    if hard >= 2 || (long_words && has_operators) {
        Difficulty::Hard
    } else if easy >= 2 && hard == 0 {
        Difficulty::Easy
    } else if has_digits && has_operators {
        Difficulty::Hard
    } else {
        Difficulty::Medium
    }
}

fn average_word_length(text: &str) -> f64 {
    let mut words = 0usize;
    let mut chars = 0usize;
    for word in text.split_whitespace() {
        words += 1;
        chars += word.chars().count();
    }
    if words == 0 {
        return 0.0;
    }
    chars as f64 / words as f64
}
