//! Heuristic topic classification for questions.
//!
//! Four scored categories over normalized text; ties resolve in fixed
//! priority order calculation > math > science > explanation, and a
//! zero score everywhere yields [`Topic::General`].

use lectern_core::Topic;

use crate::matching::{contains_word, word_then_number};

/// One named cue group; scores 1 when any term occurs as a whole word
/// (multi-word terms must appear verbatim with single spaces).
#[derive(Debug)]
pub struct TopicCues {
    pub name: &'static str,
    pub terms: &'static [&'static str],
}

impl TopicCues {
    pub fn matches(&self, lower: &str) -> bool {
        self.terms.iter().any(|t| contains_word(lower, t))
    }
}

/// Math cues beyond the digit-operator pattern.
pub const MATH_CUES: [TopicCues; 5] = [
    TopicCues {
        name: "verbs",
        terms: &["solve", "calculate", "compute", "find", "evaluate", "derive", "integrate", "differentiate"],
    },
    TopicCues {
        name: "subjects",
        terms: &["equation", "formula", "theorem", "proof", "algebra", "geometry", "trigonometry", "calculus"],
    },
    TopicCues {
        name: "quantities",
        terms: &["percentage", "fraction", "ratio", "proportion", "probability", "statistics"],
    },
    TopicCues {
        name: "functions",
        terms: &["square", "root", "cube", "exponent", "logarithm", "sine", "cosine", "tangent"],
    },
    TopicCues {
        name: "analysis",
        terms: &["derivative", "integral", "limit", "matrix", "vector", "polynomial"],
    },
];

pub const SCIENCE_CUES: [TopicCues; 7] = [
    TopicCues {
        name: "disciplines",
        terms: &["physics", "chemistry", "biology", "anatomy", "physiology"],
    },
    TopicCues {
        name: "matter",
        terms: &["atom", "molecule", "element", "compound", "reaction"],
    },
    TopicCues {
        name: "mechanics",
        terms: &["force", "energy", "power", "velocity", "acceleration", "momentum"],
    },
    TopicCues {
        name: "life",
        terms: &["cell", "tissue", "organ", "organism", "species", "evolution"],
    },
    TopicCues {
        name: "phenomena",
        terms: &["gravity", "magnetism", "electricity", "light", "sound", "wave"],
    },
    TopicCues {
        name: "processes",
        terms: &["photosynthesis", "respiration", "digestion", "circulation"],
    },
    TopicCues {
        name: "biochemistry",
        terms: &["genetics", "dna", "rna", "protein", "enzyme", "hormone"],
    },
];

pub const EXPLANATION_CUES: [TopicCues; 5] = [
    TopicCues {
        name: "define",
        terms: &["explain", "describe", "define", "what is", "what are", "what does"],
    },
    TopicCues {
        name: "how",
        terms: &["how does", "how do", "how is", "how are"],
    },
    TopicCues {
        name: "why",
        terms: &["why does", "why do", "why is", "why are"],
    },
    TopicCues {
        name: "tell",
        terms: &["tell me about", "tell me", "meaning of", "meaning"],
    },
    TopicCues {
        name: "clarify",
        terms: &["understand", "understanding", "clarify", "elaborate"],
    },
];

/// Operators accepted between two numbers for the math pattern.
const MATH_OPERATORS: [char; 6] = ['+', '-', '*', '/', '^', '='];
/// The calculation pattern excludes `=` (an equation is not yet a
/// computation request).
const CALCULATION_OPERATORS: [char; 5] = ['+', '-', '*', '/', '^'];
/// Verbs that signal a computation when followed by a number.
const CALCULATION_VERBS: [&str; 3] = ["calculate", "compute", "solve"];

/// Score the four categories and pick the winner.
pub fn classify_topic(question: &str) -> Topic {
    let lower = question.to_lowercase();

    let mut math = usize::from(digit_operator_digit(&lower, &MATH_OPERATORS));
    math += MATH_CUES.iter().filter(|g| g.matches(&lower)).count();

    let calculation = if digit_operator_digit(&lower, &CALCULATION_OPERATORS)
        || CALCULATION_VERBS.iter().any(|v| word_then_number(&lower, v))
    {
        2
    } else {
        0
    };

    let science = SCIENCE_CUES.iter().filter(|g| g.matches(&lower)).count();
    let explanation = EXPLANATION_CUES.iter().filter(|g| g.matches(&lower)).count();

    let max = calculation.max(math).max(science).max(explanation);
    if max == 0 {
        Topic::General
    } else if calculation >= max {
        Topic::Calculation
    } else if math >= max {
        Topic::Math
    } else if science >= max {
        Topic::Science
    } else {
        Topic::Explanation
    }
}

/// `<digits> <operator> <digits>` with optional whitespace around the
/// operator.
fn digit_operator_digit(text: &str, operators: &[char]) -> bool {
    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        if chars[i].is_ascii_digit() {
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_ascii_digit() {
                j += 1;
            }
            let mut k = j;
            while k < chars.len() && chars[k].is_whitespace() {
                k += 1;
            }
            if k < chars.len() && operators.contains(&chars[k]) {
                let mut m = k + 1;
                while m < chars.len() && chars[m].is_whitespace() {
                    m += 1;
                }
                if m < chars.len() && chars[m].is_ascii_digit() {
                    return true;
                }
            }
            i = j;
        } else {
            i += 1;
        }
    }
    false
}
