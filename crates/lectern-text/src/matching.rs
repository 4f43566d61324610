//! Whole-word matching over lowercased text.
//!
//! Word characters are ASCII letters, digits, and underscore; everything
//! else is a boundary.

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// True when `needle` occurs in `haystack` with a boundary on both sides.
pub fn contains_word(haystack: &str, needle: &str) -> bool {
    whole_word_count(haystack, needle) > 0
}

/// Number of whole-word occurrences of `needle` in `haystack`.
pub fn whole_word_count(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    let bytes = haystack.as_bytes();
    let mut count = 0;
    let mut start = 0;
    while let Some(pos) = haystack[start..].find(needle) {
        let at = start + pos;
        let end = at + needle.len();
        let left_ok = at == 0 || !is_word_byte(bytes[at - 1]);
        let right_ok = end == bytes.len() || !is_word_byte(bytes[end]);
        if left_ok && right_ok {
            count += 1;
        }
        // Any overlapping occurrence would start inside this one and fail
        // its left boundary, so skipping the whole needle is safe.
        start = end;
    }
    count
}

/// True when `word` occurs as a whole word followed by whitespace and a
/// digit, e.g. `solve 2x`.
pub fn word_then_number(haystack: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let bytes = haystack.as_bytes();
    let mut start = 0;
    while let Some(pos) = haystack[start..].find(word) {
        let at = start + pos;
        let end = at + word.len();
        let left_ok = at == 0 || !is_word_byte(bytes[at - 1]);
        if left_ok {
            let rest = &haystack[end..];
            let trimmed = rest.trim_start();
            if trimmed.len() < rest.len() && trimmed.starts_with(|c: char| c.is_ascii_digit()) {
                return true;
            }
        }
        start = end;
    }
    false
}
