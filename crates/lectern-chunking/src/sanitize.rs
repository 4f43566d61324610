//! Input sanitization for extracted lesson text.

/// Strip control characters (keeping tab, newline, and carriage return)
/// and trim surrounding whitespace. OCR output routinely carries stray
/// control bytes.
pub fn sanitize_text(text: &str) -> String {
    text.chars()
        .filter(|&c| !is_stripped_control(c))
        .collect::<String>()
        .trim()
        .to_string()
}

fn is_stripped_control(c: char) -> bool {
    matches!(
        c,
        '\u{00}'..='\u{08}' | '\u{0B}' | '\u{0C}' | '\u{0E}'..='\u{1F}' | '\u{7F}'..='\u{9F}'
    )
}
