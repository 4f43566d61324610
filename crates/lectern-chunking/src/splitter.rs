//! Sentence segmentation: a terminator (`.`, `!`, `?`) followed by
//! whitespace ends a sentence; the terminator stays with its sentence.

/// Split text into sentences. No filtering happens here; fragment
/// thresholds belong to the chunker.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0usize;
    let mut iter = text.char_indices().peekable();

    while let Some((i, c)) = iter.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let end = i + c.len_utf8();
        match iter.peek() {
            Some(&(_, next)) if next.is_whitespace() => {
                sentences.push(&text[start..end]);
                let mut next_start = end;
                while let Some(&(j, w)) = iter.peek() {
                    if w.is_whitespace() {
                        next_start = j + w.len_utf8();
                        iter.next();
                    } else {
                        next_start = j;
                        break;
                    }
                }
                start = next_start;
            }
            _ => {}
        }
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }
    sentences
}
