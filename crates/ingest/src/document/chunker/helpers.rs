//! Word counting and sentence splitting shared by the normalizer.

use std::sync::OnceLock;

use regex::Regex;

/// Whitespace-separated token count.
pub(crate) fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Terminal punctuation followed by whitespace. The cut goes right after the
/// punctuation mark; the whitespace run is dropped.
fn sentence_boundary() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[.!?]\s+").expect("Invalid regex"))
}

/// Split `text` after every `.`, `!` or `?` that is followed by whitespace.
/// Pieces are trimmed; empty pieces are discarded.
pub(crate) fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in sentence_boundary().find_iter(text) {
        // Punctuation is ASCII, so start + 1 is a char boundary.
        let piece = text[start..m.start() + 1].trim();
        if !piece.is_empty() {
            sentences.push(piece.to_string());
        }
        start = m.end();
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}
