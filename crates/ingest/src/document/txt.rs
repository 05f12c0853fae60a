use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tome_core::Result;
use tracing::debug;

/// Decode UTF-8 bytes, silently dropping invalid sequences.
fn decode_dropping_invalid(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

fn line_break() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\r\n|\r|\n").expect("Invalid regex"))
}

/// Split raw file bytes into lines. `\r\n`, `\r` and `\n` each end a line; a
/// final terminator does not produce an empty trailing line. A leading
/// byte-order mark is removed.
pub fn decode_lines(bytes: &[u8]) -> Vec<String> {
    let text = decode_dropping_invalid(bytes);
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    let mut lines: Vec<String> = line_break().split(text).map(str::to_string).collect();
    if lines.last().is_some_and(|last| last.is_empty()) {
        lines.pop();
    }
    lines
}

/// Read a text file as an ordered list of lines.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let lines = decode_lines(&bytes);
    debug!(path = %path.display(), bytes = bytes.len(), lines = lines.len(), "read input");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_simple_text() {
        let lines = decode_lines(b"Hello, world!\nThis is a test file.");
        assert_eq!(lines, vec!["Hello, world!", "This is a test file."]);
    }

    #[test]
    fn keeps_utf8_text() {
        let content = "Ünïcödé text with émojis 🎉\n".as_bytes();
        assert_eq!(decode_lines(content), vec!["Ünïcödé text with émojis 🎉"]);
    }

    #[test]
    fn drops_invalid_bytes() {
        let content = b"caf\xe9 au lait\n\xff\xfeok\n";
        assert_eq!(decode_lines(content), vec!["caf au lait", "ok"]);
    }

    #[test]
    fn handles_crlf_and_trailing_newline() {
        let lines = decode_lines(b"one\r\ntwo\r\n\r\nfour\n");
        assert_eq!(lines, vec!["one", "two", "", "four"]);
    }

    #[test]
    fn bare_carriage_return_ends_a_line() {
        assert_eq!(decode_lines(b"a\rb\r\nc\n"), vec!["a", "b", "c"]);
    }

    #[test]
    fn keeps_blank_line_before_final_terminator() {
        assert_eq!(decode_lines(b"a\n\n"), vec!["a", ""]);
        assert_eq!(decode_lines(b"a\r\r"), vec!["a", ""]);
    }

    #[test]
    fn classic_mac_line_endings_expose_headings() {
        let lines = decode_lines(b"CHAPTER 1.\rBody text.\r1.1 Cells\rCell text.\r");
        assert_eq!(lines, vec!["CHAPTER 1.", "Body text.", "1.1 Cells", "Cell text."]);

        let segments = crate::document::chunker::build_segments(&lines);
        assert_eq!(segments.len(), 2);
        assert_eq!((segments[1].start_line, segments[1].end_line), (3, 4));
        assert_eq!(segments[1].section.as_deref(), Some("1.1"));
        assert_eq!(segments[1].heading.as_deref(), Some("Cells"));
    }

    #[test]
    fn strips_byte_order_mark() {
        let lines = decode_lines(b"\xef\xbb\xbfCHAPTER 1.\n");
        assert_eq!(lines, vec!["CHAPTER 1."]);
    }

    #[test]
    fn empty_input() {
        assert!(decode_lines(b"").is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_lines("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, tome_core::ChunkError::Io(_)));
    }
}
