//! Chunk configuration, segments, and scan state.

use tome_core::config::ChunkingConfig;

use super::helpers::count_words;

// ── Configuration ───────────────────────────────────────────────────────────

/// Word-count window for the size normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkConfig {
    /// Segments below this are merged forward (default: 150).
    pub min_words: usize,
    /// Segments above this are split at sentence boundaries (default: 700).
    pub max_words: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self::from(&ChunkingConfig::default())
    }
}

impl From<&ChunkingConfig> for ChunkConfig {
    fn from(c: &ChunkingConfig) -> Self {
        Self {
            min_words: c.min_words,
            max_words: c.max_words,
        }
    }
}

// ── Heading context ─────────────────────────────────────────────────────────

/// Chapter/section/heading labels in effect at some point of the scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadingContext {
    pub chapter: Option<String>,
    pub section: Option<String>,
    pub heading: Option<String>,
}

// ── Segment ─────────────────────────────────────────────────────────────────

/// A contiguous run of source lines bound to the heading context active at
/// its first line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// First source line (1-based, inclusive).
    pub start_line: usize,
    /// Last source line (1-based, inclusive).
    pub end_line: usize,
    pub chapter: Option<String>,
    pub section: Option<String>,
    pub heading: Option<String>,
    /// Raw right-trimmed lines.
    pub text_lines: Vec<String>,
}

impl Segment {
    pub fn new(
        start_line: usize,
        end_line: usize,
        context: &HeadingContext,
        text_lines: Vec<String>,
    ) -> Self {
        Self {
            start_line,
            end_line,
            chapter: context.chapter.clone(),
            section: context.section.clone(),
            heading: context.heading.clone(),
            text_lines,
        }
    }

    /// Non-blank lines, stripped, joined with single spaces.
    pub fn text(&self) -> String {
        self.text_lines
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn word_count(&self) -> usize {
        self.text_lines.iter().map(|line| count_words(line)).sum()
    }

    pub fn context(&self) -> HeadingContext {
        HeadingContext {
            chapter: self.chapter.clone(),
            section: self.section.clone(),
            heading: self.heading.clone(),
        }
    }

    /// Same bounds and labels, different body.
    pub(crate) fn with_text(&self, text: String) -> Self {
        Self {
            start_line: self.start_line,
            end_line: self.end_line,
            chapter: self.chapter.clone(),
            section: self.section.clone(),
            heading: self.heading.clone(),
            text_lines: vec![text],
        }
    }
}
