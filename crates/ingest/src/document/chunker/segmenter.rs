//! Heading-scoped segmentation of a line sequence.

use tracing::debug;

use super::heading::{classify_heading, HeadingMatch};
use super::types::{HeadingContext, Segment};

/// State threaded through the left-to-right scan.
#[derive(Debug, Default)]
struct ScanState {
    context: HeadingContext,
    buffer: Vec<String>,
    /// Line number of the first buffered line (1-based).
    start_line: usize,
    segments: Vec<Segment>,
}

impl ScanState {
    fn new() -> Self {
        Self {
            start_line: 1,
            ..Self::default()
        }
    }

    /// Emit the buffered lines as a segment ending at `end_line`, labelled
    /// with the context as it stands now.
    fn close(&mut self, end_line: usize) {
        if self.buffer.is_empty() {
            return;
        }
        let lines = std::mem::take(&mut self.buffer);
        self.segments
            .push(Segment::new(self.start_line, end_line, &self.context, lines));
    }

    fn apply(&mut self, found: HeadingMatch) {
        if let Some(chapter) = found.chapter {
            self.context.chapter = Some(chapter);
            // A new chapter without a section label starts section tracking over.
            if found.section.is_none() {
                self.context.section = None;
            }
        }
        if let Some(section) = found.section {
            self.context.section = Some(section);
        }
        if let Some(heading) = found.heading {
            self.context.heading = Some(heading);
        }
    }

    fn step(&mut self, line_no: usize, line: &str) {
        let found = classify_heading(line, self.context.chapter.as_deref());
        if found.is_heading() {
            self.close(line_no - 1);
            self.apply(found);
            self.start_line = line_no;
        }
        self.buffer.push(line.trim_end().to_string());
    }
}

/// Scan `lines` into contiguous segments covering every line, including
/// segments with no words. Also returns the context in effect after the
/// last line.
pub fn scan_lines<I, S>(lines: I) -> (Vec<Segment>, HeadingContext)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut state = ScanState::new();
    let mut last_line = 0;

    for (idx, line) in lines.into_iter().enumerate() {
        last_line = idx + 1;
        state.step(last_line, line.as_ref());
    }
    state.close(last_line);

    (state.segments, state.context)
}

/// Segment `lines` at heading boundaries, dropping segments with no words.
pub fn build_segments<I, S>(lines: I) -> Vec<Segment>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (segments, context) = scan_lines(lines);
    let scanned = segments.len();
    let segments: Vec<Segment> = segments
        .into_iter()
        .filter(|seg| seg.word_count() > 0)
        .collect();

    debug!(
        scanned,
        kept = segments.len(),
        final_chapter = context.chapter.as_deref().unwrap_or("-"),
        "built semantic segments"
    );
    segments
}
