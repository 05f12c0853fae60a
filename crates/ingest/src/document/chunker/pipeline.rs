//! End-to-end chunking: segment, normalize, number.

use tome_core::ChunkRecord;

use super::normalize::enforce_size_constraints;
use super::segmenter::build_segments;
use super::types::{ChunkConfig, Segment};

/// Segment `lines` and normalize the result to the configured window.
pub fn chunk_lines<I, S>(lines: I, config: &ChunkConfig) -> Vec<Segment>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    enforce_size_constraints(build_segments(lines), config)
}

/// Number final segments in order and render their text.
pub fn to_records(segments: &[Segment]) -> Vec<ChunkRecord> {
    segments
        .iter()
        .enumerate()
        .map(|(id, seg)| ChunkRecord {
            id,
            chapter: seg.chapter.clone(),
            section: seg.section.clone(),
            heading: seg.heading.clone(),
            start_line: seg.start_line,
            end_line: seg.end_line,
            word_count: seg.word_count(),
            text: seg.text(),
            embedding: None,
        })
        .collect()
}

/// Chunk an in-memory document.
pub fn chunk_text(text: &str, config: &ChunkConfig) -> Vec<ChunkRecord> {
    to_records(&chunk_lines(text.lines(), config))
}
