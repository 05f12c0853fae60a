//! Size normalization: merge under-sized segments forward, then split
//! over-sized ones at sentence boundaries.

use tracing::{debug, warn};

use super::helpers::{count_words, split_sentences};
use super::types::{ChunkConfig, Segment};

/// Append `next` to `buffer`. Bounds span both; labels come from `buffer`
/// where present, falling back to `next` field by field.
fn combine(buffer: Segment, next: Segment) -> Segment {
    let mut text_lines = buffer.text_lines;
    text_lines.extend(next.text_lines);
    Segment {
        start_line: buffer.start_line,
        end_line: next.end_line,
        chapter: buffer.chapter.or(next.chapter),
        section: buffer.section.or(next.section),
        heading: buffer.heading.or(next.heading),
        text_lines,
    }
}

/// Greedy forward merge.
///
/// The threshold is checked against the pending buffer alone, before it
/// absorbs the next segment, so a run of small segments may grow past any
/// upper bound. The trailing buffer is always emitted, even when short.
pub fn merge_small(segments: Vec<Segment>, min_words: usize) -> Vec<Segment> {
    let mut merged = Vec::with_capacity(segments.len());
    let mut buffer: Option<Segment> = None;

    for seg in segments {
        buffer = Some(match buffer.take() {
            None => seg,
            Some(pending) if pending.word_count() < min_words => combine(pending, seg),
            Some(pending) => {
                merged.push(pending);
                seg
            }
        });
    }
    merged.extend(buffer);
    merged
}

/// Split a segment over `max_words` into sentence-packed pieces that share
/// its bounds and labels. A single sentence longer than `max_words` is kept
/// whole.
pub fn split_large(seg: Segment, max_words: usize) -> Vec<Segment> {
    if seg.word_count() <= max_words {
        return vec![seg];
    }

    let mut pieces = Vec::new();
    let mut group: Vec<String> = Vec::new();
    let mut group_words = 0;

    for sentence in split_sentences(&seg.text()) {
        let words = count_words(&sentence);
        if words > max_words {
            warn!(
                start_line = seg.start_line,
                end_line = seg.end_line,
                words,
                max_words,
                "sentence exceeds max_words; emitting it whole"
            );
        }
        if !group.is_empty() && group_words + words > max_words {
            pieces.push(seg.with_text(group.join(" ")));
            group.clear();
            group_words = 0;
        }
        group.push(sentence);
        group_words += words;
    }
    if !group.is_empty() {
        pieces.push(seg.with_text(group.join(" ")));
    }

    debug!(
        start_line = seg.start_line,
        end_line = seg.end_line,
        pieces = pieces.len(),
        "split oversized segment"
    );
    pieces
}

/// Merge-small pass followed by split-large pass.
pub fn enforce_size_constraints(segments: Vec<Segment>, config: &ChunkConfig) -> Vec<Segment> {
    let incoming = segments.len();
    let merged = merge_small(segments, config.min_words);
    let merged_len = merged.len();

    let sized: Vec<Segment> = merged
        .into_iter()
        .flat_map(|seg| split_large(seg, config.max_words))
        .collect();

    debug!(
        incoming,
        merged = merged_len,
        sized = sized.len(),
        min_words = config.min_words,
        max_words = config.max_words,
        "enforced size constraints"
    );
    sized
}
