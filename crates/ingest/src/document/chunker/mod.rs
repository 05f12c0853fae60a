//! Textbook chunking engine.
//!
//! Detects chapter, numbered-section and glossary headings in plain text,
//! groups lines into heading-scoped segments, then merges short segments and
//! splits long ones so chunk word counts land inside a configured window.
//! Every chunk keeps the chapter/section/heading and line range it came from.

mod heading;
mod helpers;
mod normalize;
mod pipeline;
mod segmenter;
mod types;

pub use heading::{classify_heading, HeadingMatch, GLOSSARY_LABEL};
pub use normalize::{enforce_size_constraints, merge_small, split_large};
pub use pipeline::{chunk_lines, chunk_text, to_records};
pub use segmenter::{build_segments, scan_lines};
pub use types::{ChunkConfig, HeadingContext, Segment};
