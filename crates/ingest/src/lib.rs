//! Textbook ingestion: read plain text, chunk it by heading and size, and
//! optionally embed the chunks.

pub mod document;
pub mod embedding;

pub use document::chunker::{chunk_lines, chunk_text, to_records, ChunkConfig, Segment};
pub use document::{read_chunks, read_lines, write_chunks};
