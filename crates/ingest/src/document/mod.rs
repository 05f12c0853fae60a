pub mod chunker;
mod output;
mod txt;

pub use output::{read_chunks, write_chunks};
pub use txt::{decode_lines, read_lines};
