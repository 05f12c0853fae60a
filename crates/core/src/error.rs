use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChunkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid word window: min_words={min_words}, max_words={max_words}")]
    InvalidWindow { min_words: usize, max_words: usize },
}

pub type Result<T> = std::result::Result<T, ChunkError>;
