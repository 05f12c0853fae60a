use serde::{Deserialize, Serialize};

/// Zero-based position of a chunk in the output sequence.
pub type ChunkId = usize;

/// A finished chunk as written to the output JSON.
///
/// Label fields serialize as `null` when absent so every record carries the
/// same keys. `embedding` is only present once an embedder has run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChunkRecord {
    pub id: ChunkId,
    pub chapter: Option<String>,
    pub section: Option<String>,
    pub heading: Option<String>,
    /// First source line covered (1-based, inclusive).
    pub start_line: usize,
    /// Last source line covered (1-based, inclusive).
    pub end_line: usize,
    pub word_count: usize,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
}

/// Summary of a chunk sequence, for logs and sanity checks.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ChunkStats {
    pub chunks: usize,
    pub total_words: usize,
    pub min_words: usize,
    pub max_words: usize,
    pub mean_words: f64,
    /// Chunks below the configured lower bound.
    pub undersized: usize,
    /// Chunks above the configured upper bound.
    pub oversized: usize,
}

impl ChunkStats {
    pub fn from_records(records: &[ChunkRecord], min_words: usize, max_words: usize) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let counts = records.iter().map(|r| r.word_count);
        let total_words: usize = counts.clone().sum();

        Self {
            chunks: records.len(),
            total_words,
            min_words: counts.clone().min().unwrap_or(0),
            max_words: counts.clone().max().unwrap_or(0),
            mean_words: total_words as f64 / records.len() as f64,
            undersized: counts.clone().filter(|&c| c < min_words).count(),
            oversized: counts.filter(|&c| c > max_words).count(),
        }
    }
}
