use std::path::PathBuf;

use clap::Parser;

/// Chunk a plain-text textbook into heading-aware, size-bounded JSON chunks.
///
/// Optional values fall back to the environment (see `.env`), then to the
/// built-in defaults.
#[derive(Parser, Debug)]
#[command(name = "tome", version, about)]
pub struct CliArgs {
    /// Path to the cleaned textbook .txt file
    #[arg(long)]
    pub input: PathBuf,

    /// Path to write the JSON chunk array
    #[arg(long)]
    pub output: PathBuf,

    /// Minimum words per chunk before merging with the next segment [default: 150]
    #[arg(long)]
    pub min_words: Option<usize>,

    /// Maximum words per chunk before splitting at sentences [default: 700]
    #[arg(long)]
    pub max_words: Option<usize>,

    /// Embedding model name [default: all-minilm]
    #[arg(long)]
    pub model: Option<String>,

    /// Texts per embedding request [default: 64]
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Embedding backend: ollama or openai [default: ollama]
    #[arg(long)]
    pub provider: Option<String>,

    /// Config profile (env var prefix), overrides TOME_PROFILE
    #[arg(long)]
    pub profile: Option<String>,

    /// Skip embeddings and write raw chunks only
    #[arg(long)]
    pub no_embeddings: bool,
}
