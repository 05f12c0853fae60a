use tome_core::config::ChunkingConfig;
use tome_core::Config;

use crate::cli::CliArgs;

/// Effective run settings: CLI flag > environment config > default.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub window: ChunkingConfig,
    pub provider: String,
    pub model: String,
    pub batch_size: usize,
    pub embed: bool,
}

impl RunSettings {
    pub fn resolve(args: &CliArgs, config: &Config) -> Self {
        Self {
            window: ChunkingConfig {
                min_words: args.min_words.unwrap_or(config.chunking.min_words),
                max_words: args.max_words.unwrap_or(config.chunking.max_words),
            },
            provider: args
                .provider
                .clone()
                .unwrap_or_else(|| config.embedding.provider.clone()),
            model: args
                .model
                .clone()
                .unwrap_or_else(|| config.embedding.model.clone()),
            batch_size: args.batch_size.unwrap_or(config.embedding.batch_size),
            embed: !args.no_embeddings,
        }
    }
}
