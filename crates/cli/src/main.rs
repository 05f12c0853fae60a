mod cli;
mod settings;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use tome_core::config::load_dotenv;
use tome_core::{ChunkStats, Config};
use tome_ingest::embedding::{build_embedder, EmbeddingBatcher};
use tome_ingest::{chunk_lines, read_lines, to_records, write_chunks, ChunkConfig};

use crate::cli::CliArgs;
use crate::settings::RunSettings;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    load_dotenv();
    let config = match args.profile.as_deref() {
        Some(profile) => Config::for_profile(profile),
        None => Config::from_env(),
    };
    let settings = RunSettings::resolve(&args, &config);
    settings
        .window
        .validate()
        .context("invalid --min-words/--max-words")?;
    config.log_summary();

    let lines = read_lines(&args.input)
        .with_context(|| format!("failed to read input: {}", args.input.display()))?;

    let window = ChunkConfig::from(&settings.window);
    let mut records = to_records(&chunk_lines(&lines, &window));

    let stats = ChunkStats::from_records(&records, window.min_words, window.max_words);
    info!(
        lines = lines.len(),
        chunks = stats.chunks,
        total_words = stats.total_words,
        min = stats.min_words,
        max = stats.max_words,
        mean = stats.mean_words,
        undersized = stats.undersized,
        oversized = stats.oversized,
        "chunking complete"
    );

    if settings.embed {
        let embedder = build_embedder(&settings.provider, &settings.model, &config)
            .context("failed to create embedding backend")?;
        let mut batcher = EmbeddingBatcher::new(embedder, settings.batch_size)
            .with_cache_capacity(config.embedding.cache_size);
        batcher
            .attach(&mut records)
            .await
            .with_context(|| format!("embedding with model '{}' failed", settings.model))?;
    } else {
        info!("embeddings skipped");
    }

    write_chunks(&args.output, &records)
        .with_context(|| format!("failed to write output: {}", args.output.display()))?;

    info!(
        output = %args.output.display(),
        chunks = records.len(),
        embedded = settings.embed,
        "done"
    );
    Ok(())
}
