use std::env;

use serde::{Deserialize, Serialize};

use crate::error::{ChunkError, Result};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_or(profile: &str, key: &str, default: &str) -> String {
    profiled_env_opt(profile, key).unwrap_or_else(|| default.to_string())
}

fn profiled_env_usize(profile: &str, key: &str, default: usize) -> usize {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub chunking: ChunkingConfig,
    pub embedding: EmbeddingConfig,
    pub ollama: OllamaConfig,
    pub openai: OpenAiConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `TOME_PROFILE` env var. When set (e.g. `PROD`),
    /// every key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_or("TOME_PROFILE", "").to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            chunking: ChunkingConfig::from_env_profiled(p),
            embedding: EmbeddingConfig::from_env_profiled(p),
            ollama: OllamaConfig::from_env_profiled(p),
            openai: OpenAiConfig::from_env_profiled(p),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a redacted summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!(
            "  chunking:    min_words={}, max_words={}",
            self.chunking.min_words,
            self.chunking.max_words
        );
        tracing::info!(
            "  embedding:   provider={}, model={}, batch_size={}",
            self.embedding.provider,
            self.embedding.model,
            self.embedding.batch_size
        );
        tracing::info!("  ollama:      url={}", self.ollama.url);
        tracing::info!(
            "  openai:      base_url={}, key={}",
            self.openai.base_url.as_deref().unwrap_or("(default)"),
            if self.openai.is_configured() { "set" } else { "(none)" }
        );
    }
}

// ── Chunking window ───────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    pub min_words: usize,
    pub max_words: usize,
}

impl ChunkingConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            min_words: profiled_env_usize(p, "CHUNK_MIN_WORDS", 150),
            max_words: profiled_env_usize(p, "CHUNK_MAX_WORDS", 700),
        }
    }

    /// Reject empty or inverted windows.
    pub fn validate(&self) -> Result<()> {
        if self.min_words == 0 || self.max_words == 0 || self.min_words > self.max_words {
            return Err(ChunkError::InvalidWindow {
                min_words: self.min_words,
                max_words: self.max_words,
            });
        }
        Ok(())
    }
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            min_words: 150,
            max_words: 700,
        }
    }
}

// ── Embedding ─────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// "ollama", "openai"
    pub provider: String,
    pub model: String,
    /// Expected vector length; unchecked when unset.
    pub dimensions: Option<usize>,
    pub batch_size: usize,
    pub cache_size: usize,
}

impl EmbeddingConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            provider: profiled_env_or(p, "EMBEDDING_PROVIDER", "ollama"),
            model: profiled_env_or(p, "EMBEDDING_MODEL", "all-minilm"),
            dimensions: profiled_env_opt(p, "EMBEDDING_DIMENSIONS").and_then(|v| v.parse().ok()),
            batch_size: profiled_env_usize(p, "EMBEDDING_BATCH_SIZE", 64),
            cache_size: profiled_env_usize(p, "EMBEDDING_CACHE_SIZE", 4096),
        }
    }
}

// ── Ollama (local models) ─────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    pub url: String,
}

impl OllamaConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            url: profiled_env_or(p, "OLLAMA_URL", "http://localhost:11434"),
        }
    }
}

// ── OpenAI-compatible ─────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl OpenAiConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            api_key: profiled_env_opt(p, "OPENAI_API_KEY"),
            base_url: profiled_env_opt(p, "OPENAI_BASE_URL"),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}
