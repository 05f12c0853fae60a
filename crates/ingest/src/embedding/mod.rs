pub mod batcher;
pub mod cache;
pub mod ollama;
pub mod openai;
pub mod traits;

use std::sync::Arc;

use tome_core::Config;

pub use batcher::EmbeddingBatcher;
pub use cache::EmbeddingCache;
pub use ollama::OllamaEmbedder;
pub use openai::OpenAiEmbedder;
pub use traits::{Embedder, EmbeddingError};

/// Build the embedding backend named by `provider` ("ollama" or "openai").
pub fn build_embedder(
    provider: &str,
    model: &str,
    config: &Config,
) -> Result<Arc<dyn Embedder>, EmbeddingError> {
    let dimensions = config.embedding.dimensions;
    match provider {
        "ollama" => Ok(Arc::new(OllamaEmbedder::new(
            config.ollama.url.clone(),
            model.to_string(),
            dimensions,
        ))),
        "openai" => {
            let api_key = config.openai.api_key.clone().ok_or_else(|| {
                EmbeddingError::Api("OPENAI_API_KEY is not set".to_string())
            })?;
            Ok(Arc::new(OpenAiEmbedder::new(
                api_key,
                model.to_string(),
                config.openai.base_url.clone(),
                dimensions,
            )))
        }
        other => Err(EmbeddingError::UnknownProvider(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_known_providers() {
        let mut config = Config::for_profile("EMBEDTEST");
        config.openai.api_key = Some("sk-test".into());

        let ollama = build_embedder("ollama", "all-minilm", &config).unwrap();
        assert_eq!(ollama.model(), "all-minilm");

        let openai = build_embedder("openai", "text-embedding-3-small", &config).unwrap();
        assert_eq!(openai.model(), "text-embedding-3-small");
    }

    #[test]
    fn openai_requires_key() {
        let mut config = Config::for_profile("EMBEDTEST");
        config.openai.api_key = None;
        assert!(matches!(
            build_embedder("openai", "m", &config),
            Err(EmbeddingError::Api(_))
        ));
    }

    #[test]
    fn unknown_provider_rejected() {
        let config = Config::for_profile("EMBEDTEST");
        assert!(matches!(
            build_embedder("onnx", "m", &config),
            Err(EmbeddingError::UnknownProvider(p)) if p == "onnx"
        ));
    }
}
