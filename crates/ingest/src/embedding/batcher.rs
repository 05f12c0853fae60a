use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tome_core::ChunkRecord;
use tracing::{debug, info};

use super::cache::EmbeddingCache;
use super::traits::{Embedder, EmbeddingError};

const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// Sends texts to an [`Embedder`] in fixed-size batches and hands back one
/// vector per text, in input order.
pub struct EmbeddingBatcher {
    embedder: Arc<dyn Embedder>,
    batch_size: usize,
    cache: EmbeddingCache,
}

impl EmbeddingBatcher {
    pub fn new(embedder: Arc<dyn Embedder>, batch_size: usize) -> Self {
        Self {
            embedder,
            batch_size: batch_size.max(1),
            cache: EmbeddingCache::new(DEFAULT_CACHE_CAPACITY),
        }
    }

    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache = EmbeddingCache::new(capacity);
        self
    }

    pub fn cache(&self) -> &EmbeddingCache {
        &self.cache
    }

    /// Embed every text. Identical texts are sent once; cached texts are not
    /// sent at all. Fails if the backend returns the wrong number of vectors
    /// or vectors of differing length.
    pub async fn embed_all(&mut self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let model = self.embedder.model().to_string();
        let mut resolved: HashMap<&str, Vec<f32>> = HashMap::new();
        let mut queued: HashSet<&str> = HashSet::new();
        let mut missing: Vec<&str> = Vec::new();

        for &text in texts {
            if resolved.contains_key(text) || queued.contains(text) {
                continue;
            }
            match self.cache.get(&model, text) {
                Some(vector) => {
                    resolved.insert(text, vector);
                }
                None => {
                    queued.insert(text);
                    missing.push(text);
                }
            }
        }

        for (n, batch) in missing.chunks(self.batch_size).enumerate() {
            let vectors = self.embedder.embed_batch(batch).await?;
            if vectors.len() != batch.len() {
                return Err(EmbeddingError::CountMismatch {
                    expected: batch.len(),
                    actual: vectors.len(),
                });
            }
            for (&text, vector) in batch.iter().zip(vectors) {
                self.cache.put(&model, text, vector.clone());
                resolved.insert(text, vector);
            }
            debug!(batch = n, size = batch.len(), "embedded batch");
        }

        let embeddings = texts
            .iter()
            .map(|text| resolved.get(text).cloned())
            .collect::<Option<Vec<_>>>()
            .ok_or(EmbeddingError::CountMismatch {
                expected: texts.len(),
                actual: resolved.len(),
            })?;

        check_dimensions(&embeddings, self.embedder.dimensions())?;

        info!(
            model = %model,
            texts = texts.len(),
            sent = missing.len(),
            cache_hit_rate = self.cache.hit_rate(),
            "embeddings computed"
        );
        Ok(embeddings)
    }

    /// Attach an embedding to every record, in order. On error no record is
    /// modified.
    pub async fn attach(&mut self, records: &mut [ChunkRecord]) -> Result<(), EmbeddingError> {
        let texts: Vec<&str> = records.iter().map(|r| r.text.as_str()).collect();
        let embeddings = self.embed_all(&texts).await?;

        for (record, embedding) in records.iter_mut().zip(embeddings) {
            record.embedding = Some(embedding);
        }
        Ok(())
    }
}

/// All vectors must share one length, and match `expected` when given.
fn check_dimensions(
    embeddings: &[Vec<f32>],
    expected: Option<usize>,
) -> Result<(), EmbeddingError> {
    let Some(first) = embeddings.first() else {
        return Ok(());
    };
    let expected = expected.unwrap_or(first.len());
    match embeddings.iter().find(|v| v.len() != expected) {
        Some(bad) => Err(EmbeddingError::DimensionMismatch {
            expected,
            actual: bad.len(),
        }),
        None => Ok(()),
    }
}
