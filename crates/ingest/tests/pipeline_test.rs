//! File-to-file pipeline tests: read a textbook from disk, chunk it, embed
//! it with a fake backend, write JSON, and read it back.

use std::sync::Arc;

use async_trait::async_trait;
use tempfile::TempDir;

use tome_core::ChunkStats;
use tome_ingest::embedding::{Embedder, EmbeddingBatcher, EmbeddingError};
use tome_ingest::{chunk_lines, read_chunks, read_lines, to_records, write_chunks, ChunkConfig};

struct ConstEmbedder;

#[async_trait]
impl Embedder for ConstEmbedder {
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        Ok(texts
            .iter()
            .map(|t| vec![t.split_whitespace().count() as f32, 1.0, 0.5])
            .collect())
    }

    fn model(&self) -> &str {
        "const"
    }

    fn dimensions(&self) -> Option<usize> {
        Some(3)
    }
}

fn paragraph(tag: &str, sentences: usize) -> String {
    (0..sentences)
        .map(|i| format!("The {tag} paragraph sentence number {i} talks about the body."))
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_textbook(dir: &TempDir) -> std::path::PathBuf {
    let mut text = String::from("Human Biology\n\n");
    text.push_str("CHAPTER 1. Introduction\n");
    text.push_str(&paragraph("intro", 5));
    text.push('\n');
    text.push_str("1.1 Levels of Organization\n");
    for _ in 0..6 {
        text.push_str(&paragraph("levels", 6));
        text.push('\n');
    }
    text.push_str("1.2 Homeostasis\n");
    text.push_str(&paragraph("homeostasis", 120));
    text.push('\n');
    text.push_str("CHAPTER 2. Chemistry\r\n");
    text.push_str(&paragraph("chemistry", 30));
    text.push('\n');
    text.push_str("GLOSSARY\n");
    text.push_str("atom: smallest unit of matter\n");
    text.push_str("cell: smallest unit of life\n");

    let path = dir.path().join("book.txt");
    let mut bytes = text.into_bytes();
    // Stray invalid byte in the glossary is dropped on read.
    bytes.extend_from_slice(b"tissue: \xffgroup of cells\n");
    std::fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn chunks_textbook_file() {
    let dir = TempDir::new().unwrap();
    let input = write_textbook(&dir);
    let output = dir.path().join("out").join("chunks.json");

    let lines = read_lines(&input).unwrap();
    let config = ChunkConfig::default();
    let records = to_records(&chunk_lines(&lines, &config));
    write_chunks(&output, &records).unwrap();

    let loaded = read_chunks(&output).unwrap();
    assert_eq!(loaded, records);

    // Homeostasis (1200+ words) is split; pieces share its line range.
    let homeostasis: Vec<_> = records
        .iter()
        .filter(|r| r.section.as_deref() == Some("1.2"))
        .collect();
    assert!(homeostasis.len() >= 2);
    assert!(homeostasis.iter().all(|r| r.word_count <= config.max_words));
    assert!(homeostasis
        .windows(2)
        .all(|w| (w[0].start_line, w[0].end_line) == (w[1].start_line, w[1].end_line)));

    let last = records.last().unwrap();
    assert_eq!(last.chapter.as_deref(), Some("Glossary"));
    assert!(last.text.ends_with("tissue: group of cells"));
    assert_eq!(last.end_line, lines.len());

    for (i, r) in records.iter().enumerate() {
        assert_eq!(r.id, i);
    }

    let stats = ChunkStats::from_records(&records, config.min_words, config.max_words);
    assert_eq!(stats.chunks, records.len());
    assert_eq!(stats.oversized, 0);
}

#[test]
fn json_uses_null_for_missing_labels() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("front.txt");
    std::fs::write(&input, "Preface only, no headings at all.\n").unwrap();
    let output = dir.path().join("front.json");

    let records = to_records(&chunk_lines(read_lines(&input).unwrap(), &ChunkConfig::default()));
    write_chunks(&output, &records).unwrap();

    let raw = std::fs::read_to_string(&output).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = &json[0];
    assert_eq!(first["id"], 0);
    assert!(first["chapter"].is_null());
    assert!(first["section"].is_null());
    assert!(first["heading"].is_null());
    assert_eq!(first["start_line"], 1);
    assert_eq!(first["end_line"], 1);
    assert_eq!(first["word_count"], 6);
    assert!(first.get("embedding").is_none());
    // Pretty-printed with two-space indent.
    assert!(raw.contains("\n  {\n    \"id\": 0"));
}

#[tokio::test]
async fn embeddings_round_trip_through_json() {
    let dir = TempDir::new().unwrap();
    let input = write_textbook(&dir);
    let output = dir.path().join("embedded.json");

    let mut records = to_records(&chunk_lines(read_lines(&input).unwrap(), &ChunkConfig::default()));
    let mut batcher = EmbeddingBatcher::new(Arc::new(ConstEmbedder), 2);
    batcher.attach(&mut records).await.unwrap();
    write_chunks(&output, &records).unwrap();

    let loaded = read_chunks(&output).unwrap();
    assert_eq!(loaded.len(), records.len());
    for r in &loaded {
        let embedding = r.embedding.as_ref().unwrap();
        assert_eq!(embedding.len(), 3);
        assert_eq!(embedding[0], r.word_count as f32);
    }
}

#[test]
fn missing_input_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("never.json");

    assert!(read_lines(dir.path().join("absent.txt")).is_err());
    assert!(!output.exists());
}
