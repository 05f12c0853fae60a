use std::path::Path;

use tome_core::{ChunkRecord, Result};
use tracing::debug;

/// Write chunk records as a pretty-printed JSON array, creating parent
/// directories as needed.
pub fn write_chunks(path: impl AsRef<Path>, records: &[ChunkRecord]) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(records)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)?;

    debug!(path = %path.display(), chunks = records.len(), "chunks written");
    Ok(())
}

/// Load chunk records previously written by [`write_chunks`].
pub fn read_chunks(path: impl AsRef<Path>) -> Result<Vec<ChunkRecord>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
