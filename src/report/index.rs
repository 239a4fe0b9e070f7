//! The rolling index of fetched periods.
//!
//! `index.json` is read, modified, and rewritten wholesale each run: any
//! entry for the same period is replaced, never duplicated, and entries
//! stay sorted by start date descending.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::types::IndexEntry;

const INDEX_FILE: &str = "index.json";

/// Insert `entry` into `<data_dir>/index.json`, replacing any existing
/// entry for the same `(start, end)` period.
pub fn update_index(data_dir: &Path, entry: IndexEntry) -> Result<()> {
    let path = data_dir.join(INDEX_FILE);
    let mut entries = load_index(&path)?;
    entries.retain(|e| !(e.start == entry.start && e.end == entry.end));
    entries.push(entry);
    entries.sort_by(|a, b| b.start.cmp(&a.start));

    let mut body =
        serde_json::to_string_pretty(&entries).context("failed to serialize index")?;
    body.push('\n');
    fs::write(&path, body)
        .with_context(|| format!("failed to write index to {}", path.display()))?;
    Ok(())
}

fn load_index(path: &Path) -> Result<Vec<IndexEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let body = fs::read_to_string(path)
        .with_context(|| format!("failed to read index at {}", path.display()))?;
    serde_json::from_str(&body)
        .with_context(|| format!("malformed index at {}", path.display()))
}
