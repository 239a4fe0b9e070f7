//! Assemble and persist the period's output document.

use anyhow::{Context, Result};
use chrono::Utc;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::period::Period;
use crate::types::{CommitRecord, OutputDocument, PullRequestDetail};

/// Build the output document. Pull requests are sorted by creation time
/// descending; a missing `created_at` compares as the empty string and so
/// sorts after every present timestamp.
pub fn assemble(
    user: &str,
    period: &Period,
    mut pull_requests: Vec<PullRequestDetail>,
    commits: BTreeMap<String, Vec<CommitRecord>>,
) -> OutputDocument {
    pull_requests.sort_by(|a, b| created_key(b).cmp(created_key(a)));
    OutputDocument {
        user: user.to_string(),
        period_start: period.start.to_string(),
        period_end: period.end.to_string(),
        generated_at: Utc::now().to_rfc3339(),
        pull_requests,
        commits,
    }
}

fn created_key(pr: &PullRequestDetail) -> &str {
    pr.created_at.as_deref().unwrap_or("")
}

/// Write the document pretty-printed to `<data_dir>/<start>_to_<end>.json`.
pub fn write_report(data_dir: &Path, period: &Period, doc: &OutputDocument) -> Result<PathBuf> {
    let path = data_dir.join(period.file_name());
    let body = serde_json::to_string_pretty(doc).context("failed to serialize report")?;
    fs::write(&path, body)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(path)
}
