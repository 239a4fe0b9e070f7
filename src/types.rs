//! # Common Types
//!
//! The record shapes written into a period report and the index. Timestamps
//! stay in the RFC 3339 string form the GitHub API returns; absent values
//! serialize as `null`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reference to the repository a pull request targets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepoRef {
    /// `owner/name` form, e.g. `rust-lang/rust`
    pub full_name: String,
    /// API URL of the repository
    pub url: String,
}

/// The enriched, normalized representation of a pull request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestDetail {
    pub number: i64,
    pub title: String,
    pub state: String,
    pub draft: bool,
    pub html_url: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub closed_at: Option<String>,
    pub merged_at: Option<String>,
    pub merged: bool,
    pub merge_commit_sha: Option<String>,
    /// Label names only
    pub labels: Vec<String>,
    pub additions: i64,
    pub deletions: i64,
    pub changed_files: i64,
    pub comments: i64,
    pub review_comments: i64,
    pub repo: RepoRef,
}

/// A single commit authored in the period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommitRecord {
    pub sha: String,
    pub message: String,
    /// `commit.author.date` as reported by the API
    pub date: String,
    pub url: String,
}

/// One period's collected activity, written to `<start>_to_<end>.json`.
///
/// Pull requests are ordered by creation time descending; commits within a
/// repository are ordered by date descending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputDocument {
    pub user: String,
    pub period_start: String,
    pub period_end: String,
    pub generated_at: String,
    pub pull_requests: Vec<PullRequestDetail>,
    pub commits: BTreeMap<String, Vec<CommitRecord>>,
}

/// One line of `index.json`: a period that has been fetched at some point.
///
/// The index holds at most one entry per `(start, end)` pair and is kept
/// sorted by `start` descending.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexEntry {
    pub start: String,
    pub end: String,
    /// Report file name relative to the data directory
    pub file: String,
    pub pr_count: usize,
    pub commit_count: usize,
}
