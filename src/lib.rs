//! # GitHub Activity Fetcher
//!
//! `gh-activity` collects a developer's GitHub activity (pull requests and
//! commits) over a calendar-date period and persists it as local JSON,
//! maintaining a rolling index of every period ever fetched.
//!
//! All GitHub access is delegated to the external `gh` CLI: authentication
//! and pagination are its problem. This crate shells out to `gh api ...`,
//! decodes the JSON it prints, and shapes the records.
//!
//! ## Pipeline
//!
//! - Resolve the period (explicit dates or the last completed
//!   Monday-Sunday fortnight)
//! - Resolve the authenticated user via `gh api user`
//! - Search pull requests created and merged in the period, deduplicated
//!   by canonical URL
//! - Resolve each hit into a detail record, skipping failures per item
//! - Fetch commits authored in the period for each repository touched
//! - Write `data/<start>_to_<end>.json` and update `data/index.json`

pub mod fetch;
pub mod gh;
pub mod period;
pub mod report;
pub mod types;

// Re-export main types for convenience
pub use period::Period;
pub use types::{CommitRecord, IndexEntry, OutputDocument, PullRequestDetail};
