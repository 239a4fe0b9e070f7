//! Paginated `gh api` payloads.
//!
//! `gh api --paginate --slurp` prints either a bare array of records (one
//! page) or an array of per-page arrays. Both shapes are normalized into
//! one flat sequence right at the boundary so nothing downstream branches
//! on them. Any other top-level shape is a decode error for that call.

use serde::Deserialize;
use serde_json::Value;

/// The two shapes a paginated payload arrives in.
///
/// `Nested` must be tried first: every nested payload also deserializes as
/// a bare `Vec<Value>`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Pages {
    Nested(Vec<Vec<Value>>),
    Flat(Vec<Value>),
}

impl Pages {
    /// Flatten into a single sequence, preserving relative order.
    pub fn flatten(self) -> Vec<Value> {
        match self {
            Pages::Flat(items) => items,
            Pages::Nested(pages) => pages.into_iter().flatten().collect(),
        }
    }
}
