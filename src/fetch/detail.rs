//! Resolve search hits into detailed pull request records.
//!
//! Each unique hit costs one `gh api` call. A non-zero exit, a timeout, or
//! a malformed body drops that item with a warning and the loop moves on;
//! a fixed pacing sleep separates successive calls as a self-imposed
//! throttle.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeSet;
use std::time::Duration;
use tokio::time::sleep;

use crate::gh::{GhClient, GhError};
use crate::types::{PullRequestDetail, RepoRef};

const DETAIL_TIMEOUT: Duration = Duration::from_secs(30);
const PACING_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Deserialize)]
struct RawDetail {
    number: i64,
    title: String,
    state: String,
    #[serde(default)]
    draft: bool,
    html_url: String,
    created_at: Option<String>,
    updated_at: Option<String>,
    closed_at: Option<String>,
    merged_at: Option<String>,
    #[serde(default)]
    merged: bool,
    merge_commit_sha: Option<String>,
    #[serde(default)]
    labels: Vec<RawLabel>,
    #[serde(default)]
    additions: i64,
    #[serde(default)]
    deletions: i64,
    #[serde(default)]
    changed_files: i64,
    #[serde(default)]
    comments: i64,
    #[serde(default)]
    review_comments: i64,
    base: RawBase,
}

#[derive(Debug, Deserialize)]
struct RawLabel {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawBase {
    repo: RawRepo,
}

#[derive(Debug, Deserialize)]
struct RawRepo {
    full_name: String,
    url: String,
}

impl From<RawDetail> for PullRequestDetail {
    fn from(raw: RawDetail) -> Self {
        Self {
            number: raw.number,
            title: raw.title,
            state: raw.state,
            draft: raw.draft,
            html_url: raw.html_url,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
            closed_at: raw.closed_at,
            merged_at: raw.merged_at,
            merged: raw.merged,
            merge_commit_sha: raw.merge_commit_sha,
            labels: raw.labels.into_iter().map(|l| l.name).collect(),
            additions: raw.additions,
            deletions: raw.deletions,
            changed_files: raw.changed_files,
            comments: raw.comments,
            review_comments: raw.review_comments,
            repo: RepoRef {
                full_name: raw.base.repo.full_name,
                url: raw.base.repo.url,
            },
        }
    }
}

/// Resolve each search hit into a [`PullRequestDetail`], collecting the
/// distinct repositories the resolved pull requests target.
///
/// Failures are per-item: a dropped item never prevents the rest from
/// resolving.
pub async fn resolve_details(
    gh: &GhClient,
    items: Vec<Value>,
) -> (Vec<PullRequestDetail>, Vec<String>) {
    let mut details = Vec::with_capacity(items.len());
    let mut repos: BTreeSet<String> = BTreeSet::new();

    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            sleep(PACING_DELAY).await;
        }
        let Some(locator) = api_locator(item) else {
            println!(
                "Warning: skipping search hit with no usable locator: {}",
                item.get("html_url").and_then(|v| v.as_str()).unwrap_or("?")
            );
            continue;
        };
        match gh
            .api_json(&["api", locator.as_str()], DETAIL_TIMEOUT)
            .await
            .and_then(parse_detail)
        {
            Ok(detail) => {
                repos.insert(detail.repo.full_name.clone());
                details.push(detail);
            }
            Err(err) => {
                println!("Warning: skipping {}: {}", locator, err);
            }
        }
    }

    (details, repos.into_iter().collect())
}

pub(crate) fn parse_detail(payload: Value) -> Result<PullRequestDetail, GhError> {
    let raw: RawDetail = serde_json::from_value(payload)?;
    Ok(raw.into())
}

/// API locator for a search hit: the nested `pull_request.url` when the
/// search result carries one, else reconstructed from the web URL.
fn api_locator(item: &Value) -> Option<String> {
    if let Some(url) = item
        .pointer("/pull_request/url")
        .and_then(|v| v.as_str())
    {
        return Some(url.to_string());
    }
    item.get("html_url")
        .and_then(|v| v.as_str())
        .and_then(locator_from_html_url)
}

/// `https://github.com/o/r/pull/42` -> `repos/o/r/pulls/42`.
pub fn locator_from_html_url(html_url: &str) -> Option<String> {
    let rest = html_url.strip_prefix("https://github.com/")?;
    let mut parts = rest.split('/');
    let owner = parts.next().filter(|s| !s.is_empty())?;
    let repo = parts.next().filter(|s| !s.is_empty())?;
    if parts.next()? != "pull" {
        return None;
    }
    let number: u64 = parts.next()?.parse().ok()?;
    Some(format!("repos/{}/{}/pulls/{}", owner, repo, number))
}
