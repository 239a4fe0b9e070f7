//! Search for the user's pull requests in the period.
//!
//! Two queries are issued (by creation date and by merge date) and their
//! hits merged. A failed query degrades to an empty result set with a
//! warning; it never aborts the run.

use serde_json::Value;
use std::collections::HashSet;
use std::time::Duration;

use crate::gh::{GhClient, Pages};
use crate::period::Period;

const SEARCH_TIMEOUT: Duration = Duration::from_secs(60);

/// All pull requests the user created or merged in the period, unique by
/// canonical web URL.
pub async fn search_pull_requests(gh: &GhClient, user: &str, period: &Period) -> Vec<Value> {
    let created = run_query(
        gh,
        &format!(
            "type:pr author:{} created:{}..{}",
            user, period.start, period.end
        ),
        "created",
    )
    .await;
    let merged = run_query(
        gh,
        &format!(
            "type:pr author:{} merged:{}..{}",
            user, period.start, period.end
        ),
        "merged",
    )
    .await;
    dedup_by_url(created, merged)
}

async fn run_query(gh: &GhClient, query: &str, which: &str) -> Vec<Value> {
    let field = format!("q={}", query);
    // `gh api` rejects `--slurp` combined with `--jq`, so pages come back
    // as whole `{total_count, items}` objects and `items` is pulled out
    // here instead.
    let args = [
        "api",
        "-X",
        "GET",
        "search/issues",
        "-f",
        field.as_str(),
        "--paginate",
        "--slurp",
    ];
    let result = gh
        .api_json(&args, SEARCH_TIMEOUT)
        .await
        .and_then(|payload| Ok(serde_json::from_value::<Pages>(payload)?));
    match result {
        Ok(pages) => collect_items(pages.flatten()),
        Err(err) => {
            println!("Warning: {} search failed, treating as empty: {}", which, err);
            Vec::new()
        }
    }
}

/// Extract each search page's `items` array into one flat sequence,
/// preserving relative order. Pages without an `items` array contribute
/// nothing.
pub(crate) fn collect_items(pages: Vec<Value>) -> Vec<Value> {
    let mut items = Vec::new();
    for mut page in pages {
        if let Some(Value::Array(page_items)) = page.get_mut("items").map(Value::take) {
            items.extend(page_items);
        }
    }
    items
}

/// Merge the two result sets, keeping the first occurrence of each
/// `html_url`. Concatenation order is created-then-merged, so the created
/// set's copy wins when both contain the same pull request. Items without
/// an `html_url` are dropped.
pub fn dedup_by_url(created: Vec<Value>, merged: Vec<Value>) -> Vec<Value> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique = Vec::new();
    for item in created.into_iter().chain(merged) {
        let Some(url) = item.get("html_url").and_then(|v| v.as_str()) else {
            continue;
        };
        if seen.insert(url.to_string()) {
            unique.push(item);
        }
    }
    unique
}
