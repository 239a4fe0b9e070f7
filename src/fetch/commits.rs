//! Fetch commits authored by the user, per repository.
//!
//! One paginated query per repository, bounded to the period in UTC. A
//! failed or malformed response skips that repository with a warning.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;

use crate::gh::{GhClient, GhError, Pages};
use crate::period::Period;
use crate::types::CommitRecord;

const COMMIT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Deserialize)]
struct RawCommit {
    sha: String,
    html_url: String,
    commit: RawCommitInner,
}

#[derive(Debug, Deserialize)]
struct RawCommitInner {
    message: String,
    author: Option<RawCommitAuthor>,
}

#[derive(Debug, Deserialize)]
struct RawCommitAuthor {
    date: Option<String>,
}

/// Commits authored by `user` within the period, grouped by repository.
/// Repositories with no commits in range are omitted.
pub async fn fetch_commits(
    gh: &GhClient,
    user: &str,
    period: &Period,
    repos: &[String],
) -> BTreeMap<String, Vec<CommitRecord>> {
    let mut by_repo = BTreeMap::new();
    for repo in repos {
        match commits_for_repo(gh, user, period, repo).await {
            Ok(commits) if commits.is_empty() => {}
            Ok(commits) => {
                println!("Fetched {} commit(s) from {}", commits.len(), repo);
                by_repo.insert(repo.clone(), commits);
            }
            Err(err) => {
                println!("Warning: skipping commits for {}: {}", repo, err);
            }
        }
    }
    by_repo
}

async fn commits_for_repo(
    gh: &GhClient,
    user: &str,
    period: &Period,
    repo: &str,
) -> Result<Vec<CommitRecord>, GhError> {
    let path = format!(
        "repos/{}/commits?author={}&since={}T00:00:00Z&until={}T23:59:59Z&per_page=100",
        repo, user, period.start, period.end
    );
    let payload = gh
        .api_json(&["api", path.as_str(), "--paginate", "--slurp"], COMMIT_TIMEOUT)
        .await?;
    let pages: Pages = serde_json::from_value(payload)?;
    parse_commits(pages.flatten())
}

/// Normalize raw commit objects and sort them by date descending.
pub(crate) fn parse_commits(items: Vec<Value>) -> Result<Vec<CommitRecord>, GhError> {
    let mut commits = Vec::with_capacity(items.len());
    for item in items {
        let raw: RawCommit = serde_json::from_value(item)?;
        commits.push(CommitRecord {
            sha: raw.sha,
            message: raw.commit.message,
            date: raw
                .commit
                .author
                .and_then(|a| a.date)
                .unwrap_or_default(),
            url: raw.html_url,
        });
    }
    commits.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(commits)
}
