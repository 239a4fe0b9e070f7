//! GitHub Activity Fetcher
//!
//! One-shot CLI: fetch the authenticated user's pull requests and commits
//! for a period and persist them under `./data`.

use anyhow::{anyhow, bail, Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tokio::runtime::Runtime;

use gh_activity::gh::GhClient;
use gh_activity::types::IndexEntry;
use gh_activity::{fetch, report, Period};

const DATA_DIR: &str = "data";
const IDENTITY_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// First day of the period (YYYY-MM-DD); give both dates or neither
    start_date: Option<NaiveDate>,

    /// Last day of the period (YYYY-MM-DD)
    end_date: Option<NaiveDate>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let period = match (args.start_date, args.end_date) {
        (Some(start), Some(end)) => Period::new(start, end).map_err(|e| anyhow!(e))?,
        (None, None) => Period::default_for(Utc::now().date_naive()),
        _ => bail!("provide both START_DATE and END_DATE, or neither"),
    };

    let rt = Runtime::new().context("failed to start async runtime")?;
    rt.block_on(run(period))
}

async fn run(period: Period) -> Result<()> {
    let data_dir = PathBuf::from(DATA_DIR);
    fs::create_dir_all(&data_dir)
        .with_context(|| format!("failed to create data directory {}", data_dir.display()))?;

    // Scratch cwd for every gh invocation, removed on all exit paths.
    let workdir = tempfile::tempdir().context("failed to create scratch directory")?;
    let gh = GhClient::new(workdir.path());

    let user = gh
        .current_user(IDENTITY_TIMEOUT)
        .await
        .context("failed to resolve the authenticated user via gh")?;
    println!("Fetching GitHub activity for {} over {}", user, period);

    let hits = fetch::search_pull_requests(&gh, &user, &period).await;
    println!("Found {} unique pull request(s)", hits.len());

    let (details, repos) = fetch::resolve_details(&gh, hits).await;
    println!(
        "Resolved {} pull request(s) across {} repository(ies)",
        details.len(),
        repos.len()
    );

    let commits = fetch::fetch_commits(&gh, &user, &period, &repos).await;

    let doc = report::assemble(&user, &period, details, commits);
    let commit_count = doc.commits.values().map(Vec::len).sum();
    let path = report::write_report(&data_dir, &period, &doc)?;
    report::update_index(
        &data_dir,
        IndexEntry {
            start: period.start.to_string(),
            end: period.end.to_string(),
            file: period.file_name(),
            pr_count: doc.pull_requests.len(),
            commit_count,
        },
    )?;

    println!(
        "Wrote {} ({} pull requests, {} commits)",
        path.display(),
        doc.pull_requests.len(),
        commit_count
    );
    Ok(())
}
