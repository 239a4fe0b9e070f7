use gh_activity::report;
use gh_activity::types::{CommitRecord, IndexEntry, OutputDocument, PullRequestDetail, RepoRef};
use gh_activity::Period;
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;

fn period(start: &str, end: &str) -> Period {
    Period::new(start.parse().unwrap(), end.parse().unwrap()).unwrap()
}

fn pr(number: i64, created_at: &str) -> PullRequestDetail {
    PullRequestDetail {
        number,
        title: format!("PR {}", number),
        state: "closed".to_string(),
        draft: false,
        html_url: format!("https://github.com/o/r/pull/{}", number),
        created_at: Some(created_at.to_string()),
        updated_at: None,
        closed_at: None,
        merged_at: None,
        merged: true,
        merge_commit_sha: None,
        labels: vec!["enhancement".to_string()],
        additions: 10,
        deletions: 2,
        changed_files: 1,
        comments: 0,
        review_comments: 0,
        repo: RepoRef {
            full_name: "o/r".to_string(),
            url: "https://api.github.com/repos/o/r".to_string(),
        },
    }
}

fn commit(sha: &str, date: &str) -> CommitRecord {
    CommitRecord {
        sha: sha.to_string(),
        message: format!("commit {}", sha),
        date: date.to_string(),
        url: format!("https://github.com/o/r/commit/{}", sha),
    }
}

fn index_entry(p: &Period, pr_count: usize, commit_count: usize) -> IndexEntry {
    IndexEntry {
        start: p.start.to_string(),
        end: p.end.to_string(),
        file: p.file_name(),
        pr_count,
        commit_count,
    }
}

#[test]
fn test_full_report_workflow() {
    let data_dir = TempDir::new().unwrap();
    let p = period("2026-08-10", "2026-08-23");

    let mut commits = BTreeMap::new();
    commits.insert(
        "o/r".to_string(),
        vec![commit("bbb", "2026-08-12T08:00:00Z"), commit("aaa", "2026-08-10T08:00:00Z")],
    );
    let doc = report::assemble(
        "octocat",
        &p,
        vec![pr(1, "2026-08-11T09:00:00Z"), pr(2, "2026-08-14T09:00:00Z")],
        commits,
    );

    let path = report::write_report(data_dir.path(), &p, &doc).unwrap();
    report::update_index(data_dir.path(), index_entry(&p, doc.pull_requests.len(), 2)).unwrap();

    // Report round-trips and is sorted newest-first.
    let written: OutputDocument =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written.user, "octocat");
    assert_eq!(written.pull_requests[0].number, 2);
    assert_eq!(written.commits["o/r"].len(), 2);

    // Index has exactly one entry pointing at the report file.
    let index: Vec<IndexEntry> =
        serde_json::from_str(&fs::read_to_string(data_dir.path().join("index.json")).unwrap())
            .unwrap();
    assert_eq!(index.len(), 1);
    assert_eq!(index[0].file, "2026-08-10_to_2026-08-23.json");
    assert_eq!(index[0].pr_count, 2);
    assert_eq!(index[0].commit_count, 2);
}

#[test]
fn test_rerun_overwrites_report_and_index_entry() {
    let data_dir = TempDir::new().unwrap();
    let p = period("2026-08-10", "2026-08-23");

    let first = report::assemble("octocat", &p, vec![pr(1, "2026-08-11T09:00:00Z")], BTreeMap::new());
    report::write_report(data_dir.path(), &p, &first).unwrap();
    report::update_index(data_dir.path(), index_entry(&p, 1, 0)).unwrap();

    let second = report::assemble(
        "octocat",
        &p,
        vec![pr(1, "2026-08-11T09:00:00Z"), pr(2, "2026-08-14T09:00:00Z")],
        BTreeMap::new(),
    );
    report::write_report(data_dir.path(), &p, &second).unwrap();
    report::update_index(data_dir.path(), index_entry(&p, 2, 0)).unwrap();

    let written: OutputDocument = serde_json::from_str(
        &fs::read_to_string(data_dir.path().join(p.file_name())).unwrap(),
    )
    .unwrap();
    assert_eq!(written.pull_requests.len(), 2);

    let index: Vec<IndexEntry> =
        serde_json::from_str(&fs::read_to_string(data_dir.path().join("index.json")).unwrap())
            .unwrap();
    assert_eq!(index.len(), 1);
    assert_eq!(index[0].pr_count, 2);
}

#[test]
fn test_index_accumulates_periods_newest_first() {
    let data_dir = TempDir::new().unwrap();
    let older = period("2026-07-27", "2026-08-09");
    let newer = period("2026-08-10", "2026-08-23");

    for p in [&older, &newer] {
        let doc = report::assemble("octocat", p, vec![], BTreeMap::new());
        report::write_report(data_dir.path(), p, &doc).unwrap();
        report::update_index(data_dir.path(), index_entry(p, 0, 0)).unwrap();
    }

    let body = fs::read_to_string(data_dir.path().join("index.json")).unwrap();
    assert!(body.ends_with('\n'));
    let index: Vec<IndexEntry> = serde_json::from_str(&body).unwrap();
    let starts: Vec<_> = index.into_iter().map(|e| e.start).collect();
    assert_eq!(starts, vec!["2026-08-10", "2026-07-27"]);
}
