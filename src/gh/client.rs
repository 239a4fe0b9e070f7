//! Invocation of the external `gh` CLI.
//!
//! Every call runs with a scratch directory as its working directory so
//! `gh` never picks up repository context from wherever the tool happens
//! to be run, and every call is bounded by an explicit timeout. There are
//! no retries; callers decide what a failed call degrades to.

use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;
use tokio::time::timeout;

/// Ways a `gh` invocation can fail.
#[derive(Debug, Error)]
pub enum GhError {
    #[error("failed to launch gh: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("gh exited non-zero: {stderr}")]
    Failed { stderr: String },
    #[error("gh timed out after {0:?}")]
    Timeout(Duration),
    #[error("gh returned malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Thin wrapper over the `gh` binary.
pub struct GhClient {
    program: PathBuf,
    workdir: PathBuf,
}

impl GhClient {
    /// Create a client whose every invocation runs inside `workdir`.
    pub fn new(workdir: &Path) -> Self {
        Self::with_program(Path::new("gh"), workdir)
    }

    /// Like [`GhClient::new`] but invoking `program` instead of `gh` from
    /// the search path. Tests point this at a stub.
    pub fn with_program(program: &Path, workdir: &Path) -> Self {
        Self {
            program: program.to_path_buf(),
            workdir: workdir.to_path_buf(),
        }
    }

    /// Run `gh` with `args`, returning stdout on success.
    async fn run(&self, args: &[&str], limit: Duration) -> Result<Vec<u8>, GhError> {
        let output = timeout(
            limit,
            Command::new(&self.program)
                .args(args)
                .current_dir(&self.workdir)
                .kill_on_drop(true)
                .output(),
        )
        .await
        .map_err(|_| GhError::Timeout(limit))??;

        if !output.status.success() {
            return Err(GhError::Failed {
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(output.stdout)
    }

    /// Run `gh` with `args` and decode stdout as JSON.
    pub async fn api_json(&self, args: &[&str], limit: Duration) -> Result<Value, GhError> {
        let stdout = self.run(args, limit).await?;
        Ok(serde_json::from_slice(&stdout)?)
    }

    /// The authenticated user's login, via `gh api user`.
    pub async fn current_user(&self, limit: Duration) -> Result<String, GhError> {
        let payload = self.api_json(&["api", "user"], limit).await?;
        payload
            .get("login")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| GhError::Failed {
                stderr: "gh api user returned no login field".to_string(),
            })
    }
}
