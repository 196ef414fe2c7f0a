//! `CommitSource` backed by the git command line.

use async_trait::async_trait;
use log::debug;
use std::path::Path;
use tokio::process::Command;

use super::CommitSource;
use super::output::{log_format, parse_branch_list, parse_log, parse_numstat};
use super::paths::{ensure_git_repo, validate_repo_path, validate_revision};
use crate::config::GitConfig;
use crate::domain::{DiffFileStat, RawCommit};
use crate::error::{Result, ViewerError};

/// Reads loop history by invoking git in the target repository.
#[derive(Debug, Clone)]
pub struct GitSource {
    /// git executable
    binary: String,
    /// Loop branch namespace, e.g. `ai-loop/`
    branch_prefix: String,
    /// Maximum stdout accepted from one git invocation
    max_output_bytes: usize,
}

impl Default for GitSource {
    fn default() -> Self {
        Self::new(&GitConfig::default())
    }
}

impl GitSource {
    pub fn new(config: &GitConfig) -> Self {
        Self {
            binary: config.binary.clone(),
            branch_prefix: config.branch_prefix.clone(),
            max_output_bytes: config.max_output_bytes,
        }
    }

    /// Run git in `repo` and return its stdout.
    async fn run(&self, repo: &Path, args: &[&str]) -> Result<String> {
        debug!("Running {} {} in {}", self.binary, args.join(" "), repo.display());

        let output = Command::new(&self.binary)
            .args(args)
            .current_dir(repo)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| ViewerError::Git(format!("Failed to execute git: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ViewerError::Git(format!("git {} failed: {}", args[0], stderr.trim())));
        }

        if output.stdout.len() > self.max_output_bytes {
            return Err(ViewerError::Git(format!(
                "git {} output exceeds {} bytes",
                args[0], self.max_output_bytes
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    async fn open(&self, repo_path: &str) -> Result<std::path::PathBuf> {
        let resolved = validate_repo_path(repo_path)?;
        ensure_git_repo(&resolved).await?;
        Ok(resolved)
    }
}

#[async_trait]
impl CommitSource for GitSource {
    async fn fetch_log(&self, repo_path: &str, branch: &str) -> Result<Vec<RawCommit>> {
        let repo = self.open(repo_path).await?;
        validate_revision(branch)?;

        let format = format!("--format={}", log_format());
        let stdout = self.run(&repo, &["log", &format, "--reverse", branch, "--"]).await?;
        let commits = parse_log(&stdout);

        debug!("Read {} commits from {} on {}", commits.len(), repo.display(), branch);
        Ok(commits)
    }

    async fn fetch_diff_stats(&self, repo_path: &str, hash: &str) -> Result<Vec<DiffFileStat>> {
        let repo = self.open(repo_path).await?;
        validate_revision(hash)?;

        let stdout = self
            .run(&repo, &["diff-tree", "--numstat", "--no-commit-id", "--root", "-r", hash])
            .await?;
        Ok(parse_numstat(&stdout))
    }

    async fn list_loop_branches(&self, repo_path: &str) -> Result<Vec<String>> {
        let repo = self.open(repo_path).await?;

        let pattern = format!("{}*", self.branch_prefix);
        let stdout = self
            .run(&repo, &["branch", "--list", &pattern, "--format=%(refname:short)"])
            .await?;
        Ok(parse_branch_list(&stdout))
    }
}
