//! In-memory `CommitSource` for tests and embedding.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;

use super::CommitSource;
use super::paths::{validate_repo_path, validate_revision};
use crate::domain::{DiffFileStat, RawCommit};
use crate::error::{Result, ViewerError};

#[derive(Debug, Clone, Default)]
struct MockRepo {
    branches: HashMap<String, Vec<RawCommit>>,
    diff_stats: HashMap<String, Vec<DiffFileStat>>,
}

/// Serves canned histories keyed by repository path and branch.
///
/// Applies the same path and revision checks as `GitSource`.
#[derive(Debug, Clone, Default)]
pub struct MockCommitSource {
    repos: HashMap<String, MockRepo>,
}

impl MockCommitSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a branch history (oldest first).
    pub fn with_branch(mut self, repo: &str, branch: &str, commits: Vec<RawCommit>) -> Self {
        self.repos
            .entry(repo.to_string())
            .or_default()
            .branches
            .insert(branch.to_string(), commits);
        self
    }

    /// Register diff stats for one commit hash.
    pub fn with_diff_stats(mut self, repo: &str, hash: &str, stats: Vec<DiffFileStat>) -> Self {
        self.repos
            .entry(repo.to_string())
            .or_default()
            .diff_stats
            .insert(hash.to_string(), stats);
        self
    }

    fn repo(&self, repo_path: &str) -> Result<&MockRepo> {
        validate_repo_path(repo_path)?;
        self.repos
            .get(repo_path)
            .ok_or_else(|| ViewerError::NotARepository(PathBuf::from(repo_path)))
    }
}

#[async_trait]
impl CommitSource for MockCommitSource {
    async fn fetch_log(&self, repo_path: &str, branch: &str) -> Result<Vec<RawCommit>> {
        let repo = self.repo(repo_path)?;
        validate_revision(branch)?;
        repo.branches
            .get(branch)
            .cloned()
            .ok_or_else(|| ViewerError::Git(format!("git log failed: unknown revision '{}'", branch)))
    }

    async fn fetch_diff_stats(&self, repo_path: &str, hash: &str) -> Result<Vec<DiffFileStat>> {
        let repo = self.repo(repo_path)?;
        validate_revision(hash)?;
        Ok(repo.diff_stats.get(hash).cloned().unwrap_or_default())
    }

    async fn list_loop_branches(&self, repo_path: &str) -> Result<Vec<String>> {
        let repo = self.repo(repo_path)?;
        let mut branches: Vec<String> = repo
            .branches
            .keys()
            .filter(|b| b.starts_with("ai-loop/"))
            .cloned()
            .collect();
        branches.sort();
        Ok(branches)
    }
}
