//! Commit source adapter.
//!
//! Everything the core needs from version control goes through the
//! `CommitSource` trait: the branch log, per-commit diff stats and the list
//! of loop branches.

mod mock;
pub mod output;
pub mod paths;
mod source;

use async_trait::async_trait;

use crate::domain::{DiffFileStat, RawCommit};
use crate::error::Result;

pub use mock::MockCommitSource;
pub use source::GitSource;

/// Read-only access to a repository's loop history
#[async_trait]
pub trait CommitSource: Send + Sync {
    /// Commits reachable from `branch`, oldest first
    async fn fetch_log(&self, repo_path: &str, branch: &str) -> Result<Vec<RawCommit>>;

    /// Per-file insertion/deletion counts for one commit
    async fn fetch_diff_stats(&self, repo_path: &str, hash: &str) -> Result<Vec<DiffFileStat>>;

    /// Branches in the loop namespace
    async fn list_loop_branches(&self, repo_path: &str) -> Result<Vec<String>>;
}
