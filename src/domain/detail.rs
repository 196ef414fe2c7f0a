//! Per-iteration detail: diff statistics and navigation neighbours

use serde::{Deserialize, Serialize};

use super::commit::ParsedCommit;

/// Insertions and deletions for one file in a commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffFileStat {
    pub file: String,
    pub insertions: u64,
    pub deletions: u64,
}

/// One commit with its diff statistics and totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitDetail {
    pub commit: ParsedCommit,
    pub diff_stats: Vec<DiffFileStat>,
    pub total_insertions: u64,
    pub total_deletions: u64,
    pub files_changed: usize,
}

impl CommitDetail {
    /// Sum per-file stats into totals
    pub fn from_stats(commit: ParsedCommit, diff_stats: Vec<DiffFileStat>) -> Self {
        let total_insertions = diff_stats.iter().map(|d| d.insertions).sum();
        let total_deletions = diff_stats.iter().map(|d| d.deletions).sum();
        let files_changed = diff_stats.len();

        Self {
            commit,
            diff_stats,
            total_insertions,
            total_deletions,
            files_changed,
        }
    }
}

/// Detail view for one iteration label, with previous/next labels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IterationDetail {
    pub repo_path: String,
    pub branch: String,
    pub detail: CommitDetail,
    pub previous: Option<String>,
    pub next: Option<String>,
}
