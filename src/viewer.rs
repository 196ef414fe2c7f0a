//! Request-level orchestration: fetch, parse, build.
//!
//! Nothing is cached; every call rebuilds the run from a fresh log.

use log::info;
use std::sync::Arc;

use crate::domain::{CommitDetail, IterationDetail, LoopRun};
use crate::error::Result;
use crate::git::CommitSource;
use crate::hierarchy::{build_loop_run, find_iteration, navigation_order, neighbors};
use crate::parser::parse_commits;

/// Loads loop runs and iteration details from a commit source.
#[derive(Clone)]
pub struct LoopViewer {
    source: Arc<dyn CommitSource>,
}

impl LoopViewer {
    pub fn new(source: Arc<dyn CommitSource>) -> Self {
        Self { source }
    }

    /// Loop branches in a repository.
    pub async fn list_branches(&self, repo_path: &str) -> Result<Vec<String>> {
        self.source.list_loop_branches(repo_path).await
    }

    /// Build the full run for a branch.
    pub async fn load_run(&self, repo_path: &str, branch: &str) -> Result<LoopRun> {
        let raw = self.source.fetch_log(repo_path, branch).await?;
        let commits = parse_commits(&raw);
        let run = build_loop_run(repo_path, branch, commits);

        info!(
            "Loaded {} on {}: {} commits, {} outer iterations, {} non-loop",
            repo_path,
            branch,
            run.all_commits.len(),
            run.outer_iterations.len(),
            run.non_loop_commits.len()
        );
        Ok(run)
    }

    /// Detail and previous/next navigation for one iteration label.
    pub async fn iteration_detail(&self, repo_path: &str, branch: &str, label: &str) -> Result<IterationDetail> {
        let run = self.load_run(repo_path, branch).await?;
        let commit = find_iteration(&run, label)?.clone();

        let order = navigation_order(&run);
        let (previous, next) = neighbors(&order, label);

        let stats = self.source.fetch_diff_stats(repo_path, &commit.hash).await?;

        Ok(IterationDetail {
            repo_path: repo_path.to_string(),
            branch: branch.to_string(),
            detail: CommitDetail::from_stats(commit, stats),
            previous,
            next,
        })
    }
}
