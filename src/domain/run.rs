//! The assembled iteration hierarchy for one (repository, branch) pair

use serde::{Deserialize, Serialize};

use super::commit::{ParsedCommit, Sensor};

/// A level-1 loop commit owned by one outer iteration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InnerIteration {
    /// Label taken verbatim from the commit metadata
    pub iteration_label: String,
    pub commit: ParsedCommit,
}

/// A level-0 loop commit and the inner iterations sharing its number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OuterIteration {
    pub iteration_number: u64,
    pub commit: ParsedCommit,
    pub inner_iterations: Vec<InnerIteration>,
    pub sensors: Vec<Sensor>,
    pub target_met: String,
    pub action: String,
}

impl OuterIteration {
    /// The outer commit's own iteration label
    pub fn label(&self) -> String {
        self.commit
            .iteration()
            .map(str::to_string)
            .unwrap_or_else(|| self.iteration_number.to_string())
    }
}

/// Full result for one (repository, branch) pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoopRun {
    pub repo_path: String,
    pub branch: String,
    /// Ascending by iteration number
    pub outer_iterations: Vec<OuterIteration>,
    /// Every commit in original order
    pub all_commits: Vec<ParsedCommit>,
    pub non_loop_commits: Vec<ParsedCommit>,
    /// Inner iterations whose outer number has no outer commit
    pub unattached_inner_iterations: Vec<InnerIteration>,
    pub outer_node_name: String,
    pub inner_node_name: String,
}

impl LoopRun {
    /// Number of loop commits placed in the hierarchy
    pub fn iteration_count(&self) -> usize {
        self.outer_iterations
            .iter()
            .map(|outer| 1 + outer.inner_iterations.len())
            .sum()
    }
}
