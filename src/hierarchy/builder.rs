//! Two-pass assembly of parsed commits into outer and inner iterations.

use log::warn;
use std::collections::BTreeMap;

use crate::domain::{InnerIteration, LoopRun, OuterIteration, ParsedCommit};
use crate::parser::leading_number;

/// Level of a top-level loop cycle
pub const OUTER_LEVEL: i64 = 0;
/// Level of a cycle nested under an outer iteration
pub const INNER_LEVEL: i64 = 1;

/// Outer number for an iteration label: leading integer of its first dot component.
pub fn outer_number(label: &str) -> Option<u64> {
    label.split('.').next().and_then(leading_number)
}

/// Build the loop run for one (repository, branch) pair.
///
/// Outer iterations come out ascending by number. A later outer commit with an
/// already seen number replaces the earlier one. Inner iterations with no
/// matching outer commit end up in `unattached_inner_iterations`.
pub fn build_loop_run(repo_path: &str, branch: &str, commits: Vec<ParsedCommit>) -> LoopRun {
    let mut outers: BTreeMap<u64, OuterIteration> = BTreeMap::new();
    let mut staged_inners: BTreeMap<u64, Vec<InnerIteration>> = BTreeMap::new();
    let mut non_loop_commits = Vec::new();
    let mut outer_node_name = String::new();
    let mut inner_node_name = String::new();

    // First pass: bucket loop commits by outer number
    for commit in &commits {
        let metadata = match (&commit.metadata, commit.is_ai_loop) {
            (Some(metadata), true) => metadata,
            _ => {
                non_loop_commits.push(commit.clone());
                continue;
            }
        };

        let Some(number) = outer_number(&metadata.iteration) else {
            warn!(
                "Commit {} has iteration label {:?} with no leading number, leaving it out",
                commit.short_hash, metadata.iteration
            );
            continue;
        };

        match metadata.level {
            OUTER_LEVEL => {
                if outer_node_name.is_empty() {
                    outer_node_name = metadata.node_path.clone();
                }
                let outer = OuterIteration {
                    iteration_number: number,
                    commit: commit.clone(),
                    inner_iterations: Vec::new(),
                    sensors: metadata.sensors.clone(),
                    target_met: metadata.target_met.clone(),
                    action: metadata.action.clone(),
                };
                if let Some(replaced) = outers.insert(number, outer) {
                    warn!(
                        "Outer iteration {} appears more than once, {} replaces {}",
                        number, commit.short_hash, replaced.commit.short_hash
                    );
                }
            }
            INNER_LEVEL => {
                if inner_node_name.is_empty() {
                    inner_node_name = metadata.node_name().to_string();
                }
                staged_inners.entry(number).or_default().push(InnerIteration {
                    iteration_label: metadata.iteration.clone(),
                    commit: commit.clone(),
                });
            }
            level => {
                warn!("Commit {} has unmodeled level {}, leaving it out", commit.short_hash, level);
            }
        }
    }

    // Second pass: attach staged inner iterations to their outer iteration
    let mut unattached_inner_iterations = Vec::new();
    for (number, inners) in staged_inners {
        match outers.get_mut(&number) {
            Some(outer) => outer.inner_iterations = inners,
            None => {
                warn!(
                    "{} inner iteration(s) reference outer iteration {} which has no commit",
                    inners.len(),
                    number
                );
                unattached_inner_iterations.extend(inners);
            }
        }
    }

    LoopRun {
        repo_path: repo_path.to_string(),
        branch: branch.to_string(),
        outer_iterations: outers.into_values().collect(),
        all_commits: commits,
        non_loop_commits,
        unattached_inner_iterations,
        outer_node_name,
        inner_node_name,
    }
}
