//! Sequential navigation over a loop run.

use crate::domain::{LoopRun, ParsedCommit};
use crate::error::{Result, ViewerError};

/// Flattened label order: for each outer iteration, its inner labels then its own.
pub fn navigation_order(run: &LoopRun) -> Vec<String> {
    let mut order = Vec::with_capacity(run.iteration_count());
    for outer in &run.outer_iterations {
        order.extend(outer.inner_iterations.iter().map(|i| i.iteration_label.clone()));
        order.push(outer.label());
    }
    order
}

/// Previous and next labels around `label`. Both are `None` if it is not in `order`.
pub fn neighbors(order: &[String], label: &str) -> (Option<String>, Option<String>) {
    let Some(idx) = order.iter().position(|l| l == label) else {
        return (None, None);
    };
    let previous = idx.checked_sub(1).map(|i| order[i].clone());
    let next = order.get(idx + 1).cloned();
    (previous, next)
}

/// First commit anywhere in the run whose metadata carries `label`.
pub fn find_iteration<'a>(run: &'a LoopRun, label: &str) -> Result<&'a ParsedCommit> {
    run.all_commits
        .iter()
        .find(|c| c.iteration() == Some(label))
        .ok_or_else(|| ViewerError::IterationNotFound(label.to_string()))
}
