//! Iteration hierarchy: outer iterations owning inner iterations.
//!
//! `builder` groups parsed commits into a `LoopRun`; `navigation` flattens
//! the run into a label sequence for previous/next browsing.

mod builder;
mod navigation;

pub use builder::{INNER_LEVEL, OUTER_LEVEL, build_loop_run, outer_number};
pub use navigation::{find_iteration, navigation_order, neighbors};
