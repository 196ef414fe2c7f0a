//! Domain types for loopview
//!
//! This module contains all core domain types:
//! - RawCommit / ParsedCommit: commits before and after metadata decoding
//! - CommitMetadata / Sensor: structured fields from a loop commit body
//! - LoopRun / OuterIteration / InnerIteration: the assembled hierarchy
//! - CommitDetail / IterationDetail: per-iteration diff stats and navigation

pub mod commit;
pub mod detail;
pub mod run;

pub use commit::{CommitMetadata, ParsedCommit, RawCommit, Sensor, SensorStatus};
pub use detail::{CommitDetail, DiffFileStat, IterationDetail};
pub use run::{InnerIteration, LoopRun, OuterIteration};
