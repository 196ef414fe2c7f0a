//! loopview - AI loop history viewer
//!
//! Reconstructs the iterations of an automated improvement loop from the
//! commits it left on a git branch: classifies loop commits, decodes their
//! metadata, and groups them into outer and inner iterations.

pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod hierarchy;
pub mod parser;
pub mod render;
pub mod server;
pub mod viewer;

pub use error::{Result, ViewerError};
