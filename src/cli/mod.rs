//! CLI module for loopview - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for listing loop branches,
//! printing iteration trees and details, and serving the HTTP API.

pub mod commands;

pub use commands::Cli;
