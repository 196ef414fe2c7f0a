//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - branches: list loop branches in a repository
//! - run: show the iteration tree for a branch
//! - show: show one iteration with diff stats
//! - serve: start the JSON HTTP API

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// loopview - Browse AI loop iterations recorded in git history
#[derive(Parser, Debug)]
#[command(name = "loopview")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List loop branches in a repository
    Branches {
        /// Path to the git repository
        repo: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the iteration tree for a loop branch
    Run {
        /// Path to the git repository
        repo: String,

        /// Loop branch to read
        branch: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Also list commits that are not part of the loop
        #[arg(short, long)]
        all: bool,
    },

    /// Show one iteration with its diff stats
    Show {
        /// Path to the git repository
        repo: String,

        /// Loop branch to read
        branch: String,

        /// Iteration label, e.g. 3 or 3.2
        iteration: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Serve the JSON HTTP API
    Serve {
        /// Address to bind (overrides config)
        #[arg(short, long)]
        bind: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },
}
