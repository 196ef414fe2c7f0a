use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{LevelFilter, info, warn};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

mod cli;

use cli::Cli;
use cli::commands::Commands;
use loopview::config::Config;
use loopview::git::GitSource;
use loopview::render::{render_branches, render_detail, render_run};
use loopview::server;
use loopview::viewer::LoopViewer;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("loopview")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("loopview.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // Without RUST_LOG the filter stays open and the config narrows it via the max level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace"))
        .target(env_logger::Target::Pipe(target))
        .init();
    if std::env::var_os("RUST_LOG").is_none() {
        log::set_max_level(LevelFilter::Info);
    }

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn apply_log_level(config: &Config) {
    if std::env::var_os("RUST_LOG").is_some() {
        return;
    }
    match config.level_filter() {
        Some(level) => log::set_max_level(level),
        None => warn!("Ignoring unrecognized log_level {:?}", config.log_level),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value).context("Failed to serialize output")?);
    Ok(())
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        eprintln!("{}", "Verbose mode enabled".yellow());
    }

    let viewer = LoopViewer::new(Arc::new(GitSource::new(&config.git)));

    match &cli.command {
        Commands::Branches { repo, json } => handle_branches_command(&viewer, repo, *json).await,
        Commands::Run {
            repo,
            branch,
            json,
            all,
        } => handle_run_command(&viewer, repo, branch, *json, *all || config.display.show_non_loop).await,
        Commands::Show {
            repo,
            branch,
            iteration,
            json,
        } => handle_show_command(&viewer, repo, branch, iteration, *json).await,
        Commands::Serve { bind, port } => handle_serve_command(viewer, config, bind.as_deref(), *port).await,
    }
}

async fn handle_branches_command(viewer: &LoopViewer, repo: &str, json: bool) -> Result<()> {
    info!("Listing loop branches in {}", repo);
    let branches = viewer.list_branches(repo).await?;
    if json {
        return print_json(&serde_json::json!({ "branches": branches }));
    }
    print!("{}", render_branches(repo, &branches));
    Ok(())
}

async fn handle_run_command(viewer: &LoopViewer, repo: &str, branch: &str, json: bool, all: bool) -> Result<()> {
    info!("Showing run for {} on {}", repo, branch);
    let run = viewer.load_run(repo, branch).await?;
    if json {
        return print_json(&run);
    }
    print!("{}", render_run(&run, all));
    Ok(())
}

async fn handle_show_command(viewer: &LoopViewer, repo: &str, branch: &str, iteration: &str, json: bool) -> Result<()> {
    info!("Showing iteration {} of {} on {}", iteration, repo, branch);
    let detail = viewer.iteration_detail(repo, branch, iteration).await?;
    if json {
        return print_json(&detail);
    }
    print!("{}", render_detail(&detail));
    Ok(())
}

async fn handle_serve_command(viewer: LoopViewer, config: &Config, bind: Option<&str>, port: Option<u16>) -> Result<()> {
    let mut server_config = config.server.clone();
    if let Some(bind) = bind {
        server_config.bind = bind.to_string();
    }
    if let Some(port) = port {
        server_config.port = port;
    }

    info!("Serving HTTP API on {}", server_config.addr());
    server::serve(viewer, &server_config).await.context("HTTP server failed")?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    apply_log_level(&config);

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}
