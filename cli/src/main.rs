//! CLI entrypoint for release-herald
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod app;
mod commands;
mod input;

use anyhow::Result;
use app::App;
use clap::Parser;
use colored::Colorize;
use herald_infrastructure::ConfigLoader;
use herald_presentation::{Cli, Command};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "💥 Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting release-herald");

    // Lint needs no credentials
    if let Command::Lint(args) = cli.command {
        return commands::lint(args);
    }

    if let Some(path) = ConfigLoader::load_dotenv() {
        debug!("Environment loaded from {}", path.display());
    }
    let settings = ConfigLoader::load(cli.config.as_deref())?;

    // === Dependency Injection ===
    let app = App::new(settings);
    debug!("HTTP timeout: {}s", app.settings().http.timeout_seconds);

    match cli.command {
        Command::Summarize(args) => commands::summarize(&app, args).await,
        Command::Post(args) => commands::post(&app, args).await,
        Command::Release(args) => commands::release(&app, args).await,
        Command::Discord(args) => commands::discord(&app, args).await,
        Command::Announce(args) => commands::announce(&app, args).await,
        Command::Thread(args) => commands::thread(&app, args).await,
        Command::Lint(args) => commands::lint(args),
    }
}
