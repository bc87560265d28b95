use std::fs::{self, OpenOptions};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use garden_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "motion-garden")]
#[command(author, version, about = "Scroll, gesture and feedback motion studies in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Collapse every animation and timer (same as NO_MOTION=1)
    #[arg(long, global = true)]
    reduced_motion: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Print the depth reveal stages for a scroll progress as JSON
    Stages {
        /// Scroll progress between 0 and 1
        #[arg(short, long)]
        progress: f64,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Write the default configuration if no file exists
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    let runs_tui = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(&config, runs_tui)?;

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config, cli.reduced_motion).await,
        Some(Commands::Stages { progress }) => commands::stages::run(progress),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::Path => commands::config::path(),
            ConfigAction::Init => commands::config::init(),
        },
    }
}

/// RUST_LOG wins over the configured level. While the TUI owns the terminal
/// logs go to a file in the data directory.
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );

    if to_file {
        let data_dir = config.data_dir();
        fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;
        let log_path = config.log_path();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}
