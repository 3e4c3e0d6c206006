//! ponto - Terminal client for the ponto time-clock service
//!
//! Entry point for the ponto CLI application.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::{File, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ponto::cli::{Cli, Commands};
use ponto::config::Settings;

/// Logs go to stderr, or to a file while the TUI owns the terminal
fn init_logging(level: &str, log_file: Option<File>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(filter);

    match log_file {
        Some(file) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        None => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::Completions { shell } => {
            ponto::cli::completions::print(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            let level = if cli.verbose {
                "debug"
            } else {
                settings.general.log_level.as_str()
            };
            let log_file = match &command {
                Commands::Tui { .. } => {
                    settings.ensure_dirs()?;
                    let path = settings.log_path();
                    let file = OpenOptions::new()
                        .create(true)
                        .append(true)
                        .open(&path)
                        .with_context(|| format!("Failed to open log file: {}", path.display()))?;
                    Some(file)
                }
                _ => None,
            };
            init_logging(level, log_file);

            if !Settings::config_path()?.exists() {
                tracing::info!("No config file found, using defaults");
            }

            // Execute command
            match command {
                Commands::Tui {
                    screen,
                    user_id,
                    user_name,
                } => {
                    ponto::cli::commands::launch_tui(&settings, &screen, user_id, user_name)
                        .await?;
                }
                Commands::Login { email, password } => {
                    ponto::cli::commands::login(&settings, &email, &password).await?;
                }
                Commands::Logout => {
                    ponto::cli::commands::logout(&settings)?;
                }
                Commands::Pontos { page, json } => {
                    ponto::cli::commands::list_pontos(&settings, page, json).await?;
                }
                Commands::Faculdades { page, json } => {
                    ponto::cli::commands::list_faculdades(&settings, page, json).await?;
                }
                Commands::Profile { id, json } => {
                    ponto::cli::commands::show_profile(&settings, &id, json).await?;
                }
                Commands::Config(config_cmd) => {
                    ponto::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
