//! Timed Tic-Tac-Toe - command-line entry point.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use timed_tictactoe::{ConfigOverrides, GameConfig};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { settings } => {
            let config = load_config(&cli.config, settings.into())?;
            tui::run_tui(config).await
        }
        Command::Simulate {
            games,
            json,
            settings,
        } => {
            initialize_tracing();
            let config = load_config(&cli.config, settings.into())?;
            run_simulation(&config, games, json)
        }
    }
}

#[instrument(skip(config))]
fn run_simulation(config: &GameConfig, games: u32, json: bool) -> Result<()> {
    info!("Starting headless simulation");
    let summary = timed_tictactoe::simulate(config, games)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", timed_tictactoe::render_text(&summary, config));
    }
    Ok(())
}

#[instrument(skip(overrides), fields(config_path = %path.display()))]
fn load_config(path: &std::path::Path, overrides: ConfigOverrides) -> Result<GameConfig> {
    let config = GameConfig::load_or_default(path)
        .and_then(|config| config.with_overrides(overrides))
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    info!(?config, "Configuration ready");
    Ok(config)
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,timed_tictactoe=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
