//! Tempgram Daemon
//!
//! Periodically reads host temperature sensors via lm-sensors and reports
//! them to a Telegram chat; answers `/temp` on demand.

mod bot;
mod config;
mod report;
mod state;

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::Config;
use state::AppState;

/// Host temperature reporting daemon for Telegram.
#[derive(Parser, Debug)]
#[command(name = "tempgramd", version, about)]
struct Args {
    /// Configuration file path or http(s) URL
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let args = Args::parse();

    // Load configuration
    let config = Config::load(&args.config)
        .await
        .context("Failed to load configuration")?;
    info!("Loaded configuration from: {}", args.config);

    // Initialize application state
    let state = Arc::new(AppState::new(config));

    // A failed menu registration is not fatal; /temp still works.
    if let Err(e) = state.register_commands().await {
        warn!("Failed to register bot commands: {:#}. Continuing without them.", e);
    }

    // Start periodic report loop
    let monitor_state = state.clone();
    tokio::spawn(async move {
        monitor_loop(monitor_state).await;
    });

    // Start on-demand command loop
    let bot_state = state.clone();
    tokio::spawn(async move {
        bot::update_loop(bot_state).await;
    });

    // Setup Unix signal handlers
    let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;
    let mut sigint = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt())?;

    tokio::select! {
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
    }

    Ok(())
}

async fn monitor_loop(state: Arc<AppState>) {
    loop {
        // One bad poll cycle must not take the daemon down.
        if let Err(e) = state.send_report().await {
            warn!("Report cycle failed: {:#}", e);
        }
        tokio::time::sleep(state.poll_interval()).await;
    }
}
