//! Application state shared by the monitor and bot loops.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::time::Duration;
use tracing::info;

use tempgram_sensors::{decode, FixtureFile, SensorsCommand, SnapshotSource};
use tempgram_telegram::{BotCommand, Client, SendMessage};

use crate::config::Config;
use crate::report;

/// Shared application state.
pub struct AppState {
    /// Configuration
    config: Config,

    /// Telegram Bot API client
    telegram: Client,

    /// Raw sensor data source (command or fixture)
    source: Box<dyn SnapshotSource>,

    /// Daemon start time, reported in the uptime footer
    boot_time: DateTime<Local>,
}

impl AppState {
    /// Creates a new application state from the loaded configuration.
    pub fn new(config: Config) -> Self {
        let telegram = Client::new(&config.telegram.token);
        let source: Box<dyn SnapshotSource> = match &config.sensors.fixture {
            Some(path) => {
                info!("Reading sensor data from fixture: {}", path.display());
                Box::new(FixtureFile::new(path))
            }
            None => Box::new(SensorsCommand::new()),
        };
        Self {
            config,
            telegram,
            source,
            boot_time: Local::now(),
        }
    }

    /// Returns the Telegram client.
    pub fn telegram(&self) -> &Client {
        &self.telegram
    }

    /// Returns the chat the daemon is bound to.
    pub fn chat_id(&self) -> i64 {
        self.config.telegram.chat_id
    }

    /// Returns the interval between periodic reports.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.config.monitor.poll_interval_secs)
    }

    /// Registers the bot's command menu with Telegram.
    pub async fn register_commands(&self) -> Result<()> {
        self.telegram
            .set_my_commands(&[BotCommand {
                command: "temp".to_string(),
                description: "get system temperature".to_string(),
            }])
            .await
            .context("Failed to register bot commands")?;
        Ok(())
    }

    /// Reads the sensors, renders a report, and sends it to the chat.
    ///
    /// One failed cycle is an error for the caller to log, never a reason
    /// to stop the daemon.
    pub async fn send_report(&self) -> Result<()> {
        let raw = self
            .source
            .read_raw()
            .await
            .context("Failed to read sensor data")?;
        let snapshot = decode(&raw).context("Failed to decode sensor data")?;
        info!("{}", report::render_log_line(&snapshot));

        let threshold = self.config.monitor.high_temp_threshold;
        let chat_id = self.config.telegram.chat_id;
        let text = report::render_report(&snapshot, Local::now(), self.boot_time);

        let message = self
            .telegram
            .send_message(&SendMessage {
                chat_id,
                text,
                parse_mode: Some("HTML".to_string()),
                // Only ring the chat when something is running hot.
                disable_notification: !snapshot.exceeds_threshold(threshold),
            })
            .await
            .context("Failed to send report")?;

        if self.config.monitor.pin_reports {
            self.telegram
                .unpin_all(chat_id)
                .await
                .context("Failed to unpin previous reports")?;
            self.telegram
                .pin_message(chat_id, message.message_id)
                .await
                .context("Failed to pin report")?;
        }
        Ok(())
    }
}
