//! Configuration management.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Telegram delivery settings.
    pub telegram: TelegramConfig,

    /// Monitoring loop settings.
    #[serde(default)]
    pub monitor: MonitorConfig,

    /// Sensor source settings.
    #[serde(default)]
    pub sensors: SensorsConfig,
}

/// Telegram bot credentials and target chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// Bot token from @BotFather.
    pub token: String,

    /// Chat the bot reports to and accepts commands from.
    pub chat_id: i64,
}

/// Monitoring loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Seconds between periodic reports.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,

    /// Temperature (°C) at or above which reports notify audibly.
    #[serde(default = "default_threshold")]
    pub high_temp_threshold: f64,

    /// Pin the latest report in the chat, unpinning previous ones.
    #[serde(default)]
    pub pin_reports: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval(),
            high_temp_threshold: default_threshold(),
            pin_reports: false,
        }
    }
}

/// Sensor source configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SensorsConfig {
    /// Read raw sensor JSON from this file instead of running `sensors -j`.
    #[serde(default)]
    pub fixture: Option<PathBuf>,
}

// Default value functions
fn default_poll_interval() -> u64 {
    600
}

fn default_threshold() -> f64 {
    50.0
}

impl Config {
    /// Loads configuration from a TOML file path or an http(s) URL.
    pub async fn load(source: &str) -> Result<Self> {
        let content = if source.starts_with("http://") || source.starts_with("https://") {
            reqwest::get(source)
                .await
                .and_then(|response| response.error_for_status())
                .context("Failed to fetch configuration")?
                .text()
                .await
                .context("Failed to read configuration response")?
        } else {
            std::fs::read_to_string(source).context("Failed to read configuration file")?
        };
        let config: Config = toml::from_str(&content).context("Failed to parse configuration")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [telegram]
            token = "123:abc"
            chat_id = 42
            "#,
        )
        .unwrap();
        assert_eq!(config.telegram.chat_id, 42);
        assert_eq!(config.monitor.poll_interval_secs, 600);
        assert_eq!(config.monitor.high_temp_threshold, 50.0);
        assert!(!config.monitor.pin_reports);
        assert_eq!(config.sensors.fixture, None);
    }

    #[test]
    fn test_full_config_round_trips() {
        let config: Config = toml::from_str(
            r#"
            [telegram]
            token = "123:abc"
            chat_id = -100200

            [monitor]
            poll_interval_secs = 60
            high_temp_threshold = 75.5
            pin_reports = true

            [sensors]
            fixture = "/var/lib/tempgram/sensors.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.monitor.poll_interval_secs, 60);
        assert_eq!(config.monitor.high_temp_threshold, 75.5);
        assert!(config.monitor.pin_reports);
        assert_eq!(
            config.sensors.fixture.as_deref(),
            Some(std::path::Path::new("/var/lib/tempgram/sensors.json"))
        );
    }

    #[test]
    fn test_missing_telegram_section_is_an_error() {
        assert!(toml::from_str::<Config>("[monitor]\n").is_err());
    }
}
