//! Minimal Telegram Bot API client.
//!
//! Covers only the handful of methods the tempgram daemon needs: sending
//! reports, long-polling for commands, registering the command menu, and
//! pinning the latest report.

pub mod types;

pub use types::{ApiResponse, BotCommand, Chat, Message, SendMessage, Update, User};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::debug;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the Bot API client.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The Bot API rejected the call (`ok: false`).
    #[error("Telegram API error: {0}")]
    Api(String),
}

const DEFAULT_BASE_URL: &str = "https://api.telegram.org";

/// A Bot API client bound to one bot token.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl Client {
    /// Creates a client for the official Bot API endpoint.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL, for self-hosted Bot API
    /// gateways and tests.
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    async fn call<P, T>(&self, method: &str, params: &P) -> Result<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("Calling Bot API method {}", method);
        let url = format!("{}/bot{}/{}", self.base_url, self.token, method);
        let response: ApiResponse<T> = self
            .http
            .post(&url)
            .json(params)
            .send()
            .await?
            .json()
            .await?;
        if !response.ok {
            return Err(Error::Api(
                response
                    .description
                    .unwrap_or_else(|| "unknown error".to_string()),
            ));
        }
        response
            .result
            .ok_or_else(|| Error::Api("response missing result".to_string()))
    }

    /// Sends a message and returns the message as stored by Telegram.
    pub async fn send_message(&self, params: &SendMessage) -> Result<Message> {
        self.call("sendMessage", params).await
    }

    /// Long-polls for updates past `offset`.
    pub async fn get_updates(&self, offset: i64, timeout_secs: u64) -> Result<Vec<Update>> {
        self.call(
            "getUpdates",
            &json!({
                "offset": offset,
                "timeout": timeout_secs,
                "allowed_updates": ["message"],
            }),
        )
        .await
    }

    /// Replaces the bot's command menu.
    pub async fn set_my_commands(&self, commands: &[BotCommand]) -> Result<bool> {
        self.call("setMyCommands", &json!({ "commands": commands }))
            .await
    }

    /// Pins a message in the chat without notifying members.
    pub async fn pin_message(&self, chat_id: i64, message_id: i64) -> Result<bool> {
        self.call(
            "pinChatMessage",
            &json!({
                "chat_id": chat_id,
                "message_id": message_id,
                "disable_notification": true,
            }),
        )
        .await
    }

    /// Unpins all messages in the chat.
    pub async fn unpin_all(&self, chat_id: i64) -> Result<bool> {
        self.call("unpinAllChatMessages", &json!({ "chat_id": chat_id }))
            .await
    }
}
