//! Telegram update polling and command dispatch.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::state::AppState;

/// Long-poll timeout for getUpdates.
const POLL_TIMEOUT_SECS: u64 = 30;

/// Backoff after a failed getUpdates call.
const RETRY_DELAY: std::time::Duration = std::time::Duration::from_secs(5);

/// Polls Telegram for updates and answers `/temp` with a fresh report.
///
/// Updates from any chat other than the configured one are dropped
/// silently, so the bot never leaks sensor data to strangers.
pub async fn update_loop(state: Arc<AppState>) {
    let mut offset = 0i64;
    loop {
        let updates = match state.telegram().get_updates(offset, POLL_TIMEOUT_SECS).await {
            Ok(updates) => updates,
            Err(e) => {
                warn!("Failed to fetch updates: {}", e);
                tokio::time::sleep(RETRY_DELAY).await;
                continue;
            }
        };

        for update in updates {
            offset = offset.max(update.update_id + 1);
            let Some(message) = update.message else {
                continue;
            };
            if message.chat.id != state.chat_id() {
                debug!("Ignoring message from chat {}", message.chat.id);
                continue;
            }
            if let Some(text) = message.text.as_deref() {
                if text.starts_with("/temp") {
                    debug!("Handling /temp request");
                    if let Err(e) = state.send_report().await {
                        warn!("Failed to answer /temp: {:#}", e);
                    }
                }
            }
        }
    }
}
