//! Telegram Bot API wire types.
//!
//! Only the fields the daemon actually consumes are modeled; the Bot API
//! tolerates extra fields in requests and we ignore extras in responses.

use serde::{Deserialize, Serialize};

/// Envelope every Bot API method returns.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}

/// One incoming update from getUpdates.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

/// A chat message.
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    pub from: Option<User>,
    pub text: Option<String>,
}

/// The chat a message belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// The sender of a message.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
}

/// A bot command entry for setMyCommands.
#[derive(Debug, Clone, Serialize)]
pub struct BotCommand {
    pub command: String,
    pub description: String,
}

/// Parameters for sendMessage.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessage {
    pub chat_id: i64,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
    pub disable_notification: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_get_updates_response() {
        let raw = r#"{
            "ok": true,
            "result": [{
                "update_id": 7,
                "message": {
                    "message_id": 42,
                    "chat": {"id": 1234, "type": "private"},
                    "from": {"id": 1234, "is_bot": false, "first_name": "a"},
                    "text": "/temp"
                }
            }]
        }"#;
        let response: ApiResponse<Vec<Update>> = serde_json::from_str(raw).unwrap();
        assert!(response.ok);
        let updates = response.result.unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].update_id, 7);
        let message = updates[0].message.as_ref().unwrap();
        assert_eq!(message.chat.id, 1234);
        assert_eq!(message.text.as_deref(), Some("/temp"));
    }

    #[test]
    fn test_deserialize_error_response() {
        let raw = r#"{"ok": false, "error_code": 401, "description": "Unauthorized"}"#;
        let response: ApiResponse<Vec<Update>> = serde_json::from_str(raw).unwrap();
        assert!(!response.ok);
        assert_eq!(response.description.as_deref(), Some("Unauthorized"));
        assert!(response.result.is_none());
    }

    #[test]
    fn test_send_message_omits_empty_parse_mode() {
        let params = SendMessage {
            chat_id: 5,
            text: "hi".to_string(),
            parse_mode: None,
            disable_notification: true,
        };
        let json = serde_json::to_value(&params).unwrap();
        assert!(json.get("parse_mode").is_none());
        assert_eq!(json["disable_notification"], true);
    }
}
