use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field the reply text is read from first.
pub const REPLY_FIELD: &str = "text";
/// Field consulted when [`REPLY_FIELD`] is missing.
pub const FALLBACK_REPLY_FIELD: &str = "reply";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One history entry as sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Request body: `{ "messages": [...] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self { messages }
    }
}

/// Pull the reply text out of a decoded response body.
///
/// Reads `text`, then `reply`; a missing or non-string field counts as absent
/// and the result defaults to an empty string.
pub fn extract_reply(body: &Value) -> String {
    [REPLY_FIELD, FALLBACK_REPLY_FIELD]
        .iter()
        .find_map(|field| body.get(*field).and_then(Value::as_str))
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_shape() {
        let request = ChatRequest::new(vec![
            ChatMessage::assistant("Hi!"),
            ChatMessage::user("Hello"),
        ]);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "messages": [
                    {"role": "assistant", "content": "Hi!"},
                    {"role": "user", "content": "Hello"}
                ]
            })
        );
    }

    #[test]
    fn test_extract_prefers_text() {
        assert_eq!(extract_reply(&json!({"text": "a", "reply": "b"})), "a");
    }

    #[test]
    fn test_extract_falls_back_to_reply() {
        assert_eq!(extract_reply(&json!({"reply": "b"})), "b");
        assert_eq!(extract_reply(&json!({"text": null, "reply": "b"})), "b");
    }

    #[test]
    fn test_extract_defaults_to_empty() {
        assert_eq!(extract_reply(&json!({})), "");
        assert_eq!(extract_reply(&json!({"text": 42})), "");
        assert_eq!(extract_reply(&json!(["not", "an", "object"])), "");
    }

    #[test]
    fn test_extract_keeps_empty_text() {
        assert_eq!(extract_reply(&json!({"text": "", "reply": "b"})), "");
    }
}
