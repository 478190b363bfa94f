use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single chat message. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: super::new_id(),
            role,
            content: content.into(),
            created_at: super::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl From<MessageRole> for chatpane_backend::Role {
    fn from(role: MessageRole) -> Self {
        match role {
            MessageRole::User => chatpane_backend::Role::User,
            MessageRole::Assistant => chatpane_backend::Role::Assistant,
        }
    }
}

// Conversion: Message → outgoing history entry (id and timestamp are not sent)
impl From<&Message> for chatpane_backend::ChatMessage {
    fn from(msg: &Message) -> Self {
        chatpane_backend::ChatMessage {
            role: msg.role.into(),
            content: msg.content.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_wire_shape() {
        let msg = Message::user("hi");
        let value = serde_json::to_value(&msg).unwrap();

        assert_eq!(value["role"], "user");
        assert_eq!(value["content"], "hi");
        assert!(value["createdAt"].is_i64());
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = Message::assistant("a");
        let b = Message::assistant("a");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_parses_browser_snapshot_message() {
        let raw = r#"{"id":"abc","role":"assistant","content":"Hi!","createdAt":1700000000123}"#;
        let msg: Message = serde_json::from_str(raw).unwrap();

        assert_eq!(msg.role, MessageRole::Assistant);
        assert_eq!(msg.created_at.timestamp_millis(), 1_700_000_000_123);
    }

    #[test]
    fn test_into_history_entry() {
        let msg = Message::user("question");
        let entry: chatpane_backend::ChatMessage = (&msg).into();

        assert_eq!(entry.role, chatpane_backend::Role::User);
        assert_eq!(entry.content, "question");
    }
}
