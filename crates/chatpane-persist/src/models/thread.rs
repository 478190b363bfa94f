use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Message, MessageRole};

/// Title every thread starts with until its first user message names it.
pub const DEFAULT_THREAD_TITLE: &str = "New chat";

/// Maximum length, in characters, of a title derived from a user message.
pub const TITLE_MAX_CHARS: usize = 32;

/// A conversation thread as stored in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    pub id: String,
    pub title: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
    pub messages: Vec<Message>,
}

impl Thread {
    /// New thread with the placeholder title and a single assistant greeting.
    pub fn seeded(greeting: impl Into<String>) -> Self {
        let now = super::now();
        Self {
            id: super::new_id(),
            title: DEFAULT_THREAD_TITLE.to_string(),
            created_at: now,
            updated_at: now,
            messages: vec![Message::assistant(greeting)],
        }
    }

    pub fn has_placeholder_title(&self) -> bool {
        self.title == DEFAULT_THREAD_TITLE
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Append a message, bump `updated_at` and name the thread after its
    /// first user message.
    pub(crate) fn push(&mut self, message: Message) {
        if message.role == MessageRole::User && self.has_placeholder_title() {
            if let Some(title) = derive_title(&message.content) {
                self.title = title;
            }
        }

        self.updated_at = message.created_at.max(self.updated_at);
        self.messages.push(message);
    }
}

fn derive_title(content: &str) -> Option<String> {
    let title: String = content.trim().chars().take(TITLE_MAX_CHARS).collect();
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_thread() {
        let thread = Thread::seeded("hello");

        assert_eq!(thread.title, DEFAULT_THREAD_TITLE);
        assert_eq!(thread.created_at, thread.updated_at);
        assert_eq!(thread.messages.len(), 1);
        assert_eq!(thread.messages[0].role, MessageRole::Assistant);
        assert_eq!(thread.messages[0].content, "hello");
    }

    #[test]
    fn test_title_truncated_to_32_chars() {
        let mut thread = Thread::seeded("hi");
        thread.push(Message::user("  This message is definitely longer than thirty-two characters  "));

        assert_eq!(thread.title, "This message is definitely longe");
        assert_eq!(thread.title.chars().count(), TITLE_MAX_CHARS);
    }

    #[test]
    fn test_title_counts_chars_not_bytes() {
        let mut thread = Thread::seeded("hi");
        let content = "é".repeat(40);
        thread.push(Message::user(content));

        assert_eq!(thread.title, "é".repeat(32));
    }

    #[test]
    fn test_assistant_message_does_not_rename() {
        let mut thread = Thread::seeded("hi");
        thread.push(Message::assistant("I am the assistant"));

        assert_eq!(thread.title, DEFAULT_THREAD_TITLE);
    }

    #[test]
    fn test_blank_user_message_keeps_placeholder() {
        let mut thread = Thread::seeded("hi");
        thread.push(Message::user("   "));
        assert_eq!(thread.title, DEFAULT_THREAD_TITLE);

        thread.push(Message::user("real question"));
        assert_eq!(thread.title, "real question");
    }

    #[test]
    fn test_title_rewritten_only_once() {
        let mut thread = Thread::seeded("hi");
        thread.push(Message::user("first"));
        thread.push(Message::user("second"));

        assert_eq!(thread.title, "first");
    }

    #[test]
    fn test_placeholder_lookalike_leaves_title_open() {
        let mut thread = Thread::seeded("hi");
        thread.push(Message::user("New chat"));
        assert_eq!(thread.title, DEFAULT_THREAD_TITLE);

        thread.push(Message::user("something else"));
        assert_eq!(thread.title, "something else");

        thread.push(Message::user("third"));
        assert_eq!(thread.title, "something else");
    }

    #[test]
    fn test_push_refreshes_updated_at_only() {
        let mut thread = Thread::seeded("hi");
        let created = thread.created_at;
        let msg = Message::user("later");
        let stamp = msg.created_at;
        thread.push(msg);

        assert_eq!(thread.created_at, created);
        assert!(thread.updated_at >= stamp);
        assert_eq!(thread.last_message().map(|m| m.content.as_str()), Some("later"));
    }
}
