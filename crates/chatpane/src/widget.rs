//! Widget controller: input buffer, awaiting-reply flag and the send cycle.

use std::sync::Arc;

use chatpane_backend::{BackendClient, BackendError, ChatMessage};
use chatpane_persist::{Message, MessageRole, PersistError, Thread, ThreadStore};

use crate::view::SidebarEntry;

/// Shown in place of an empty successful reply.
pub const EMPTY_REPLY_PLACEHOLDER: &str = "(empty response)";
/// Prefix of assistant messages that report a failed send.
pub const ERROR_PREFIX: &str = "⚠️ ";

/// A user message that has been recorded and is waiting for its reply.
///
/// Produced by [`ChatWidget::begin_send`]. The widget stays usable while the
/// reply is outstanding; the reply always lands on [`PendingReply::thread_id`],
/// whichever thread is selected by then.
#[derive(Debug, Clone)]
pub struct PendingReply {
    thread_id: String,
    history: Vec<ChatMessage>,
}

impl PendingReply {
    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Perform the single backend round trip.
    pub async fn dispatch(self, backend: &dyn BackendClient) -> ReplyOutcome {
        let result = backend.send(self.history).await;
        ReplyOutcome {
            thread_id: self.thread_id,
            result,
        }
    }
}

/// Result of a dispatched [`PendingReply`], fed back through
/// [`ChatWidget::finish_send`].
#[derive(Debug)]
pub struct ReplyOutcome {
    pub thread_id: String,
    pub result: Result<String, BackendError>,
}

impl ReplyOutcome {
    /// Text of the assistant message this outcome turns into.
    pub fn message_text(&self) -> String {
        match &self.result {
            Ok(text) if text.is_empty() => EMPTY_REPLY_PLACEHOLDER.to_string(),
            Ok(text) => text.clone(),
            Err(e) => format!("{}{}", ERROR_PREFIX, e),
        }
    }
}

pub struct ChatWidget {
    store: ThreadStore,
    backend: Arc<dyn BackendClient>,
    input: String,
    awaiting_reply: bool,
}

impl ChatWidget {
    pub fn new(store: ThreadStore, backend: Arc<dyn BackendClient>) -> Self {
        Self {
            store,
            backend,
            input: String::new(),
            awaiting_reply: false,
        }
    }

    pub fn store(&self) -> &ThreadStore {
        &self.store
    }

    pub fn threads(&self) -> &[Thread] {
        self.store.threads()
    }

    pub fn active_thread(&self) -> &Thread {
        self.store.active()
    }

    /// Header title: the active thread's title.
    pub fn title(&self) -> &str {
        &self.store.active().title
    }

    pub fn messages(&self) -> &[Message] {
        &self.store.active().messages
    }

    pub fn sidebar(&self) -> Vec<SidebarEntry> {
        let active_id = self.store.active_id();
        self.store
            .threads()
            .iter()
            .map(|t| SidebarEntry::for_thread(t, t.id == active_id))
            .collect()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    pub fn can_send(&self) -> bool {
        !self.awaiting_reply && !self.input.trim().is_empty()
    }

    pub fn backend(&self) -> Arc<dyn BackendClient> {
        Arc::clone(&self.backend)
    }

    pub fn new_chat(&mut self) -> Thread {
        self.store.create_thread()
    }

    pub fn delete_chat(&mut self, thread_id: &str) -> Option<Thread> {
        self.store.delete_thread(thread_id)
    }

    pub fn select(&mut self, thread_id: &str) -> Result<(), PersistError> {
        self.store.select(thread_id)
    }

    /// Record the input as a user message on the active thread and return the
    /// history to send. `None` when the input is blank or a reply is pending.
    pub fn begin_send(&mut self) -> Option<PendingReply> {
        if !self.can_send() {
            return None;
        }

        let text = self.input.trim().to_string();
        let thread = self.store.active();
        let thread_id = thread.id.clone();

        // History is captured before the user message lands in the store.
        let mut history: Vec<ChatMessage> = thread.messages.iter().map(ChatMessage::from).collect();
        history.push(ChatMessage::user(text.clone()));

        self.input.clear();
        self.awaiting_reply = true;

        if let Err(e) = self.store.append_message(&thread_id, MessageRole::User, text) {
            tracing::warn!(thread_id = %thread_id, error = %e, "Failed to record user message");
        }

        tracing::debug!(thread_id = %thread_id, messages = history.len(), "Send started");
        Some(PendingReply { thread_id, history })
    }

    /// Append the reply (or the error) to the thread the send targeted and
    /// clear the awaiting flag.
    ///
    /// Returns `None` when that thread has been deleted in the meantime; the
    /// reply is dropped.
    pub fn finish_send(&mut self, outcome: ReplyOutcome) -> Option<Message> {
        self.awaiting_reply = false;

        if let Err(e) = &outcome.result {
            tracing::warn!(thread_id = %outcome.thread_id, error = %e, "Send failed");
        }

        let text = outcome.message_text();
        match self
            .store
            .append_message(&outcome.thread_id, MessageRole::Assistant, text)
        {
            Ok(message) => Some(message),
            Err(e) => {
                tracing::warn!(thread_id = %outcome.thread_id, error = %e, "Dropping reply for missing thread");
                None
            }
        }
    }

    /// Full send cycle for callers that do not need the widget while waiting.
    pub async fn send(&mut self) -> Option<Message> {
        let pending = self.begin_send()?;
        let backend = self.backend();
        let outcome = pending.dispatch(backend.as_ref()).await;
        self.finish_send(outcome)
    }

    pub async fn send_text(&mut self, text: impl Into<String>) -> Option<Message> {
        self.set_input(text);
        self.send().await
    }
}
