use std::sync::Arc;

use crate::error::{PersistError, Result};
use crate::models::{Message, MessageRole, Thread};
use crate::snapshot::{self, STORAGE_KEY};
use crate::storage::Storage;

/// Greeting of the thread seeded when nothing was saved.
pub const WELCOME_GREETING: &str = "Hi! Start a new chat on the left.";
/// Greeting of threads created with [`ThreadStore::create_thread`].
pub const NEW_THREAD_GREETING: &str = "What’s on your mind?";
/// Greeting of the thread that replaces the last deleted one.
pub const REPLACEMENT_GREETING: &str = "New chat started.";

/// Ordered thread list plus the active selection, mirrored to storage.
///
/// Threads are kept most-recently-updated first and the list is never empty.
/// Every mutation writes the full snapshot back; write failures are logged and
/// otherwise ignored, so the store keeps working in memory.
pub struct ThreadStore {
    storage: Arc<dyn Storage>,
    key: String,
    threads: Vec<Thread>,
    active_id: String,
}

impl ThreadStore {
    /// Open the store under the default snapshot key.
    pub fn open(storage: Arc<dyn Storage>) -> Self {
        Self::open_with_key(storage, STORAGE_KEY)
    }

    /// Load the snapshot under `key`, seeding a welcome thread when it is
    /// absent, malformed or empty.
    pub fn open_with_key(storage: Arc<dyn Storage>, key: impl Into<String>) -> Self {
        let key = key.into();
        let mut threads = snapshot::load(storage.as_ref(), &key);

        if threads.is_empty() {
            tracing::debug!(key = %key, "Seeding welcome thread");
            threads.push(Thread::seeded(WELCOME_GREETING));
        }

        let active_id = threads[0].id.clone();
        let store = Self {
            storage,
            key,
            threads,
            active_id,
        };
        store.persist();
        store
    }

    pub fn threads(&self) -> &[Thread] {
        &self.threads
    }

    pub fn len(&self) -> usize {
        self.threads.len()
    }

    /// Never true once the store is open.
    pub fn is_empty(&self) -> bool {
        self.threads.is_empty()
    }

    pub fn get(&self, thread_id: &str) -> Option<&Thread> {
        self.threads.iter().find(|t| t.id == thread_id)
    }

    pub fn active_id(&self) -> &str {
        &self.active().id
    }

    /// The selected thread, falling back to the first one.
    pub fn active(&self) -> &Thread {
        self.get(&self.active_id).unwrap_or(&self.threads[0])
    }

    pub fn select(&mut self, thread_id: &str) -> Result<()> {
        if self.get(thread_id).is_none() {
            return Err(PersistError::ThreadNotFound(thread_id.to_string()));
        }
        self.active_id = thread_id.to_string();
        Ok(())
    }

    /// Insert a fresh thread at the front and make it active.
    pub fn create_thread(&mut self) -> Thread {
        let thread = Thread::seeded(NEW_THREAD_GREETING);
        self.threads.insert(0, thread.clone());
        self.active_id = thread.id.clone();

        tracing::debug!(thread_id = %thread.id, "Created thread");
        self.persist();
        thread
    }

    /// Remove a thread. Returns the replacement when the last thread was
    /// deleted; deleting an unknown id changes nothing.
    pub fn delete_thread(&mut self, thread_id: &str) -> Option<Thread> {
        let before = self.threads.len();
        self.threads.retain(|t| t.id != thread_id);
        if self.threads.len() == before {
            tracing::debug!(thread_id, "Delete ignored, no such thread");
            return None;
        }

        let replacement = if self.threads.is_empty() {
            let thread = Thread::seeded(REPLACEMENT_GREETING);
            self.threads.push(thread.clone());
            self.active_id = thread.id.clone();
            Some(thread)
        } else {
            if self.active_id == thread_id {
                self.active_id = self.threads[0].id.clone();
            }
            None
        };

        tracing::debug!(thread_id, remaining = self.threads.len(), "Deleted thread");
        self.persist();
        replacement
    }

    /// Append a message to `thread_id` and move that thread to the front.
    pub fn append_message(
        &mut self,
        thread_id: &str,
        role: MessageRole,
        content: impl Into<String>,
    ) -> Result<Message> {
        let index = self
            .threads
            .iter()
            .position(|t| t.id == thread_id)
            .ok_or_else(|| PersistError::ThreadNotFound(thread_id.to_string()))?;

        let message = Message::new(role, content);
        let mut thread = self.threads.remove(index);
        thread.push(message.clone());

        // Touched thread leads any ties, then a stable sort restores order.
        self.threads.insert(0, thread);
        self.threads.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

        self.persist();
        Ok(message)
    }

    /// Write the current snapshot.
    pub fn save(&self) -> Result<()> {
        snapshot::save(self.storage.as_ref(), &self.key, &self.threads)
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            tracing::warn!(key = %self.key, error = %e, "Failed to persist threads, continuing in memory");
        }
    }
}
