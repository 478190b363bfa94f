//! # Chatpane
//!
//! Embeddable chat widget core: a sidebar of conversation threads, a message
//! pane and an input that forwards the conversation to a backend endpoint.
//!
//! ## Overview
//!
//! - **Threads** live in a [`ThreadStore`], most recently updated first, and
//!   are written back to a [`Storage`] after every change
//! - **Replies** come from a [`BackendClient`]: one JSON POST per message
//! - **Widgets** are mounted on named targets of a [`WidgetHost`] and driven
//!   through [`ChatWidget`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatpane::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let storage = Arc::new(FileStorage::new(".chatpane"));
//!     let mut host = WidgetHost::new(storage).with_target(DEFAULT_MOUNT_SELECTOR);
//!
//!     let handle = host.mount(
//!         DEFAULT_MOUNT_SELECTOR,
//!         MountOptions::new().backend_url("http://localhost:8787/chat"),
//!     )?;
//!
//!     if let Some(widget) = host.widget_mut(&handle) {
//!         if let Some(reply) = widget.send_text("Hello!").await {
//!             println!("{}", reply.content);
//!         }
//!     }
//!
//!     host.unmount(&handle);
//!     Ok(())
//! }
//! ```
//!
//! ## Crates
//!
//! - **`chatpane-persist`**: thread/message model, snapshot encoding, storage
//! - **`chatpane-backend`**: the HTTP backend client
//! - **`chatpane`** (this crate): widget controller, view model, mount host

pub mod host;
pub mod prelude;
pub mod view;
pub mod widget;

pub use host::{MountError, MountHandle, MountOptions, WidgetHost, DEFAULT_MOUNT_SELECTOR};
pub use view::{format_date, SidebarEntry};
pub use widget::{ChatWidget, PendingReply, ReplyOutcome, EMPTY_REPLY_PLACEHOLDER, ERROR_PREFIX};

pub use chatpane_backend::{
    BackendClient, BackendConfig, BackendError, ChatMessage, ClientFactory, HttpBackendClient, Role,
};

pub use chatpane_persist::{
    FileStorage, MemoryStorage, Message, MessageRole, PersistError, Storage, Thread, ThreadStore,
    DEFAULT_THREAD_TITLE, STORAGE_KEY,
};
