//! Prelude module for convenient imports
//!
//! Import everything you need with:
//! ```rust
//! use chatpane::prelude::*;
//! ```

pub use crate::{
    BackendClient, BackendConfig, ChatMessage, ChatWidget, FileStorage, MemoryStorage, Message,
    MessageRole, MountHandle, MountOptions, Storage, Thread, ThreadStore, WidgetHost,
    DEFAULT_MOUNT_SELECTOR,
};
