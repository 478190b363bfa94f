pub mod error;
pub mod models;
pub mod snapshot;
pub mod storage;
pub mod store;

pub use error::{PersistError, Result};
pub use models::{Message, MessageRole, Thread, DEFAULT_THREAD_TITLE, TITLE_MAX_CHARS};
pub use snapshot::STORAGE_KEY;
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{ThreadStore, NEW_THREAD_GREETING, REPLACEMENT_GREETING, WELCOME_GREETING};
