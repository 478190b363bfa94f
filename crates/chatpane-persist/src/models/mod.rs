mod message;
mod thread;

pub use message::{Message, MessageRole};
pub use thread::{Thread, DEFAULT_THREAD_TITLE, TITLE_MAX_CHARS};

use chrono::{DateTime, SubsecRound, Utc};

/// Current time truncated to the millisecond precision the snapshot format stores.
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
