pub mod client;
pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use client::HttpBackendClient;
pub use config::{BackendConfig, ClientFactory};
pub use error::{BackendError, Result};
pub use traits::BackendClient;
pub use types::{extract_reply, ChatMessage, ChatRequest, Role};
