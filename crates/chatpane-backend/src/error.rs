use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Backend endpoint is not configured. Pass backend_url when mounting the widget.")]
    NotConfigured,

    #[error("Backend error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid backend response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl BackendError {
    /// True when the failure comes from missing configuration rather than the network.
    pub fn is_configuration(&self) -> bool {
        matches!(self, BackendError::NotConfigured)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            BackendError::Http { status, .. } => Some(*status),
            BackendError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, BackendError>;
