// Configuration layer for backend client creation

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Where the widget sends conversation history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Endpoint URL; absent or blank means "not configured"
    #[serde(default, alias = "backendUrl", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl BackendConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }

    /// Config with no endpoint. Sends fail with a configuration error.
    pub fn unset() -> Self {
        Self::default()
    }

    /// The endpoint, if one is set and not blank
    pub fn endpoint(&self) -> Option<&str> {
        self.url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint().is_some()
    }
}

/// Factory for creating backend clients from configuration
pub struct ClientFactory;

impl ClientFactory {
    /// Create the HTTP backend client for `config`
    ///
    /// An unset endpoint still yields a client; it reports
    /// [`BackendError::NotConfigured`](crate::BackendError::NotConfigured) on send.
    pub fn create_client(config: BackendConfig) -> Result<Arc<dyn crate::traits::BackendClient>> {
        let client = crate::client::HttpBackendClient::new(config)?;
        Ok(Arc::new(client))
    }
}
