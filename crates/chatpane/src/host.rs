//! Mount/unmount surface.
//!
//! A [`WidgetHost`] owns the mount targets an embedder has declared and at
//! most one widget per target. `mount` hands back a [`MountHandle`] token;
//! `unmount` takes it back. There is no process-wide widget state, so any
//! number of hosts and targets can coexist.

use std::collections::HashMap;
use std::sync::Arc;

use chatpane_backend::{BackendClient, BackendConfig, BackendError, ClientFactory};
use chatpane_persist::{Storage, ThreadStore};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::widget::ChatWidget;

/// Target used when the embedder does not name one.
pub const DEFAULT_MOUNT_SELECTOR: &str = "#chat-root";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountOptions {
    /// Backend endpoint; leaving it out surfaces a configuration error on send
    #[serde(default, alias = "backendUrl", skip_serializing_if = "Option::is_none")]
    pub backend_url: Option<String>,
}

impl MountOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = Some(url.into());
        self
    }

    pub fn backend_config(&self) -> BackendConfig {
        BackendConfig {
            url: self.backend_url.clone(),
        }
    }
}

#[derive(Error, Debug)]
pub enum MountError {
    #[error("Mount element not found: {0}")]
    TargetNotFound(String),

    #[error("Backend client error: {0}")]
    Backend(#[from] BackendError),
}

/// Token for one mounted widget instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MountHandle {
    id: Uuid,
    target: String,
}

impl MountHandle {
    pub fn target(&self) -> &str {
        &self.target
    }
}

struct Mounted {
    id: Uuid,
    widget: ChatWidget,
}

pub struct WidgetHost {
    storage: Arc<dyn Storage>,
    targets: HashMap<String, Option<Mounted>>,
}

impl WidgetHost {
    /// Host whose widgets share `storage` (one snapshot key for all of them).
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            targets: HashMap::new(),
        }
    }

    pub fn with_target(mut self, selector: impl Into<String>) -> Self {
        self.add_target(selector);
        self
    }

    /// Declare a mount target. Declaring an existing target keeps its widget.
    pub fn add_target(&mut self, selector: impl Into<String>) {
        self.targets.entry(selector.into()).or_insert(None);
    }

    /// Remove a target, tearing down whatever is mounted on it.
    pub fn remove_target(&mut self, selector: &str) -> bool {
        match self.targets.remove(selector) {
            Some(mounted) => {
                if mounted.is_some() {
                    tracing::info!(target_selector = selector, "Target removed, widget torn down");
                }
                true
            }
            None => false,
        }
    }

    pub fn has_target(&self, selector: &str) -> bool {
        self.targets.contains_key(selector)
    }

    /// Mount a widget talking to the HTTP backend named in `options`.
    pub fn mount(&mut self, selector: &str, options: MountOptions) -> Result<MountHandle, MountError> {
        if !self.has_target(selector) {
            return Err(MountError::TargetNotFound(selector.to_string()));
        }
        let backend = ClientFactory::create_client(options.backend_config())?;
        self.mount_with_backend(selector, backend)
    }

    /// Mount a widget on `selector` using an explicit backend client.
    ///
    /// A widget already mounted on the target is unmounted first; handles
    /// issued for it stop working.
    pub fn mount_with_backend(
        &mut self,
        selector: &str,
        backend: Arc<dyn BackendClient>,
    ) -> Result<MountHandle, MountError> {
        let slot = self
            .targets
            .get_mut(selector)
            .ok_or_else(|| MountError::TargetNotFound(selector.to_string()))?;

        if let Some(previous) = slot.take() {
            tracing::info!(target_selector = selector, previous = %previous.id, "Replacing mounted widget");
        }

        let store = ThreadStore::open(Arc::clone(&self.storage));
        let id = Uuid::new_v4();
        *slot = Some(Mounted {
            id,
            widget: ChatWidget::new(store, backend),
        });

        tracing::info!(target_selector = selector, handle = %id, "Widget mounted");
        Ok(MountHandle {
            id,
            target: selector.to_string(),
        })
    }

    /// Tear down the widget behind `handle`. Stale handles are ignored.
    pub fn unmount(&mut self, handle: &MountHandle) -> bool {
        let Some(slot) = self.targets.get_mut(&handle.target) else {
            return false;
        };
        if !slot.as_ref().is_some_and(|mounted| mounted.id == handle.id) {
            return false;
        }

        *slot = None;
        tracing::info!(target_selector = %handle.target, handle = %handle.id, "Widget unmounted");
        true
    }

    pub fn is_mounted(&self, handle: &MountHandle) -> bool {
        self.widget(handle).is_some()
    }

    pub fn mounted_count(&self) -> usize {
        self.targets.values().filter(|slot| slot.is_some()).count()
    }

    pub fn widget(&self, handle: &MountHandle) -> Option<&ChatWidget> {
        match self.targets.get(&handle.target)? {
            Some(mounted) if mounted.id == handle.id => Some(&mounted.widget),
            _ => None,
        }
    }

    pub fn widget_mut(&mut self, handle: &MountHandle) -> Option<&mut ChatWidget> {
        match self.targets.get_mut(&handle.target)? {
            Some(mounted) if mounted.id == handle.id => Some(&mut mounted.widget),
            _ => None,
        }
    }
}
