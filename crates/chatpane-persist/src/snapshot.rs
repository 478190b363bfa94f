//! Whole-store snapshot encoding.
//!
//! The snapshot is the JSON array of every thread, written under a single key.
//! Reads never fail outward: a missing, unreadable or non-list blob is the
//! same as having no saved state. Inside a list, elements that do not decode
//! as a thread are skipped and the rest are kept.

use serde_json::Value;

use crate::error::Result;
use crate::models::Thread;
use crate::storage::Storage;

/// Key the snapshot lives under.
pub const STORAGE_KEY: &str = "cgpt_widget_threads_v1";

/// Load the persisted threads, or an empty list when there is nothing usable.
pub fn load(storage: &dyn Storage, key: &str) -> Vec<Thread> {
    match try_load(storage, key) {
        Ok(Some(threads)) => threads,
        Ok(None) => {
            tracing::debug!(key, "No saved threads");
            Vec::new()
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "Ignoring unreadable thread snapshot");
            Vec::new()
        }
    }
}

/// Fallible read used by [`load`]. `Ok(None)` means the key is absent.
pub fn try_load(storage: &dyn Storage, key: &str) -> Result<Option<Vec<Thread>>> {
    let Some(raw) = storage.get_item(key)? else {
        return Ok(None);
    };
    let elements: Vec<Value> = serde_json::from_str(&raw)?;

    let total = elements.len();
    let threads: Vec<Thread> = elements
        .into_iter()
        .enumerate()
        .filter_map(|(index, element)| match serde_json::from_value(element) {
            Ok(thread) => Some(thread),
            Err(e) => {
                tracing::warn!(key, index, error = %e, "Skipping malformed thread in snapshot");
                None
            }
        })
        .collect();

    if threads.len() < total {
        tracing::debug!(key, kept = threads.len(), total, "Loaded partial snapshot");
    }
    Ok(Some(threads))
}

/// Serialize and write the full snapshot.
pub fn save(storage: &dyn Storage, key: &str, threads: &[Thread]) -> Result<()> {
    let raw = serde_json::to_string(threads)?;
    storage.set_item(key, &raw)
}
