mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::Result;

/// String key/value storage in the shape of browser local storage.
///
/// Implementations are synchronous: every call completes before returning,
/// which is what lets the store treat a mutation plus its save as one step.
pub trait Storage: Send + Sync {
    /// Read the value stored under `key`, `None` if nothing is stored
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove_item(&self, key: &str) -> Result<()>;
}
