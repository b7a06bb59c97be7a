// Preference store module
// Key/value storage for small user settings, with change observation

mod binding;
mod memory;
mod observers;
mod sqlite;

pub use binding::{color_scheme_binding, instant_binding, PreferenceBinding};
pub use memory::MemoryPreferenceStore;
pub use observers::{ObserverId, ObserverRegistry, PreferenceObserver};
pub use sqlite::SqlitePreferenceStore;

pub use crate::models::preference::PreferenceValue;

#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("preference storage failed: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("corrupt preference '{key}': kind '{kind}', value '{value}'")]
    Corrupt {
        key: String,
        kind: String,
        value: String,
    },
}

/// A synchronous key/value store for preferences.
///
/// Every successful `set` or `remove` notifies the observers registered for
/// that key before returning. Observers receive the new value, or `None`
/// when the key was removed.
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<PreferenceValue>, PreferenceError>;

    fn set(&self, key: &str, value: PreferenceValue) -> Result<(), PreferenceError>;

    fn remove(&self, key: &str) -> Result<(), PreferenceError>;

    fn observe(&self, key: &str, observer: PreferenceObserver) -> ObserverId;

    /// Returns `false` if the id was not registered
    fn unobserve(&self, id: ObserverId) -> bool;
}
