//! `localStorage` adapter for display preferences.

use filebrowser_core::{KeyValueStorage, StorageError};

use super::dom;

/// [`KeyValueStorage`] over `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage.get_item(key).map_err(|_| StorageError::ReadFailed {
            key: key.to_string(),
        })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed {
                key: key.to_string(),
            })
    }
}
