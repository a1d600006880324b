//! Durable storage for display preferences.
//!
//! All users share one storage key holding a JSON object keyed by username:
//!
//! ```text
//! displayPreferences = {
//!   "<username>": { "<source>": { "<path>": { "sorting": {...}, ... } } }
//! }
//! ```
//!
//! Writes are read-modify-write: the stored tree is loaded, only the current
//! user's branch is replaced, and the whole tree is written back. Branches of
//! other users are carried through as raw JSON. This assumes a single writer.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::{Map, Value};

use crate::config::STORAGE_KEY;
use crate::error::{StorageError, StoreError};
use crate::models::DisplayPreferences;

/// String key-value storage (`localStorage` in the browser).
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Rc<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

/// In-memory storage for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
    fail_writes: Cell<bool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `set_item` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Make every later write fail with [`StorageError::WriteFailed`].
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::WriteFailed {
                key: key.to_string(),
            });
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// Load the whole stored tree.
///
/// A missing key yields an empty tree. A value that is not a JSON object is
/// logged and treated as empty; the next write replaces it.
pub fn load_tree(storage: &dyn KeyValueStorage) -> Result<Map<String, Value>, StorageError> {
    let Some(raw) = storage.get_item(STORAGE_KEY)? else {
        return Ok(Map::new());
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(tree)) => Ok(tree),
        Ok(other) => {
            tracing::warn!(kind = json_kind(&other), "stored display preferences are not an object, resetting");
            Ok(Map::new())
        }
        Err(err) => {
            tracing::warn!(error = %err, "stored display preferences are corrupt, resetting");
            Ok(Map::new())
        }
    }
}

/// Load one user's preferences. Undecodable branches are logged and ignored.
pub fn load_user_preferences(
    storage: &dyn KeyValueStorage,
    username: &str,
) -> Result<DisplayPreferences, StorageError> {
    let mut tree = load_tree(storage)?;
    let Some(branch) = tree.remove(username) else {
        return Ok(DisplayPreferences::new());
    };

    match serde_json::from_value(branch) {
        Ok(preferences) => Ok(preferences),
        Err(err) => {
            tracing::warn!(username, error = %err, "ignoring undecodable display preferences");
            Ok(DisplayPreferences::new())
        }
    }
}

/// Replace one user's branch and write the tree back.
pub fn save_user_preferences(
    storage: &dyn KeyValueStorage,
    username: &str,
    preferences: &DisplayPreferences,
) -> Result<(), StoreError> {
    let mut tree = load_tree(storage)?;
    tree.insert(username.to_string(), serde_json::to_value(preferences)?);

    let raw = serde_json::to_string(&Value::Object(tree))?;
    storage.set_item(STORAGE_KEY, &raw)?;

    tracing::debug!(username, sources = preferences.len(), "display preferences saved");
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PathPreferences;
    use serde_json::json;

    fn prefs(source: &str, path: &str, by: &str, asc: bool) -> DisplayPreferences {
        let mut preferences = DisplayPreferences::new();
        preferences
            .entry(source.to_string())
            .or_default()
            .insert(path.to_string(), PathPreferences::with_sorting(by, asc));
        preferences
    }

    fn stored(storage: &MemoryStorage) -> Value {
        let raw = storage.get_item(STORAGE_KEY).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn test_missing_key_is_empty_tree() {
        let storage = MemoryStorage::new();
        assert!(load_tree(&storage).unwrap().is_empty());
        assert!(load_user_preferences(&storage, "alice").unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let storage = MemoryStorage::new();
        let preferences = prefs("s1", "/docs", "name", true);

        save_user_preferences(&storage, "alice", &preferences).unwrap();

        assert_eq!(
            stored(&storage),
            json!({ "alice": { "s1": { "/docs": { "sorting": { "by": "name", "asc": true } } } } })
        );
        assert_eq!(load_user_preferences(&storage, "alice").unwrap(), preferences);
    }

    #[test]
    fn test_other_users_are_preserved() {
        let storage = MemoryStorage::new();
        storage
            .set_item(STORAGE_KEY, r#"{"bob":{"legacy":"format"}}"#)
            .unwrap();

        save_user_preferences(&storage, "alice", &prefs("s1", "/", "size", false)).unwrap();

        let tree = stored(&storage);
        assert_eq!(tree["bob"], json!({ "legacy": "format" }));
        assert_eq!(tree["alice"]["s1"]["/"]["sorting"]["by"], json!("size"));
    }

    #[test]
    fn test_corrupt_json_resets() {
        let storage = MemoryStorage::new();
        storage.set_item(STORAGE_KEY, "{not json").unwrap();
        assert!(load_tree(&storage).unwrap().is_empty());

        save_user_preferences(&storage, "alice", &prefs("s1", "/", "name", true)).unwrap();
        assert!(stored(&storage).get("alice").is_some());
    }

    #[test]
    fn test_non_object_resets() {
        let storage = MemoryStorage::new();
        storage.set_item(STORAGE_KEY, "[1, 2, 3]").unwrap();
        assert!(load_tree(&storage).unwrap().is_empty());
    }

    #[test]
    fn test_undecodable_branch_is_ignored() {
        let storage = MemoryStorage::new();
        storage
            .set_item(STORAGE_KEY, r#"{"alice":{"s1":"not a map"}}"#)
            .unwrap();
        assert!(load_user_preferences(&storage, "alice").unwrap().is_empty());
    }

    #[test]
    fn test_write_failure_propagates() {
        let storage = MemoryStorage::new();
        storage.set_fail_writes(true);

        let err = save_user_preferences(&storage, "alice", &prefs("s1", "/", "name", true))
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Storage(StorageError::WriteFailed { .. })
        ));
        assert_eq!(storage.write_count(), 0);
    }
}
