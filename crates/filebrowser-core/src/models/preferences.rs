//! Display preference types.
//!
//! Preferences are stored per source, then per path. Each path holds an
//! open-ended object; only `sorting` is interpreted by the core, every other
//! key is carried through untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::{DEFAULT_SORT_ASC, DEFAULT_SORT_FIELD};

/// Source id → path → preferences.
pub type DisplayPreferences = BTreeMap<String, BTreeMap<String, PathPreferences>>;

/// Listing sort order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortingPreference {
    /// Field name (`name`, `size`, `modified`, ...).
    pub by: String,
    /// Ascending when `true`.
    pub asc: bool,
}

impl SortingPreference {
    pub fn new(by: impl Into<String>, asc: bool) -> Self {
        Self { by: by.into(), asc }
    }
}

impl Default for SortingPreference {
    fn default() -> Self {
        Self::new(DEFAULT_SORT_FIELD, DEFAULT_SORT_ASC)
    }
}

/// Preferences stored for a single path.
///
/// Serialized as a flat JSON object: `{"sorting": {...}, "<other>": ...}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PathPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sorting: Option<SortingPreference>,
    /// Keys the core does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PathPreferences {
    /// Preferences carrying only a sorting entry.
    pub fn with_sorting(by: impl Into<String>, asc: bool) -> Self {
        Self {
            sorting: Some(SortingPreference::new(by, asc)),
            extra: Map::new(),
        }
    }

    /// Add an uninterpreted key.
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Shallow merge: every top-level key present in `payload` replaces the
    /// existing one, absent keys are left alone.
    pub fn merge(&mut self, payload: PathPreferences) {
        if let Some(sorting) = payload.sorting {
            self.sorting = Some(sorting);
        }
        self.extra.extend(payload.extra);
    }

    pub fn is_empty(&self) -> bool {
        self.sorting.is_none() && self.extra.is_empty()
    }
}
