//! Directory listing snapshot.
//!
//! The store only compares listings for equality; the fields mirror what the
//! resources endpoint returns so hosts can deserialize straight into them.

use serde::{Deserialize, Serialize};

/// Item type reported for directories.
const DIRECTORY_TYPE: &str = "directory";

/// A directory listing as shown in the file view.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub source: String,
    pub path: String,
    #[serde(default)]
    pub items: Vec<ListingItem>,
}

/// A single entry of a [`Listing`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingItem {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub modified: Option<String>,
    /// `"directory"` or a MIME-like file type.
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl ListingItem {
    pub fn is_dir(&self) -> bool {
        self.kind == DIRECTORY_TYPE
    }
}

impl Listing {
    pub fn get(&self, index: usize) -> Option<&ListingItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
