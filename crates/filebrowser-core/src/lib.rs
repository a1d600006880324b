//! Client-side state core for the file browser.
//!
//! Contains:
//! - [`AppState`] - The single state record (prompts, selection, preferences)
//! - [`Store`] - The only writer; every mutation notifies subscribers
//! - [`ChangeChannel`] - Synchronous, in-order change notification
//! - [`KeyValueStorage`] - Durable storage seam for display preferences
//! - [`DownloadUrls`] - Download URL providers used for prefetching
//!
//! The crate has no browser dependencies; the web shell plugs in
//! `localStorage`, a toast notifier and console logging.

pub mod channel;
pub mod config;
pub mod error;
mod getters;
pub mod models;
pub mod notify;
pub mod persistence;
pub mod state;
pub mod store;
pub mod urls;

pub use channel::{ChangeChannel, SubscriberId};
pub use error::{StorageError, StoreError};
pub use models::{
    DisplayPreferences, Listing, ListingItem, PathPreferences, Prompt, PromptAction,
    SessionContext, ShareContext, SortingPreference, User,
};
pub use notify::{Notifier, NullNotifier};
pub use persistence::{KeyValueStorage, MemoryStorage};
pub use state::AppState;
pub use store::{Store, StoreBuilder};
pub use urls::{ApiDownloadUrls, DownloadUrls, ShareDescriptor};
