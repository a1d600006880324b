//! Data models held by the state container.
//!
//! - [`Prompt`], [`PromptAction`] - Modal dialog stack entries
//! - [`DisplayPreferences`], [`PathPreferences`], [`SortingPreference`] - Per-source, per-path settings
//! - [`Listing`], [`ListingItem`] - Directory listing snapshot
//! - [`SessionContext`], [`User`], [`ShareContext`] - Context owned by other subsystems

mod listing;
mod preferences;
mod prompt;
mod session;

pub use listing::{Listing, ListingItem};
pub use preferences::{DisplayPreferences, PathPreferences, SortingPreference};
pub use prompt::{Prompt, PromptAction};
pub use session::{RouteContext, SessionContext, ShareContext, SourcesContext, UploadContext, User};
