//! Browser glue for the state core.
//!
//! Provides:
//! - [`dom`] - Window, location, storage and document helpers
//! - [`BrowserStorage`] - `localStorage`-backed preference storage
//! - [`format`] - Size and date formatting for listing columns
//! - [`log`] - `tracing` output routed to the browser console
//! - [`locale`] - Browser language negotiation

pub mod dom;
pub mod format;
pub mod locale;
pub mod log;
mod storage;

pub use storage::BrowserStorage;
