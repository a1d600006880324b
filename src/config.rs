//! Application configuration.
//!
//! Centralizes the constants used by the browser shell. Constants shared with
//! the state core (storage key, prompt names) live in
//! `filebrowser_core::config`.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the header.
pub const APP_NAME: &str = "FileBrowser";

/// Server base path the app is mounted under. Must end with `/`.
pub const BASE_URL: &str = "/";

/// Username used until the auth layer reports the signed-in user.
pub const DEFAULT_USERNAME: &str = "guest";

// =============================================================================
// Logging
// =============================================================================

/// Most verbose level forwarded to the browser console.
pub const LOG_LEVEL: tracing::Level = tracing::Level::DEBUG;

// =============================================================================
// Notifications
// =============================================================================

/// How long a hint toast stays visible (milliseconds).
pub const HINT_TIMEOUT_MS: u32 = 4000;

/// Hint shown the first time multi-select mode is switched on.
pub const MULTIPLE_SELECTION_HINT: &str =
    "Multiple selection enabled. Click items to add or remove them.";

// =============================================================================
// Listing
// =============================================================================

/// Id of the `<script type="application/json">` element holding the
/// listing rendered by the server.
pub const LISTING_ELEMENT_ID: &str = "listing-data";

/// Sortable columns as `(field, label)`.
pub const SORT_FIELDS: &[(&str, &str)] = &[
    ("name", "Name"),
    ("size", "Size"),
    ("modified", "Modified"),
];

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
