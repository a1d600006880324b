//! Core configuration constants.
//!
//! Storage keys, well-known prompt names and load-type keys shared by the
//! store and its hosts.

// =============================================================================
// Persistence
// =============================================================================

/// Storage key holding the JSON preference tree for every user.
pub const STORAGE_KEY: &str = "displayPreferences";

// =============================================================================
// Prompts
// =============================================================================

/// Well-known prompt names.
pub mod prompt_names {
    /// Upload dialog.
    pub const UPLOAD: &str = "upload";
    /// Warning shown when closing dialogs while uploads are running.
    pub const CLOSE_WITH_ACTIVE_UPLOADS: &str = "CloseWithActiveUploads";
}

// =============================================================================
// Loading
// =============================================================================

/// Load-type keys used with `Store::set_loading`.
pub mod load_types {
    /// Directory listing fetch.
    pub const LISTING: &str = "listing";
    /// File upload.
    pub const UPLOAD: &str = "upload";
    /// Preview fetch.
    pub const PREVIEW: &str = "preview";
}

// =============================================================================
// Sorting
// =============================================================================

/// Field used when no sorting preference exists.
pub const DEFAULT_SORT_FIELD: &str = "name";

/// Direction used when no sorting preference exists.
pub const DEFAULT_SORT_ASC: bool = true;

// =============================================================================
// Download URLs
// =============================================================================

/// Download URL layout.
pub mod download {
    /// Authenticated raw download endpoint (relative to the base URL).
    pub const RAW_PATH: &str = "api/raw";
    /// Public (shared link) raw download endpoint.
    pub const PUBLIC_RAW_PATH: &str = "public/api/raw";
    /// Separator between a source and a path in the `files` parameter.
    pub const SOURCE_SEPARATOR: &str = "::";
    /// Separator between entries in the `files` parameter.
    pub const FILES_SEPARATOR: &str = "||";
}
