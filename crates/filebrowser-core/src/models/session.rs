//! Session context owned by other subsystems.
//!
//! The router, the auth layer, the share view and the uploader keep these
//! fields current. The store only reads them when a mutation needs to know
//! where it is (which source, which path, which user).

use super::SortingPreference;

/// The signed-in user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct User {
    pub username: String,
    /// Per-user sorting record, created lazily when sorting is first changed.
    pub sorting: Option<SortingPreference>,
}

/// Current route.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteContext {
    /// Full route path (e.g. `/files/default/docs`). Empty when unknown.
    pub path: String,
}

/// Storage sources.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SourcesContext {
    /// Source the current listing is drawn from.
    pub current: Option<String>,
}

/// Shared-link context. `hash` is set only while viewing a share.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShareContext {
    pub hash: Option<String>,
    pub token: Option<String>,
}

/// Upload progress as reported by the uploader.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadContext {
    pub is_uploading: bool,
}

/// Everything the store reads but does not own.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionContext {
    pub user: User,
    pub route: RouteContext,
    pub sources: SourcesContext,
    pub share: ShareContext,
    pub upload: UploadContext,
}
