//! Path-based routing.
//!
//! URL format (relative to `BASE_URL`):
//! - `/files/<source>/<path>` - browse a source
//! - `/public/share/<hash>/<path>` - browse a shared link
//!
//! Anything else redirects to `/files/<same path>`.

use crate::utils::dom;

const FILES_PREFIX: &str = "files";
const SHARE_PREFIX: &str = "public/share";

/// Application routes.
#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    /// Browsing a source: `path` is everything after `/files/`.
    Files { path: String },
    /// Browsing a shared link.
    Share { hash: String, path: String },
}

/// Result of matching a pathname.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    Route(Route),
    /// Pathname to replace the current one with.
    Redirect(String),
}

impl Route {
    /// Match a pathname (as in `location.pathname`) mounted under `base_url`.
    pub fn resolve(pathname: &str, base_url: &str) -> Resolution {
        let base = base_url.trim_matches('/');
        let pathname = pathname.trim_matches('/');
        let relative = if base.is_empty() {
            pathname
        } else {
            strip_segment_prefix(pathname, base).unwrap_or(pathname)
        };
        let relative = relative.trim_matches('/');

        if let Some(rest) = strip_segment_prefix(relative, FILES_PREFIX) {
            return Resolution::Route(Self::Files {
                path: rest.to_string(),
            });
        }

        if let Some(rest) = strip_segment_prefix(relative, SHARE_PREFIX) {
            let (hash, path) = rest.split_once('/').unwrap_or((rest, ""));
            if !hash.is_empty() {
                return Resolution::Route(Self::Share {
                    hash: hash.to_string(),
                    path: path.to_string(),
                });
            }
        }

        let target = Self::Files {
            path: relative.to_string(),
        };
        Resolution::Redirect(target.to_pathname(base_url))
    }

    /// Route path without the base URL, as stored in the session context.
    pub fn route_path(&self) -> String {
        match self {
            Self::Files { path } => join(&format!("/{}", FILES_PREFIX), path),
            Self::Share { hash, path } => join(&format!("/{}/{}", SHARE_PREFIX, hash), path),
        }
    }

    /// Full pathname including the base URL.
    pub fn to_pathname(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.route_path())
    }

    /// Source being browsed (first segment of a files path).
    pub fn source(&self) -> Option<&str> {
        match self {
            Self::Files { path } => path.split('/').next().filter(|s| !s.is_empty()),
            Self::Share { .. } => None,
        }
    }

    /// Share hash when browsing a shared link.
    pub fn share_hash(&self) -> Option<&str> {
        match self {
            Self::Share { hash, .. } => Some(hash),
            Self::Files { .. } => None,
        }
    }

    /// Route of a directory entry at `item_path` (relative to its source).
    ///
    /// Shared links keep their hash; files routes take `item_source`, falling
    /// back to the source currently browsed.
    pub fn enter(&self, item_source: &str, item_path: &str) -> Self {
        let item_path = item_path.trim_matches('/');
        match self {
            Self::Share { hash, .. } => Self::Share {
                hash: hash.clone(),
                path: item_path.to_string(),
            },
            Self::Files { .. } => {
                let source = Some(item_source)
                    .filter(|s| !s.is_empty())
                    .or_else(|| self.source())
                    .unwrap_or_default();
                Self::Files {
                    path: join(source, item_path).trim_start_matches('/').to_string(),
                }
            }
        }
    }

    /// Current route from the browser location.
    ///
    /// Redirects are applied with `replaceState` so they stay out of history.
    pub fn current(base_url: &str) -> Self {
        match Self::resolve(&dom::get_pathname(), base_url) {
            Resolution::Route(route) => route,
            Resolution::Redirect(target) => {
                dom::replace_path(&target);
                match Self::resolve(&target, base_url) {
                    Resolution::Route(route) => route,
                    Resolution::Redirect(_) => Self::Files {
                        path: String::new(),
                    },
                }
            }
        }
    }
}

/// Strip `prefix` when it matches whole leading segments.
fn strip_segment_prefix<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = path.strip_prefix(prefix)?;
    if rest.is_empty() {
        Some(rest)
    } else {
        rest.strip_prefix('/')
    }
}

fn join(prefix: &str, path: &str) -> String {
    if path.is_empty() {
        prefix.to_string()
    } else {
        format!("{}/{}", prefix, path)
    }
}
