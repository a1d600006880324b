//! Download URL providers.
//!
//! The store only decides *which* URL to build for a prefetch (shared link or
//! authenticated); building it is delegated to a [`DownloadUrls`] provider.
//! [`ApiDownloadUrls`] targets the server's raw download endpoints.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::config::download::{FILES_SEPARATOR, PUBLIC_RAW_PATH, RAW_PATH, SOURCE_SEPARATOR};

/// A shared link as needed to download from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShareDescriptor<'a> {
    pub path: &'a str,
    pub hash: &'a str,
    pub token: Option<&'a str>,
}

/// Builds download URLs.
pub trait DownloadUrls {
    /// Authenticated download of `path` within `source`.
    fn file_download_url(&self, source: &str, path: &str, inline: bool) -> String;

    /// Public download of `paths` through a shared link.
    fn share_download_url(
        &self,
        share: &ShareDescriptor<'_>,
        paths: &[&str],
        inline: bool,
    ) -> String;
}

/// URLs for the server's `api/raw` and `public/api/raw` endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiDownloadUrls {
    base_url: String,
}

impl ApiDownloadUrls {
    /// `base_url` is the server base path (e.g. `/` or `/filebrowser/`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiDownloadUrls {
    fn default() -> Self {
        Self::new("/")
    }
}

impl DownloadUrls for ApiDownloadUrls {
    fn file_download_url(&self, source: &str, path: &str, inline: bool) -> String {
        let mut url = format!(
            "{}{}?files={}{}{}",
            self.base_url,
            RAW_PATH,
            encode_uri_component(source),
            SOURCE_SEPARATOR,
            encode_uri_component(path)
        );
        if inline {
            url.push_str("&inline=true");
        }
        url
    }

    fn share_download_url(
        &self,
        share: &ShareDescriptor<'_>,
        paths: &[&str],
        inline: bool,
    ) -> String {
        let files = paths
            .iter()
            .map(|p| encode_uri_component(p))
            .collect::<Vec<_>>()
            .join(FILES_SEPARATOR);

        let mut url = format!(
            "{}{}?files={}&hash={}",
            self.base_url,
            PUBLIC_RAW_PATH,
            files,
            encode_uri_component(share.hash)
        );
        if let Some(token) = share.token.filter(|t| !t.is_empty()) {
            url.push_str("&token=");
            url.push_str(&encode_uri_component(token));
        }
        if inline {
            url.push_str("&inline=true");
        }
        url
    }
}

/// Characters `encodeURIComponent` escapes: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode with `encodeURIComponent` rules, as UTF-8 bytes.
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}
