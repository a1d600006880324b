//! Data models for the browser shell.
//!
//! - [`Route`], [`Resolution`] - Path-based routing (`/files/...`, `/public/share/...`)

mod route;

pub use route::{Resolution, Route};
