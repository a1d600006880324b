//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`file_list`] - Listing with selection and prefetch
//! - [`header`] - Sort and selection controls
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`preview`] - Preview popup
//! - [`prompts`] - Modal dialog stack
//! - [`sidebar`] - Collapsible sidebar
//! - [`toast`] - One-time hints

pub mod file_list;
pub mod header;
pub mod icons;
pub mod preview;
pub mod prompts;
pub mod router;
pub mod sidebar;
pub mod toast;

pub use router::AppRouter;
pub use toast::ToastNotifier;
