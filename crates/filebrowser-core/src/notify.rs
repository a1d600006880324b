//! Notification UI seam.
//!
//! The store fires one-time hints through a [`Notifier`]; how they are shown
//! (toast, console, nothing) is up to the host.

/// User-facing hints fired by mutations.
pub trait Notifier {
    /// Multi-select mode was just switched on.
    fn show_multiple_selection(&self);
}

/// Notifier that only logs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn show_multiple_selection(&self) {
        tracing::debug!("multiple selection enabled");
    }
}
