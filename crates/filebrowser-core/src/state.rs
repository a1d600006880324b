//! The state container.
//!
//! [`AppState`] is plain data. Fields are crate-private so the only way to
//! change them from outside is through [`Store`](crate::Store); readers get
//! the accessors below and the derived getters in `getters.rs`.

use std::collections::BTreeSet;

use crate::models::{DisplayPreferences, Listing, Prompt, SessionContext};

/// UI state of the file browser.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub(crate) popup_preview_source: Option<String>,
    pub(crate) listing: Option<Listing>,
    /// Dialog stack; the last entry is the active one.
    pub(crate) prompts: Vec<Prompt>,
    /// Load types currently in progress. Finished loads are removed.
    pub(crate) loading: BTreeSet<String>,
    pub(crate) multiple: bool,
    /// Selected listing indices in selection order.
    pub(crate) selected: Vec<usize>,
    pub(crate) last_selected_index: Option<usize>,
    pub(crate) display_preferences: DisplayPreferences,
    pub(crate) sticky_sidebar: bool,
    pub(crate) show_sidebar: bool,
    pub(crate) context: SessionContext,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn popup_preview_source(&self) -> Option<&str> {
        self.popup_preview_source.as_deref()
    }

    pub fn listing(&self) -> Option<&Listing> {
        self.listing.as_ref()
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn loading(&self) -> &BTreeSet<String> {
        &self.loading
    }

    pub fn multiple(&self) -> bool {
        self.multiple
    }

    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    pub fn last_selected_index(&self) -> Option<usize> {
        self.last_selected_index
    }

    pub fn display_preferences(&self) -> &DisplayPreferences {
        &self.display_preferences
    }

    pub fn sticky_sidebar(&self) -> bool {
        self.sticky_sidebar
    }

    pub fn show_sidebar(&self) -> bool {
        self.show_sidebar
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Hide the sidebar unless it is pinned.
    pub(crate) fn collapse_sidebar(&mut self) {
        if !self.sticky_sidebar {
            self.show_sidebar = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = AppState::new();
        assert!(state.popup_preview_source().is_none());
        assert!(state.listing().is_none());
        assert!(state.prompts().is_empty());
        assert!(state.loading().is_empty());
        assert!(!state.multiple());
        assert!(state.selected().is_empty());
        assert_eq!(state.last_selected_index(), None);
        assert!(state.display_preferences().is_empty());
        assert!(!state.show_sidebar());
    }

    #[test]
    fn test_collapse_sidebar_respects_sticky() {
        let mut state = AppState::new();
        state.show_sidebar = true;
        state.sticky_sidebar = true;
        state.collapse_sidebar();
        assert!(state.show_sidebar());

        state.sticky_sidebar = false;
        state.collapse_sidebar();
        assert!(!state.show_sidebar());
    }
}
