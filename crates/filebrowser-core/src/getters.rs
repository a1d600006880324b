//! Derived, read-only views over [`AppState`].
//!
//! None of these mutate; the store calls them before deciding how to mutate
//! (e.g. which key display preferences are stored under).

use crate::config::{load_types, prompt_names};
use crate::models::{PathPreferences, Prompt, SortingPreference};
use crate::state::AppState;

impl AppState {
    /// Check if the current view is a shared link.
    pub fn is_share(&self) -> bool {
        self.current_hash().is_some()
    }

    /// Hash of the share being viewed, if any.
    pub fn current_hash(&self) -> Option<&str> {
        self.context
            .share
            .hash
            .as_deref()
            .filter(|hash| !hash.is_empty())
    }

    /// Key display preferences are stored under: the share hash while viewing
    /// a share, the current source otherwise.
    pub fn preference_source(&self) -> Option<&str> {
        if self.is_share() {
            return self.current_hash();
        }
        self.context
            .sources
            .current
            .as_deref()
            .filter(|source| !source.is_empty())
    }

    /// Current route path, if known.
    pub fn route_path(&self) -> Option<&str> {
        Some(self.context.route.path.as_str()).filter(|path| !path.is_empty())
    }

    /// Check if an upload is running, either reported by the uploader or
    /// tracked as an upload load type.
    pub fn has_active_uploads(&self) -> bool {
        self.context.upload.is_uploading || self.is_loading(load_types::UPLOAD)
    }

    /// Check if a prompt with this name is anywhere on the stack.
    pub fn has_prompt(&self, name: &str) -> bool {
        self.prompts.iter().any(|p| p.is(name))
    }

    /// The active (topmost) prompt.
    pub fn current_prompt(&self) -> Option<&Prompt> {
        self.prompts.last()
    }

    pub fn current_prompt_name(&self) -> Option<&str> {
        self.current_prompt().map(|p| p.name.as_str())
    }

    /// Whether closing dialogs now must ask for confirmation first.
    pub(crate) fn needs_upload_close_warning(&self) -> bool {
        self.has_active_uploads()
            && self.has_prompt(prompt_names::UPLOAD)
            && !self.has_prompt(prompt_names::CLOSE_WITH_ACTIVE_UPLOADS)
    }

    pub fn is_loading(&self, load_type: &str) -> bool {
        self.loading.contains(load_type)
    }

    pub fn is_any_loading(&self) -> bool {
        !self.loading.is_empty()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Preferences stored for the current source and path.
    pub fn current_display_preferences(&self) -> Option<&PathPreferences> {
        let source = self.preference_source()?;
        let path = self.route_path()?;
        self.display_preferences.get(source)?.get(path)
    }

    /// Sorting to apply to the current listing: the path preference, then the
    /// user's record, then the default.
    pub fn effective_sorting(&self) -> SortingPreference {
        self.current_display_preferences()
            .and_then(|prefs| prefs.sorting.clone())
            .or_else(|| self.context.user.sorting.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_at(source: &str, path: &str) -> AppState {
        let mut state = AppState::new();
        state.context.sources.current = Some(source.to_string());
        state.context.route.path = path.to_string();
        state
    }

    #[test]
    fn test_share_context() {
        let mut state = AppState::new();
        assert!(!state.is_share());
        assert_eq!(state.current_hash(), None);

        state.context.share.hash = Some(String::new());
        assert!(!state.is_share());

        state.context.share.hash = Some("abc123".to_string());
        assert!(state.is_share());
        assert_eq!(state.current_hash(), Some("abc123"));
    }

    #[test]
    fn test_preference_source_prefers_share_hash() {
        let mut state = state_at("default", "/files/default");
        assert_eq!(state.preference_source(), Some("default"));

        state.context.share.hash = Some("abc123".to_string());
        assert_eq!(state.preference_source(), Some("abc123"));
    }

    #[test]
    fn test_missing_context() {
        let state = AppState::new();
        assert_eq!(state.preference_source(), None);
        assert_eq!(state.route_path(), None);
        assert!(state.current_display_preferences().is_none());
    }

    #[test]
    fn test_active_uploads() {
        let mut state = AppState::new();
        assert!(!state.has_active_uploads());

        state.loading.insert(load_types::UPLOAD.to_string());
        assert!(state.has_active_uploads());

        state.loading.clear();
        state.context.upload.is_uploading = true;
        assert!(state.has_active_uploads());
    }

    #[test]
    fn test_upload_close_warning_conditions() {
        let mut state = AppState::new();
        state.context.upload.is_uploading = true;
        assert!(!state.needs_upload_close_warning());

        state.prompts.push(Prompt::from(prompt_names::UPLOAD));
        assert!(state.needs_upload_close_warning());

        state
            .prompts
            .push(Prompt::from(prompt_names::CLOSE_WITH_ACTIVE_UPLOADS));
        assert!(!state.needs_upload_close_warning());
    }

    #[test]
    fn test_current_prompt_is_top_of_stack() {
        let mut state = AppState::new();
        assert_eq!(state.current_prompt_name(), None);

        state.prompts.push(Prompt::from("a"));
        state.prompts.push(Prompt::from("b"));
        assert_eq!(state.current_prompt_name(), Some("b"));
        assert!(state.has_prompt("a"));
        assert!(!state.has_prompt("c"));
    }

    #[test]
    fn test_effective_sorting_fallbacks() {
        let mut state = state_at("default", "/files/default");
        assert_eq!(state.effective_sorting(), SortingPreference::default());

        state.context.user.sorting = Some(SortingPreference::new("size", false));
        assert_eq!(state.effective_sorting(), SortingPreference::new("size", false));

        state
            .display_preferences
            .entry("default".to_string())
            .or_default()
            .insert(
                "/files/default".to_string(),
                PathPreferences::with_sorting("modified", true),
            );
        assert_eq!(
            state.effective_sorting(),
            SortingPreference::new("modified", true)
        );
    }

    #[test]
    fn test_selection_getters() {
        let mut state = AppState::new();
        state.selected = vec![3, 1];
        assert_eq!(state.selected_count(), 2);
        assert!(state.is_selected(1));
        assert!(!state.is_selected(2));
    }
}
