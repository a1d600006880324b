//! The mutation core.
//!
//! [`Store`] owns the [`AppState`] and is the only thing that writes to it.
//! Every public mutation emits on the [`ChangeChannel`] once it is applied.
//! Simple setters skip both the write and the notification when the value is
//! already current. Composite operations (`reset_selected`,
//! `update_listing_sort_config`) call other operations and therefore notify
//! more than once.
//!
//! # Prompt stack
//!
//! - [`Store::show_hover`] pushes a dialog
//! - [`Store::close_top_hover`] pops the active one
//! - [`Store::close_hovers`] clears the stack, unless an upload dialog is open
//!   while uploads are running: then a `CloseWithActiveUploads` warning is
//!   pushed on top instead, and the stack is only cleared if the user confirms

use std::rc::Rc;

use crate::channel::{ChangeChannel, SubscriberId};
use crate::config::prompt_names;
use crate::error::StoreError;
use crate::models::{
    Listing, ListingItem, PathPreferences, Prompt, SessionContext, SortingPreference,
};
use crate::notify::{Notifier, NullNotifier};
use crate::persistence::{self, KeyValueStorage, MemoryStorage};
use crate::state::AppState;
use crate::urls::{ApiDownloadUrls, DownloadUrls, ShareDescriptor};

/// Owner and sole writer of the application state.
pub struct Store {
    state: AppState,
    channel: ChangeChannel,
    storage: Rc<dyn KeyValueStorage>,
    notifier: Rc<dyn Notifier>,
    urls: Rc<dyn DownloadUrls>,
}

/// Builder for [`Store`].
///
/// Unset collaborators default to in-memory storage, a logging notifier and
/// download URLs rooted at `/`.
#[derive(Default)]
pub struct StoreBuilder {
    context: SessionContext,
    storage: Option<Rc<dyn KeyValueStorage>>,
    notifier: Option<Rc<dyn Notifier>>,
    urls: Option<Rc<dyn DownloadUrls>>,
}

impl StoreBuilder {
    pub fn storage(mut self, storage: Rc<dyn KeyValueStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn notifier(mut self, notifier: Rc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn download_urls(mut self, urls: Rc<dyn DownloadUrls>) -> Self {
        self.urls = Some(urls);
        self
    }

    /// Initial session context (user, route, source, share).
    pub fn context(mut self, context: SessionContext) -> Self {
        self.context = context;
        self
    }

    pub fn build(self) -> Store {
        let state = AppState {
            context: self.context,
            ..AppState::default()
        };

        Store {
            state,
            channel: ChangeChannel::new(),
            storage: self
                .storage
                .unwrap_or_else(|| Rc::new(MemoryStorage::new())),
            notifier: self.notifier.unwrap_or_else(|| Rc::new(NullNotifier)),
            urls: self
                .urls
                .unwrap_or_else(|| Rc::new(ApiDownloadUrls::default())),
        }
    }
}

impl Store {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> StoreBuilder {
        StoreBuilder::default()
    }

    /// Read access to the whole state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Session context for the subsystems that own it (router, auth, share
    /// view, uploader). Changes made here do not notify.
    pub fn context_mut(&mut self) -> &mut SessionContext {
        &mut self.state.context
    }

    pub fn subscribe(&mut self, listener: impl Fn(&AppState) + 'static) -> SubscriberId {
        self.channel.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.channel.unsubscribe(id)
    }

    fn emit(&self) {
        self.channel.emit(&self.state);
    }

    // =========================================================================
    // Preview & listing
    // =========================================================================

    pub fn set_preview_source(&mut self, value: Option<String>) {
        if value == self.state.popup_preview_source {
            return;
        }
        self.state.popup_preview_source = value;
        self.emit();
    }

    pub fn update_listing(&mut self, value: Option<Listing>) {
        if value == self.state.listing {
            return;
        }
        self.state.listing = value;
        self.emit();
    }

    // =========================================================================
    // Prompts
    // =========================================================================

    /// Close every dialog.
    ///
    /// While uploads are running and the upload dialog is open, a
    /// `CloseWithActiveUploads` warning is pushed instead. Its confirm clears
    /// the stack; its cancel pops the warning. Calling this again while the
    /// warning is already open clears the stack.
    pub fn close_hovers(&mut self) {
        if self.state.needs_upload_close_warning() {
            tracing::debug!("uploads in progress, asking before closing dialogs");
            self.show_hover(
                Prompt::new(prompt_names::CLOSE_WITH_ACTIVE_UPLOADS)
                    .on_confirm(|store| store.clear_prompts())
                    .on_cancel(|store| store.close_top_hover()),
            );
            return;
        }
        self.clear_prompts();
    }

    fn clear_prompts(&mut self) {
        self.state.prompts.clear();
        self.state.collapse_sidebar();
        self.emit();
    }

    /// Pop the active dialog. The sidebar collapses (unless sticky) only when
    /// the stack ends up empty.
    pub fn close_top_hover(&mut self) {
        if let Some(prompt) = self.state.prompts.pop() {
            tracing::debug!(name = %prompt.name, depth = self.state.prompts.len(), "prompt closed");
        }
        if self.state.prompts.is_empty() {
            self.state.collapse_sidebar();
        }
        self.emit();
    }

    /// Push a dialog on top of the stack.
    pub fn show_hover(&mut self, prompt: impl Into<Prompt>) {
        let prompt = prompt.into();
        tracing::debug!(name = %prompt.name, depth = self.state.prompts.len() + 1, "prompt shown");
        self.state.prompts.push(prompt);
        self.emit();
    }

    /// Run the active dialog's confirm callback, or close it if it has none.
    pub fn run_prompt_confirm(&mut self) {
        let confirm = self.state.current_prompt().and_then(|p| p.confirm.clone());
        match confirm {
            Some(confirm) => confirm(self),
            None => self.close_top_hover(),
        }
    }

    /// Run the active dialog's cancel callback, or close it if it has none.
    pub fn run_prompt_cancel(&mut self) {
        let cancel = self.state.current_prompt().and_then(|p| p.cancel.clone());
        match cancel {
            Some(cancel) => cancel(self),
            None => self.close_top_hover(),
        }
    }

    // =========================================================================
    // Loading & sidebar
    // =========================================================================

    /// Mark `load_type` as in progress (`true`) or finished (`false`).
    pub fn set_loading(&mut self, load_type: &str, status: bool) {
        if status {
            self.state.loading.insert(load_type.to_string());
        } else {
            self.state.loading.remove(load_type);
        }
        self.emit();
    }

    pub fn set_show_sidebar(&mut self, value: bool) {
        if value == self.state.show_sidebar {
            return;
        }
        self.state.show_sidebar = value;
        self.emit();
    }

    pub fn set_sticky_sidebar(&mut self, value: bool) {
        if value == self.state.sticky_sidebar {
            return;
        }
        self.state.sticky_sidebar = value;
        self.emit();
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Toggle multi-select mode. Turning it on shows a one-time hint.
    pub fn set_multiple(&mut self, value: bool) {
        if value == self.state.multiple {
            return;
        }
        self.state.multiple = value;
        if value {
            self.notifier.show_multiple_selection();
        }
        self.emit();
    }

    pub fn add_selected(&mut self, index: usize) {
        self.state.selected.push(index);
        self.emit();
    }

    /// Remove the first occurrence of `index`. Absent values are ignored.
    pub fn remove_selected(&mut self, index: usize) {
        let Some(position) = self.state.selected.iter().position(|&i| i == index) else {
            return;
        };
        self.state.selected.remove(position);
        self.emit();
    }

    /// Clear the selection and leave multi-select mode.
    pub fn reset_selected(&mut self) {
        self.state.selected.clear();
        self.set_multiple(false);
        self.emit();
    }

    pub fn set_last_selected_index(&mut self, index: Option<usize>) {
        if index == self.state.last_selected_index {
            return;
        }
        self.state.last_selected_index = index;
        self.emit();
    }

    // =========================================================================
    // Display preferences
    // =========================================================================

    /// Change how the current listing is sorted and remember it for this
    /// source and path. A failed write leaves the user record as it was.
    pub fn update_listing_sort_config(&mut self, field: &str, asc: bool) -> Result<(), StoreError> {
        let user_sorting = self.state.context.user.sorting.clone();
        self.state
            .context
            .user
            .sorting
            .get_or_insert_with(SortingPreference::default);
        if let Err(err) = self.update_display_preferences(PathPreferences::with_sorting(field, asc)) {
            self.state.context.user.sorting = user_sorting;
            return Err(err);
        }
        self.emit();
        Ok(())
    }

    /// Shallow-merge `payload` into the preferences of the current source and
    /// path, then persist the user's whole preference tree.
    ///
    /// Without a current source (or share hash) and path this does nothing.
    /// If the write fails, the in-memory state is left as it was and no
    /// notification is sent.
    pub fn update_display_preferences(&mut self, payload: PathPreferences) -> Result<(), StoreError> {
        let (Some(source), Some(path)) = (self.state.preference_source(), self.state.route_path())
        else {
            tracing::debug!("no source or path, display preferences not updated");
            return Ok(());
        };

        let mut preferences = self.state.display_preferences.clone();
        preferences
            .entry(source.to_string())
            .or_default()
            .entry(path.to_string())
            .or_default()
            .merge(payload);

        persistence::save_user_preferences(
            self.storage.as_ref(),
            &self.state.context.user.username,
            &preferences,
        )?;

        self.state.display_preferences = preferences;
        self.emit();
        Ok(())
    }

    /// Replace the in-memory preferences with the current user's stored ones.
    pub fn hydrate_display_preferences(&mut self) -> Result<(), StoreError> {
        let preferences = persistence::load_user_preferences(
            self.storage.as_ref(),
            &self.state.context.user.username,
        )?;
        tracing::debug!(sources = preferences.len(), "display preferences loaded");
        self.state.display_preferences = preferences;
        self.emit();
        Ok(())
    }

    // =========================================================================
    // Prefetch
    // =========================================================================

    /// URL used to prefetch `item`: the shared-link download while viewing a
    /// share, the authenticated download otherwise. Does not mutate.
    pub fn prefetch_url(&self, item: &ListingItem) -> String {
        if let Some(hash) = self.state.current_hash() {
            let share = ShareDescriptor {
                path: &item.path,
                hash,
                token: self.state.context.share.token.as_deref(),
            };
            return self
                .urls
                .share_download_url(&share, &[item.path.as_str()], true);
        }
        self.urls.file_download_url(&item.source, &item.path, true)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{STORAGE_KEY, load_types};
    use std::cell::Cell;

    struct CountingNotifier(Cell<usize>);

    impl Notifier for CountingNotifier {
        fn show_multiple_selection(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn counted(mut store: Store) -> (Store, Rc<Cell<usize>>) {
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        store.subscribe(move |_| counter.set(counter.get() + 1));
        (store, count)
    }

    fn names(store: &Store) -> Vec<&str> {
        store
            .state()
            .prompts()
            .iter()
            .map(|p| p.name.as_str())
            .collect()
    }

    fn at_location(store: &mut Store, source: &str, path: &str) {
        let context = store.context_mut();
        context.user.username = "alice".to_string();
        context.sources.current = Some(source.to_string());
        context.route.path = path.to_string();
    }

    #[test]
    fn test_preview_source_is_idempotent() {
        let (mut store, count) = counted(Store::new());
        store.set_preview_source(Some("/docs/a.png".to_string()));
        store.set_preview_source(Some("/docs/a.png".to_string()));
        assert_eq!(store.state().popup_preview_source(), Some("/docs/a.png"));
        assert_eq!(count.get(), 1);

        store.set_preview_source(None);
        assert_eq!(store.state().popup_preview_source(), None);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_update_listing_is_idempotent() {
        let (mut store, count) = counted(Store::new());
        let listing = Listing {
            source: "default".to_string(),
            path: "/".to_string(),
            items: Vec::new(),
        };
        store.update_listing(Some(listing.clone()));
        store.update_listing(Some(listing));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_show_and_close_top_hover() {
        let (mut store, count) = counted(Store::new());
        store.show_hover("a");
        store.show_hover(Prompt::new("b").on_confirm(|_| {}));
        assert_eq!(names(&store), vec!["a", "b"]);

        store.close_top_hover();
        assert_eq!(names(&store), vec!["a"]);
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn test_close_top_hover_collapses_sidebar_only_when_empty() {
        let mut store = Store::new();
        store.set_show_sidebar(true);
        store.show_hover("a");
        store.show_hover("b");

        store.close_top_hover();
        assert!(store.state().show_sidebar());

        store.close_top_hover();
        assert!(!store.state().show_sidebar());
    }

    #[test]
    fn test_close_top_hover_on_empty_stack_still_notifies() {
        let (mut store, count) = counted(Store::new());
        store.close_top_hover();
        assert!(store.state().prompts().is_empty());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_close_hovers_clears_and_respects_sticky_sidebar() {
        let mut store = Store::new();
        store.set_show_sidebar(true);
        store.set_sticky_sidebar(true);
        store.show_hover("a");
        store.show_hover("b");

        store.close_hovers();
        assert!(store.state().prompts().is_empty());
        assert!(store.state().show_sidebar());
    }

    #[test]
    fn test_close_hovers_on_empty_stack_notifies() {
        let (mut store, count) = counted(Store::new());
        store.close_hovers();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_close_hovers_warns_during_upload() {
        let mut store = Store::new();
        store.set_loading(load_types::UPLOAD, true);
        store.show_hover("share");
        store.show_hover(prompt_names::UPLOAD);

        store.close_hovers();
        assert_eq!(
            names(&store),
            vec!["share", "upload", prompt_names::CLOSE_WITH_ACTIVE_UPLOADS]
        );
    }

    #[test]
    fn test_upload_warning_cancel_pops_only_the_warning() {
        let mut store = Store::new();
        store.context_mut().upload.is_uploading = true;
        store.show_hover(prompt_names::UPLOAD);
        store.close_hovers();

        store.run_prompt_cancel();
        assert_eq!(names(&store), vec!["upload"]);
    }

    #[test]
    fn test_upload_warning_confirm_clears_stack() {
        let (mut store, count) = counted(Store::new());
        store.context_mut().upload.is_uploading = true;
        store.show_hover(prompt_names::UPLOAD);
        store.close_hovers();
        let before = count.get();

        store.run_prompt_confirm();
        assert!(store.state().prompts().is_empty());
        assert_eq!(count.get(), before + 1);
    }

    #[test]
    fn test_run_prompt_without_callbacks_closes_top() {
        let mut store = Store::new();
        store.show_hover("a");
        store.show_hover("b");

        store.run_prompt_confirm();
        assert_eq!(names(&store), vec!["a"]);

        store.run_prompt_cancel();
        assert!(store.state().prompts().is_empty());
    }

    #[test]
    fn test_set_loading_removes_key() {
        let (mut store, count) = counted(Store::new());
        store.set_loading(load_types::LISTING, true);
        assert!(store.state().is_loading(load_types::LISTING));

        store.set_loading(load_types::LISTING, false);
        assert!(!store.state().is_loading(load_types::LISTING));
        assert!(store.state().loading().is_empty());

        store.set_loading(load_types::LISTING, false);
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn test_set_multiple_hint_fires_on_enable_only() {
        let notifier = Rc::new(CountingNotifier(Cell::new(0)));
        let (mut store, count) =
            counted(Store::builder().notifier(notifier.clone()).build());

        store.set_multiple(true);
        store.set_multiple(true);
        store.set_multiple(false);
        store.set_multiple(true);

        assert_eq!(notifier.0.get(), 2);
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn test_remove_selected_first_match_only() {
        let (mut store, count) = counted(Store::new());
        store.add_selected(1);
        store.add_selected(2);
        store.add_selected(1);

        store.remove_selected(1);
        assert_eq!(store.state().selected(), &[2, 1]);

        store.remove_selected(7);
        assert_eq!(store.state().selected(), &[2, 1]);
        assert_eq!(count.get(), 4);
    }

    #[test]
    fn test_reset_selected_notifies_twice_when_multiple() {
        let (mut store, count) = counted(Store::new());
        store.add_selected(0);
        store.set_multiple(true);
        count.set(0);

        store.reset_selected();
        assert!(store.state().selected().is_empty());
        assert!(!store.state().multiple());
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_last_selected_index_is_idempotent() {
        let (mut store, count) = counted(Store::new());
        store.set_last_selected_index(Some(4));
        store.set_last_selected_index(Some(4));
        assert_eq!(store.state().last_selected_index(), Some(4));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_sort_config_creates_user_record_and_persists() {
        let storage = Rc::new(MemoryStorage::new());
        let (mut store, count) = counted(Store::builder().storage(storage.clone()).build());
        at_location(&mut store, "default", "/files/default/docs");

        store.update_listing_sort_config("size", false).unwrap();

        assert!(store.state().context().user.sorting.is_some());
        assert_eq!(
            store.state().effective_sorting(),
            SortingPreference::new("size", false)
        );
        assert_eq!(storage.write_count(), 1);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_sort_config_without_context_still_notifies_once() {
        let storage = Rc::new(MemoryStorage::new());
        let (mut store, count) = counted(Store::builder().storage(storage.clone()).build());

        store.update_listing_sort_config("name", true).unwrap();
        assert_eq!(storage.write_count(), 0);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_failed_write_leaves_state_untouched() {
        let storage = Rc::new(MemoryStorage::new());
        storage.set_fail_writes(true);
        let (mut store, count) = counted(Store::builder().storage(storage.clone()).build());
        at_location(&mut store, "default", "/files/default");

        let result = store.update_display_preferences(PathPreferences::with_sorting("name", true));
        assert!(result.is_err());
        assert!(store.state().display_preferences().is_empty());
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_failed_sort_write_keeps_user_sorting_unset() {
        let storage = Rc::new(MemoryStorage::new());
        storage.set_fail_writes(true);
        let (mut store, count) = counted(Store::builder().storage(storage.clone()).build());
        at_location(&mut store, "default", "/files/default");

        let result = store.update_listing_sort_config("size", false);
        assert!(result.is_err());
        assert_eq!(store.state().context().user.sorting, None);
        assert!(store.state().display_preferences().is_empty());
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_share_preferences_keyed_by_hash() {
        let mut store = Store::new();
        at_location(&mut store, "default", "/share/abc");
        store.context_mut().share.hash = Some("abc".to_string());

        store
            .update_display_preferences(PathPreferences::with_sorting("name", false))
            .unwrap();

        let prefs = store.state().display_preferences();
        assert!(prefs.contains_key("abc"));
        assert!(!prefs.contains_key("default"));
    }

    #[test]
    fn test_hydrate_display_preferences() {
        let storage = Rc::new(MemoryStorage::new());
        storage
            .set_item(
                STORAGE_KEY,
                r#"{"alice":{"default":{"/files/default":{"sorting":{"by":"modified","asc":false}}}}}"#,
            )
            .unwrap();
        let (mut store, count) = counted(Store::builder().storage(storage).build());
        at_location(&mut store, "default", "/files/default");

        store.hydrate_display_preferences().unwrap();
        assert_eq!(
            store.state().effective_sorting(),
            SortingPreference::new("modified", false)
        );
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_prefetch_url_authenticated() {
        let store = Store::new();
        let item = ListingItem {
            name: "a.txt".to_string(),
            path: "/a.txt".to_string(),
            source: "default".to_string(),
            ..ListingItem::default()
        };
        assert_eq!(
            store.prefetch_url(&item),
            "/api/raw?files=default::%2Fa.txt&inline=true"
        );
    }

    #[test]
    fn test_prefetch_url_share() {
        let mut store = Store::new();
        store.context_mut().share.hash = Some("h1".to_string());
        store.context_mut().share.token = Some("t1".to_string());
        let item = ListingItem {
            name: "a.txt".to_string(),
            path: "/a.txt".to_string(),
            ..ListingItem::default()
        };
        assert_eq!(
            store.prefetch_url(&item),
            "/public/api/raw?files=%2Fa.txt&hash=h1&token=t1&inline=true"
        );
    }

    #[test]
    fn test_listener_sees_applied_state() {
        let mut store = Store::new();
        let seen = Rc::new(Cell::new(0));
        let observed = Rc::clone(&seen);
        store.subscribe(move |state| observed.set(state.prompts().len()));

        store.show_hover("a");
        assert_eq!(seen.get(), 1);
        store.show_hover("b");
        assert_eq!(seen.get(), 2);
    }
}
