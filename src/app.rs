//! Root application module.
//!
//! Contains the main App component, the AppContext definition and the
//! bootstrap that wires the state core to the browser.

use std::rc::Rc;

use filebrowser_core::{ApiDownloadUrls, AppState, Listing, SessionContext, Store, User};
use leptos::prelude::*;

use crate::components::{AppRouter, ToastNotifier};
use crate::config::{BASE_URL, DEFAULT_USERNAME, LISTING_ELEMENT_ID};
use crate::models::Route;
use crate::utils::{BrowserStorage, dom, locale};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// - **store**: the state core, the only writer of UI state
/// - **revision**: bumped by the store's change listener; views track it to
///   re-render after a mutation
/// - **toast**: hint currently shown by the notifier
///
/// # Note
///
/// This struct is `Copy` because all fields are arena handles. The store is
/// kept in local (non-`Send`) storage since prompts hold `Rc` callbacks.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: StoredValue<Store, LocalStorage>,
    pub revision: RwSignal<u64>,
    pub toast: RwSignal<Option<String>>,
}

impl AppContext {
    /// Create the store for `route`, subscribe the revision signal and load
    /// the user's saved display preferences.
    pub fn new(route: &Route) -> Self {
        let revision = RwSignal::new(0u64);
        let toast = RwSignal::new(None);

        let mut store = Store::builder()
            .storage(Rc::new(BrowserStorage))
            .notifier(Rc::new(ToastNotifier::new(toast)))
            .download_urls(Rc::new(ApiDownloadUrls::new(BASE_URL)))
            .context(SessionContext {
                user: User {
                    username: DEFAULT_USERNAME.to_string(),
                    sorting: None,
                },
                ..SessionContext::default()
            })
            .build();
        apply_route(store.context_mut(), route);

        store.subscribe(move |_| revision.update(|r| *r += 1));

        if let Err(err) = store.hydrate_display_preferences() {
            tracing::warn!(error = %err, "display preferences not loaded");
        }
        if let Some(listing) = embedded_listing() {
            store.update_listing(Some(listing));
        }

        Self {
            store: StoredValue::new_local(store),
            revision,
            toast,
        }
    }

    /// Read the state, re-running the caller on the next mutation.
    pub fn read<U>(&self, f: impl FnOnce(&AppState) -> U) -> U {
        self.revision.track();
        self.store.with_value(|store| f(store.state()))
    }

    /// Run mutations against the store.
    pub fn mutate(&self, f: impl FnOnce(&mut Store)) {
        self.store.update_value(f);
    }

    /// Move the store to a new route.
    ///
    /// Context fields are owned by the router and do not notify, so the
    /// revision is bumped here as well.
    pub fn navigate(&self, route: &Route) {
        self.store.update_value(|store| enter_route(store, route));
        self.revision.update(|r| *r += 1);
    }
}

/// Point the session context at `route` and drop what belonged to the
/// previous location: its listing and the selection made in it.
fn enter_route(store: &mut Store, route: &Route) {
    apply_route(store.context_mut(), route);
    store.update_listing(None);
    store.reset_selected();
}

fn apply_route(context: &mut SessionContext, route: &Route) {
    context.route.path = route.route_path();
    context.sources.current = route.source().map(str::to_string);
    context.share.hash = route.share_hash().map(str::to_string);
}

/// Listing embedded by the server page, if any.
fn embedded_listing() -> Option<Listing> {
    let raw = dom::element_text(LISTING_ELEMENT_ID)?;
    serde_json::from_str(&raw)
        .inspect_err(|err| tracing::warn!(error = %err, "embedded listing is not valid"))
        .ok()
}

/// Root application component with error boundary.
///
/// This component:
/// - Negotiates the UI locale
/// - Creates and provides the AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    let lang = locale::detect_locale(dom::navigator_language().as_deref());
    dom::set_document_lang(locale::to_standard_locale(lang));

    let route = Route::current(BASE_URL);
    let ctx = AppContext::new(&route);
    provide_context(ctx);
    tracing::info!(locale = lang, path = %route.route_path(), "app started");

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #f5f6f8;
                    color: #20242a;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="
                        max-width: 600px;
                        text-align: center;
                    ">
                        <h1 style="color: #c0392b; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #5c6470; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <ul style="
                            text-align: left;
                            margin: 0 0 1rem 0;
                            padding-left: 1.5rem;
                            color: #c0392b;
                            font-size: 0.9rem;
                        ">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #2f6fde;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter route=route />
        </ErrorBoundary>
    }
}
