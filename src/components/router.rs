//! Application router component.
//!
//! Handles path-based routing with the History API.
//! Uses native popstate events instead of leptos_router.
//!
//! # Architecture
//!
//! - **Location is the source of truth**: the route is derived from the pathname
//! - **Store context follows the route**: path, source and share hash are
//!   written into the session context on every navigation
//! - **Escape closes dialogs** through `close_hovers`, so the upload guard applies

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::file_list::FileList;
use crate::components::header::ListingHeader;
use crate::components::preview::PreviewPopup;
use crate::components::prompts::PromptLayer;
use crate::components::sidebar::Sidebar;
use crate::components::toast::Toast;
use crate::config::BASE_URL;
use crate::models::Route;
use crate::utils::dom;

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// - `/files/<source>/<path>` → browse a source
/// - `/public/share/<hash>/<path>` → browse a shared link
#[component]
pub fn AppRouter(route: Route) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let route = RwSignal::new(route);

    // Back/forward buttons (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            let current = Route::current(BASE_URL);
            ctx.navigate(&current);
            route.set(current);
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Escape closes every dialog
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move |ev: web_sys::KeyboardEvent| {
            let has_prompts = ctx
                .store
                .with_value(|store| !store.state().prompts().is_empty());
            if ev.key() == "Escape" && has_prompts {
                ctx.mutate(|store| store.close_hovers());
            }
        }) as Box<dyn Fn(web_sys::KeyboardEvent)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        }

        closure.forget();
    }

    // Clicking into a directory
    let on_navigate = Callback::new(move |next: Route| {
        dom::push_path(&next.to_pathname(BASE_URL));
        ctx.navigate(&next);
        route.set(next);
    });

    view! {
        <div style="display: flex; height: 100vh;">
            <Sidebar route=route.read_only() />
            <main style="flex: 1; display: flex; flex-direction: column; min-width: 0;">
                <ListingHeader />
                <FileList route=route.read_only() on_navigate=on_navigate />
            </main>
        </div>
        <PreviewPopup />
        <PromptLayer />
        <Toast />
    }
}
