//! Sidebar with the current location and its visibility controls.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::Route;

stylance::import_crate_style!(css, "src/components/sidebar.module.css");

/// Label of the location shown at the top of the sidebar.
fn location_label(route: &Route) -> String {
    match route {
        Route::Share { hash, .. } => format!("Shared link {}", hash),
        Route::Files { .. } => route.source().unwrap_or("No source").to_string(),
    }
}

#[component]
pub fn Sidebar(route: ReadSignal<Route>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let visible = Memo::new(move |_| ctx.read(|s| s.show_sidebar()));
    let sticky = Memo::new(move |_| ctx.read(|s| s.sticky_sidebar()));

    let toggle_sticky = move |_: leptos::ev::MouseEvent| {
        let value = !sticky.get_untracked();
        ctx.mutate(|store| store.set_sticky_sidebar(value));
    };
    let hide = move |_: leptos::ev::MouseEvent| ctx.mutate(|store| store.set_show_sidebar(false));

    let pin_class = move || {
        if sticky.get() {
            format!("{} {}", css::iconButton, css::pinned)
        } else {
            css::iconButton.to_string()
        }
    };

    view! {
        <Show when=move || visible.get()>
            <aside class=css::sidebar aria-label="Sidebar">
                <div class=css::controls>
                    <button class=pin_class on:click=toggle_sticky title="Keep sidebar open">
                        <Icon icon=ic::PIN />
                    </button>
                    <button class=css::iconButton on:click=hide title="Hide sidebar">
                        <Icon icon=ic::CLOSE />
                    </button>
                </div>
                <div class=css::location>
                    <Icon icon=ic::FOLDER />
                    <span>{move || route.with(location_label)}</span>
                </div>
                <div class=css::path>{move || route.with(Route::route_path)}</div>
            </aside>
        </Show>
    }
}
