//! Preview popup for the file opened from the listing.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/preview.module.css");

#[component]
pub fn PreviewPopup() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let source = Memo::new(move |_| ctx.read(|s| s.popup_preview_source().map(str::to_string)));
    let close = move |_: leptos::ev::MouseEvent| ctx.mutate(|store| store.set_preview_source(None));

    view! {
        <Show when=move || source.with(Option::is_some)>
            <div class=css::overlay role="dialog" aria-label="Preview">
                <div class=css::toolbar>
                    <a class=css::download href=move || source.get().unwrap_or_default() target="_blank">
                        "Open in new tab"
                    </a>
                    <button class=css::closeButton on:click=close title="Close preview">
                        <Icon icon=ic::CLOSE />
                    </button>
                </div>
                <iframe class=css::frame src=move || source.get().unwrap_or_default() />
            </div>
        </Show>
    }
}
