//! Listing header: sort controls and selection toolbar.

use filebrowser_core::SortingPreference;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, SORT_FIELDS};

stylance::import_crate_style!(css, "src/components/header.module.css");

/// Sorting after clicking `field`: the same field flips direction, a new
/// field starts ascending.
fn next_sorting(current: &SortingPreference, field: &str) -> SortingPreference {
    if current.by == field {
        SortingPreference::new(field, !current.asc)
    } else {
        SortingPreference::new(field, true)
    }
}

#[component]
pub fn ListingHeader() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let sorting = Memo::new(move |_| ctx.read(|s| s.effective_sorting()));
    let multiple = Memo::new(move |_| ctx.read(|s| s.multiple()));
    let selected_count = Memo::new(move |_| ctx.read(|s| s.selected_count()));
    let loading = Memo::new(move |_| ctx.read(|s| s.is_any_loading()));

    let sort_buttons = SORT_FIELDS
        .iter()
        .map(|&(field, label)| {
            let on_click = move |_: leptos::ev::MouseEvent| {
                let next = next_sorting(&sorting.get_untracked(), field);
                ctx.mutate(|store| {
                    if let Err(err) = store.update_listing_sort_config(&next.by, next.asc) {
                        tracing::error!(error = %err, field, "failed to save sorting");
                    }
                });
            };
            let is_active = move || sorting.with(|s| s.by == field);
            let class = move || {
                if is_active() {
                    format!("{} {}", css::sortButton, css::sortActive)
                } else {
                    css::sortButton.to_string()
                }
            };

            view! {
                <button class=class on:click=on_click title=format!("Sort by {}", label)>
                    {label}
                    <Show when=is_active>
                        {move || {
                            let icon = if sorting.with(|s| s.asc) { ic::SORT_ASC } else { ic::SORT_DESC };
                            view! { <Icon icon=icon /> }
                        }}
                    </Show>
                </button>
            }
        })
        .collect_view();

    let toggle_multiple = move |_: leptos::ev::MouseEvent| {
        let enable = !multiple.get_untracked();
        ctx.mutate(|store| store.set_multiple(enable));
    };
    let clear_selection = move |_: leptos::ev::MouseEvent| {
        ctx.mutate(|store| store.reset_selected());
    };
    let toggle_sidebar = move |_: leptos::ev::MouseEvent| {
        ctx.mutate(|store| {
            let show = !store.state().show_sidebar();
            store.set_show_sidebar(show);
        });
    };

    let multiple_class = move || {
        if multiple.get() {
            format!("{} {}", css::iconButton, css::iconButtonActive)
        } else {
            css::iconButton.to_string()
        }
    };

    view! {
        <header class=css::header>
            <button class=css::iconButton on:click=toggle_sidebar title="Toggle sidebar">
                <Icon icon=ic::SIDEBAR />
            </button>
            <span class=css::appName>{APP_NAME}</span>
            <Show when=move || loading.get()>
                <span class=css::loading>"Loading..."</span>
            </Show>

            <div class=css::sortGroup>{sort_buttons}</div>

            <div class=css::selection>
                <Show when=move || { selected_count.get() > 0 }>
                    <span class=css::count>{move || format!("{} selected", selected_count.get())}</span>
                    <button class=css::iconButton on:click=clear_selection title="Clear selection">
                        <Icon icon=ic::CLOSE />
                    </button>
                </Show>
                <button class=multiple_class on:click=toggle_multiple title="Multiple selection">
                    <Icon icon=ic::MULTI_SELECT />
                </button>
            </div>
        </header>
    }
}
