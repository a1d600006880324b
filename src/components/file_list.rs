//! File list component.
//!
//! Renders the current listing in the effective sort order. Selection is kept
//! as listing indices in the store, so rows carry their original index.

use filebrowser_core::{ListingItem, SortingPreference};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::Route;
use crate::utils::dom;
use crate::utils::format::{format_modified, format_size};

stylance::import_crate_style!(css, "src/components/file_list.module.css");

/// Items paired with their listing index, directories first, then by the
/// sort field.
fn sort_items(items: &[ListingItem], sorting: &SortingPreference) -> Vec<(usize, ListingItem)> {
    let mut rows: Vec<(usize, ListingItem)> = items.iter().cloned().enumerate().collect();
    rows.sort_by(|(_, a), (_, b)| {
        b.is_dir().cmp(&a.is_dir()).then_with(|| {
            let ord = match sorting.by.as_str() {
                "size" => a.size.cmp(&b.size),
                "modified" => a.modified.cmp(&b.modified),
                _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            };
            if sorting.asc { ord } else { ord.reverse() }
        })
    });
    rows
}

/// Listing indices shown between `from` and `to` (inclusive) in display
/// order. Falls back to `to` alone when `from` is no longer visible.
fn range_between(order: &[usize], from: usize, to: usize) -> Vec<usize> {
    let (Some(a), Some(b)) = (
        order.iter().position(|&i| i == from),
        order.iter().position(|&i| i == to),
    ) else {
        return vec![to];
    };
    order[a.min(b)..=a.max(b)].to_vec()
}

#[component]
pub fn FileList(route: ReadSignal<Route>, on_navigate: Callback<Route>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let rows = Memo::new(move |_| {
        ctx.read(|s| {
            let sorting = s.effective_sorting();
            s.listing().map(|listing| sort_items(&listing.items, &sorting))
        })
    });
    let order = Memo::new(move |_| {
        rows.with(|rows| {
            rows.as_ref()
                .map(|rows| rows.iter().map(|(i, _)| *i).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    });
    let is_empty = move || order.with(|o| o.is_empty());
    let has_listing = move || rows.with(|r| r.is_some());

    view! {
        <div class=css::list role="grid" aria-label="File list">
            <div class=css::listHeader role="row">
                <span class=css::headerIcon></span>
                <span>"Name"</span>
                <span class=css::headerDate>"Modified"</span>
                <span class=css::headerSize>"Size"</span>
            </div>
            <Show when=is_empty>
                <p class=css::empty>
                    {move || if has_listing() { "This folder is empty" } else { "Nothing to show" }}
                </p>
            </Show>
            <For
                each=move || rows.get().unwrap_or_default()
                key=|(index, item)| (*index, item.path.clone())
                children=move |(index, item)| {
                    view! {
                        <FileListItem
                            index=index
                            item=item
                            order=order
                            route=route
                            on_navigate=on_navigate
                        />
                    }
                }
            />
        </div>
    }
}

#[component]
fn FileListItem(
    index: usize,
    item: ListingItem,
    order: Memo<Vec<usize>>,
    route: ReadSignal<Route>,
    on_navigate: Callback<Route>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_dir = item.is_dir();
    let icon = if is_dir { ic::FOLDER } else { ic::FILE };
    let size = if is_dir { String::new() } else { format_size(item.size) };
    let modified = item.modified.as_deref().map(format_modified).unwrap_or_default();
    let display_name = if is_dir {
        format!("{}/", item.name)
    } else {
        item.name.clone()
    };

    let is_selected = Memo::new(move |_| ctx.read(|s| s.is_selected(index)));

    // Click: replace, toggle (multi-select or ctrl/cmd) or extend with shift
    let handle_click = move |ev: leptos::ev::MouseEvent| {
        let (multiple, last) = ctx.store.with_value(|store| {
            let state = store.state();
            (state.multiple(), state.last_selected_index())
        });
        let range = match last {
            Some(last) if ev.shift_key() => Some(range_between(&order.get_untracked(), last, index)),
            _ => None,
        };
        let toggle = multiple || ev.ctrl_key() || ev.meta_key();

        ctx.mutate(|store| {
            if let Some(range) = range {
                for i in range {
                    if !store.state().is_selected(i) {
                        store.add_selected(i);
                    }
                }
            } else if toggle {
                if store.state().is_selected(index) {
                    store.remove_selected(index);
                } else {
                    store.add_selected(index);
                }
            } else {
                store.reset_selected();
                store.add_selected(index);
            }
            store.set_last_selected_index(Some(index));
        });
    };

    // Double click: enter a directory or preview a file
    let item_for_open = item.clone();
    let handle_dblclick = move |_: leptos::ev::MouseEvent| {
        if is_dir {
            let next = route
                .get_untracked()
                .enter(&item_for_open.source, &item_for_open.path);
            on_navigate.run(next);
        } else {
            ctx.mutate(|store| {
                let url = store.prefetch_url(&item_for_open);
                store.set_preview_source(Some(url));
            });
        }
    };

    let item_for_hover = item.clone();
    let handle_hover = move |_: leptos::ev::MouseEvent| {
        if is_dir {
            return;
        }
        let url = ctx.store.with_value(|store| store.prefetch_url(&item_for_hover));
        if !dom::prefetch(&url) {
            tracing::debug!(url = %url, "prefetch link not added");
        }
    };

    let item_class = move || {
        if is_selected.get() {
            format!("{} {}", css::listItem, css::selected)
        } else {
            css::listItem.to_string()
        }
    };
    let name_class = if is_dir {
        format!("{} {}", css::name, css::nameDir)
    } else {
        css::name.to_string()
    };
    let aria_label = if is_dir {
        format!("Folder: {}", item.name)
    } else {
        format!("File: {}", item.name)
    };

    view! {
        <div
            class=item_class
            on:click=handle_click
            on:dblclick=handle_dblclick
            on:mouseenter=handle_hover
            role="row"
            tabindex="0"
            aria-label=aria_label
            aria-selected=move || is_selected.get().to_string()
        >
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
            <span class=name_class>{display_name}</span>
            <span class=css::itemDate>{modified}</span>
            <span class=css::size>{size}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, kind: &str, size: u64, modified: &str) -> ListingItem {
        ListingItem {
            name: name.to_string(),
            path: format!("/{}", name),
            source: "default".to_string(),
            size,
            modified: Some(modified.to_string()),
            kind: kind.to_string(),
        }
    }

    fn names(rows: &[(usize, ListingItem)]) -> Vec<&str> {
        rows.iter().map(|(_, item)| item.name.as_str()).collect()
    }

    #[test]
    fn test_sort_items_directories_first() {
        let items = vec![
            item("b.txt", "text", 10, "2024-01-02"),
            item("Docs", "directory", 0, "2024-01-01"),
            item("a.txt", "text", 30, "2024-01-03"),
        ];

        let rows = sort_items(&items, &SortingPreference::new("name", true));
        assert_eq!(names(&rows), vec!["Docs", "a.txt", "b.txt"]);
        assert_eq!(rows[0].0, 1);

        let rows = sort_items(&items, &SortingPreference::new("size", false));
        assert_eq!(names(&rows), vec!["Docs", "a.txt", "b.txt"]);

        let rows = sort_items(&items, &SortingPreference::new("modified", true));
        assert_eq!(names(&rows), vec!["Docs", "b.txt", "a.txt"]);
    }

    #[test]
    fn test_range_between_follows_display_order() {
        let order = [2, 0, 3, 1];
        assert_eq!(range_between(&order, 0, 1), vec![0, 3, 1]);
        assert_eq!(range_between(&order, 1, 2), vec![2, 0, 3, 1]);
        assert_eq!(range_between(&order, 9, 3), vec![3]);
    }
}
