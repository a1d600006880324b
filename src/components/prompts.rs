//! Modal dialog stack.
//!
//! Renders every prompt on the store's stack in order; only the topmost one
//! is interactive. Its buttons run the prompt's own confirm/cancel callbacks
//! (or simply close it when it has none).

use filebrowser_core::config::prompt_names;
use leptos::prelude::*;
use serde_json::Value;

use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/prompts.module.css");

/// Title and body text for a prompt.
fn prompt_text(name: &str, props: Option<&Value>) -> (String, String) {
    let prop = |key: &str| {
        props
            .and_then(|p| p.get(key))
            .and_then(Value::as_str)
            .map(str::to_string)
    };

    match name {
        prompt_names::CLOSE_WITH_ACTIVE_UPLOADS => (
            "Uploads in progress".to_string(),
            "Closing now will leave the remaining uploads unfinished. Close anyway?".to_string(),
        ),
        prompt_names::UPLOAD => (
            "Upload".to_string(),
            prop("message").unwrap_or_else(|| "Uploading files...".to_string()),
        ),
        _ => (
            prop("title").unwrap_or_else(|| name.to_string()),
            prop("message").unwrap_or_default(),
        ),
    }
}

#[component]
pub fn PromptLayer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let prompts = Memo::new(move |_| {
        ctx.read(|state| {
            state
                .prompts()
                .iter()
                .map(|p| (p.name.clone(), p.props.clone()))
                .collect::<Vec<_>>()
        })
    });

    let on_confirm = move |_: leptos::ev::MouseEvent| ctx.mutate(|store| store.run_prompt_confirm());
    let on_cancel = move |_: leptos::ev::MouseEvent| ctx.mutate(|store| store.run_prompt_cancel());

    view! {
        <Show when=move || prompts.with(|p| !p.is_empty())>
            <div class=css::backdrop>
                {move || {
                    let stack = prompts.get();
                    let top = stack.len().saturating_sub(1);
                    stack
                        .into_iter()
                        .enumerate()
                        .map(|(index, (name, props))| {
                            let (title, message) = prompt_text(&name, props.as_ref());
                            let is_top = index == top;
                            let class = if is_top {
                                css::card.to_string()
                            } else {
                                format!("{} {}", css::card, css::cardInactive)
                            };
                            view! {
                                <div class=class role="dialog" aria-modal=is_top.to_string()>
                                    <h2 class=css::title>{title}</h2>
                                    <p class=css::message>{message}</p>
                                    <Show when=move || is_top>
                                        <div class=css::actions>
                                            <button class=css::button on:click=on_cancel>
                                                "Cancel"
                                            </button>
                                            <button class=css::buttonPrimary on:click=on_confirm>
                                                "OK"
                                            </button>
                                        </div>
                                    </Show>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}
