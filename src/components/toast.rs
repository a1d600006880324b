//! One-time hints.
//!
//! [`ToastNotifier`] is the store's notifier in the browser: it puts the hint
//! into a signal and clears it after `HINT_TIMEOUT_MS`.

use filebrowser_core::Notifier;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::{HINT_TIMEOUT_MS, MULTIPLE_SELECTION_HINT};

stylance::import_crate_style!(css, "src/components/toast.module.css");

/// Shows store hints as a toast.
pub struct ToastNotifier {
    message: RwSignal<Option<String>>,
}

impl ToastNotifier {
    pub fn new(message: RwSignal<Option<String>>) -> Self {
        Self { message }
    }

    fn show(&self, text: &str) {
        let message = self.message;
        message.set(Some(text.to_string()));

        let shown = text.to_string();
        Timeout::new(HINT_TIMEOUT_MS, move || {
            // A newer hint may have replaced this one.
            if message.get_untracked().as_deref() == Some(shown.as_str()) {
                message.set(None);
            }
        })
        .forget();
    }
}

impl Notifier for ToastNotifier {
    fn show_multiple_selection(&self) {
        self.show(MULTIPLE_SELECTION_HINT);
    }
}

#[component]
pub fn Toast() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let toast = ctx.toast;

    view! {
        <Show when=move || toast.with(Option::is_some)>
            <div class=css::toast role="status" on:click=move |_| toast.set(None)>
                {move || toast.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
