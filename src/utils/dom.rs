//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current location pathname (e.g. `/files/default`).
pub fn get_pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// Navigate to a pathname (adds to browser history).
pub fn push_path(path: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
    }
}

/// Replace the pathname without adding to browser history.
///
/// Useful for redirects that shouldn't appear in back button history.
pub fn replace_path(path: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
    }
}

// =============================================================================
// Document
// =============================================================================

/// Browser language (`navigator.language`).
pub fn navigator_language() -> Option<String> {
    window()?.navigator().language()
}

/// Set the `lang` attribute of the root element.
pub fn set_document_lang(lang: &str) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("lang", lang);
    }
}

/// Text content of the element with `id`, e.g. an embedded JSON script.
pub fn element_text(id: &str) -> Option<String> {
    window()?
        .document()?
        .get_element_by_id(id)?
        .text_content()
        .filter(|text| !text.trim().is_empty())
}

/// Ask the browser to prefetch a URL with `<link rel="prefetch">`.
///
/// Returns `true` if the link was added.
pub fn prefetch(url: &str) -> bool {
    let Some(document) = window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(head) = document.head() else {
        return false;
    };

    let selector = format!("link[rel=\"prefetch\"][href=\"{}\"]", url);
    if document.query_selector(&selector).ok().flatten().is_some() {
        return true;
    }

    let Ok(link) = document.create_element("link") else {
        return false;
    };
    link.set_attribute("rel", "prefetch").is_ok()
        && link.set_attribute("href", url).is_ok()
        && head.append_child(&link).is_ok()
}
