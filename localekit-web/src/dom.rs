use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Language the host page declares on its root element, if any.
///
/// An absent root element or an empty `lang` attribute both map to `None`.
///
/// # Panics
/// Panics when no browser document is available.
#[must_use]
pub fn document_language() -> Option<String> {
    document()
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.lang())
        .filter(|lang| !lang.is_empty())
}
