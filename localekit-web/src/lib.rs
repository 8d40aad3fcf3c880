#![forbid(unsafe_code)]
//! Browser integration for the localekit locale registry.
//!
//! Supplies the two host collaborators the core constructor expects: the
//! page's configured language and a console-backed diagnostic sink.

pub mod diagnostics;
pub mod dom;

pub use diagnostics::ConsoleSink;

use localekit::{LocaleData, Locales, LocalesError};

/// Build a registry wired to the host page.
///
/// Reads the preferred language from the document root's `lang` attribute
/// and routes selection-miss warnings to the browser console.
///
/// # Errors
///
/// Returns [`LocalesError::Empty`] when `entries` holds no records.
///
/// # Panics
///
/// Panics outside of a browser context, where no document is available.
pub fn from_document(entries: Vec<LocaleData>) -> Result<Locales, LocalesError> {
    let lang = dom::document_language();
    Locales::with_sink(entries, lang.as_deref(), Box::new(ConsoleSink))
}
