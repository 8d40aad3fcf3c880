//! Localekit Core
//!
//! Platform-agnostic locale registry for client-side applications.
//! This crate holds the locale descriptors, the active-locale selection,
//! and the flag-rendering logic without any browser-specific dependencies.

pub mod diagnostics;
pub mod locale;
pub mod registry;

// Re-export commonly used types
pub use diagnostics::{DiagnosticSink, LogSink};
pub use locale::{Locale, LocaleData};
pub use registry::{Locales, LocalesError};
