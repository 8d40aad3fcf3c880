use thiserror::Error;

use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::locale::{Locale, LocaleData};

/// Errors raised while building a registry
#[derive(Debug, Error)]
pub enum LocalesError {
    /// Construction was given no locale entries.
    #[error("no locale entries provided; a registry needs at least one")]
    Empty,
    /// The JSON locale pack could not be parsed.
    #[error("invalid locale pack: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Registry over a fixed, ordered set of locales with one active selection
///
/// The active locale starts at the entry matching the preferred code handed
/// to the constructor and falls back to the first entry when nothing
/// matches. Code comparisons are case-sensitive exact matches throughout.
pub struct Locales {
    locales: Vec<Locale>,
    current: usize,
    sink: Box<dyn DiagnosticSink>,
}

impl Locales {
    /// Build a registry with the default log-facade diagnostic sink.
    ///
    /// # Errors
    ///
    /// Returns [`LocalesError::Empty`] when `entries` holds no records.
    pub fn new(entries: Vec<LocaleData>, preferred: Option<&str>) -> Result<Self, LocalesError> {
        Self::with_sink(entries, preferred, Box::new(LogSink))
    }

    /// Build a registry with an injected diagnostic sink.
    ///
    /// # Errors
    ///
    /// Returns [`LocalesError::Empty`] when `entries` holds no records.
    pub fn with_sink(
        entries: Vec<LocaleData>,
        preferred: Option<&str>,
        sink: Box<dyn DiagnosticSink>,
    ) -> Result<Self, LocalesError> {
        if entries.is_empty() {
            return Err(LocalesError::Empty);
        }

        let locales: Vec<Locale> = entries.into_iter().map(Locale::new).collect();
        let current = preferred
            .and_then(|code| locales.iter().position(|locale| locale.code() == code))
            .unwrap_or(0);

        Ok(Self {
            locales,
            current,
            sink,
        })
    }

    /// Load a registry from a JSON array of locale records
    ///
    /// # Errors
    ///
    /// Returns [`LocalesError::Parse`] when the JSON cannot be parsed into
    /// locale records, or [`LocalesError::Empty`] when the array is empty.
    pub fn from_json(json: &str, preferred: Option<&str>) -> Result<Self, LocalesError> {
        let entries: Vec<LocaleData> = serde_json::from_str(json)?;
        Self::new(entries, preferred)
    }

    /// Returns all available locales, in construction order
    #[must_use]
    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    /// Returns the current active locale
    #[must_use]
    pub fn current(&self) -> &Locale {
        &self.locales[self.current]
    }

    /// Sets the active locale to the one matching the provided code.
    ///
    /// An unknown code keeps the current selection and reports a warning
    /// through the diagnostic sink; the call itself still succeeds and
    /// returns the registry for chaining.
    pub fn set_locale(&mut self, code: &str) -> &mut Self {
        match self
            .locales
            .iter()
            .position(|locale| locale.code() == code)
        {
            Some(index) => self.current = index,
            None => self
                .sink
                .warn(&format!("Locale \"{code}\" not found. Keeping current locale.")),
        }

        self
    }

    /// Checks whether a locale with the given code exists
    #[must_use]
    pub fn has(&self, code: &str) -> bool {
        self.locales.iter().any(|locale| locale.code() == code)
    }

    /// Returns the first locale matching the given code, if any
    #[must_use]
    pub fn get_by_code(&self, code: &str) -> Option<&Locale> {
        self.locales.iter().find(|locale| locale.code() == code)
    }
}
