use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Source record for one locale entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleData {
    pub name: String,
    pub code: String,
    pub dir: String,
    pub flag: String,
}

/// A single locale with display metadata and flag artwork
///
/// Immutable once built; the registry creates one per source record and
/// keeps them for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    data: LocaleData,
}

fn width_attr() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"\swidth="[^"]*""#).expect("width pattern should compile"))
}

fn height_attr() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"\sheight="[^"]*""#).expect("height pattern should compile"))
}

impl Locale {
    #[must_use]
    pub fn new(data: LocaleData) -> Self {
        Self { data }
    }

    /// Returns the human-readable name of the locale
    #[must_use]
    pub fn name(&self) -> &str {
        &self.data.name
    }

    /// Returns the locale code
    #[must_use]
    pub fn code(&self) -> &str {
        &self.data.code
    }

    /// Returns the text direction tag
    #[must_use]
    pub fn dir(&self) -> &str {
        &self.data.dir
    }

    /// Returns the SVG flag with custom width and height.
    ///
    /// Replaces the first existing `width`/`height` attribute in the markup
    /// with the provided values; markup without such attributes comes back
    /// unchanged. The stored markup itself is never mutated.
    #[must_use]
    pub fn svg_flag(&self, width: f64, height: f64) -> String {
        let flag = width_attr().replace(&self.data.flag, format!(" width=\"{width}\""));
        let flag = height_attr().replace(flag.as_ref(), format!(" height=\"{height}\""));
        flag.into_owned()
    }
}
