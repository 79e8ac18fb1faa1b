//! Per-call configuration.
//!
//! Every field has a documented default; an `Options::default()` call gives
//! the canonical behavior (`-` separator, lowercased output, symbol
//! replacement on, no locale, no overrides). Options are transient: they
//! configure one `slugify` invocation and carry no state between calls.

use std::collections::HashMap;

pub const DEFAULT_SEPARATOR: &str = "-";

#[derive(Debug, Clone)]
pub struct Options {
    /// Token boundary string placed between words. Default `"-"`.
    pub separator: String,
    /// Case-fold the final result. Default `true`.
    pub lowercase: bool,
    /// Run the symbol substitution stage. Default `true`.
    pub symbols: bool,
    /// Locale keys whose replacement tables apply before generic diacritic
    /// stripping. Empty means none. Unknown keys are skipped.
    pub locale: Vec<String>,
    /// Ad-hoc symbol overrides merged on top of the built-in table.
    /// Override entries win on key collision.
    pub custom_replacements: HashMap<char, String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            lowercase: true,
            symbols: true,
            locale: Vec::new(),
            custom_replacements: HashMap::new(),
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn symbols(mut self, symbols: bool) -> Self {
        self.symbols = symbols;
        self
    }

    /// Add a single locale key.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale.push(locale.into());
        self
    }

    /// Add several locale keys at once.
    pub fn locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locale.extend(locales.into_iter().map(Into::into));
        self
    }

    /// Override (or add) one symbol replacement.
    pub fn replacement(mut self, from: char, to: impl Into<String>) -> Self {
        self.custom_replacements.insert(from, to.into());
        self
    }
}
