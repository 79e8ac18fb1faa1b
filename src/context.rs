// src/context.rs
// Per-call state handed to every stage. Borrowed views of the caller's
// Options plus the engine-owned locale cache; nothing here mutates during
// a run except cache population behind its own lock.

use std::collections::HashMap;

use crate::{locale::cache::LocaleCache, options::Options};

pub struct Context<'a> {
    pub separator: &'a str,
    pub lowercase: bool,
    pub symbols: bool,
    pub locale: &'a [String],
    pub custom_replacements: Option<&'a HashMap<char, String>>,
    pub(crate) cache: &'a LocaleCache,
}

impl<'a> Context<'a> {
    pub(crate) fn new(options: &'a Options, cache: &'a LocaleCache) -> Self {
        Self {
            separator: &options.separator,
            lowercase: options.lowercase,
            symbols: options.symbols,
            locale: &options.locale,
            custom_replacements: (!options.custom_replacements.is_empty())
                .then_some(&options.custom_replacements),
            cache,
        }
    }
}
