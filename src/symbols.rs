//! Built-in symbol table.
//!
//! Three policy classes are baked into the table:
//! * semantic symbols become a word padded with one space on each side, so
//!   downstream collapsing turns them into standalone tokens (`&` becomes
//!   " and ", yielding `foo-and-bar`)
//! * separator symbols become a single space and merge into word-boundary
//!   treatment
//! * noise symbols are deleted outright
//!
//! The matcher over the built-in key set is compiled once. Calls that
//! supply overrides rebuild the merged map and its matcher per call; the
//! override key set is ad hoc, so there is nothing stable to cache.

use once_cell::sync::Lazy;
use phf::{Map, phf_map};
use regex::Regex;
use std::collections::HashMap;

use crate::matcher;

/// Built-in symbol replacements, exported read-only.
pub static SYMBOL_TABLE: Map<char, &'static str> = phf_map! {
    // Logical / textual (semantic)
    '&' => " and ",
    '|' => " or ",
    '@' => " at ",
    '%' => " percent ",
    '+' => " plus ",
    '=' => " equals ",

    // Currency (semantic)
    '$' => " dollar ",
    '€' => " euro ",
    '£' => " pound ",
    '₺' => " lira ",
    '¥' => " yen ",
    '₹' => " rupee ",

    // Separators
    '.' => " ",
    '/' => " ",
    '\\' => " ",
    '_' => " ",

    // Noise (strip)
    '<' => "",
    '>' => "",
    '~' => "",
    '^' => "",
    '?' => "",
    '!' => "",
    ',' => "",
    ':' => "",
    ';' => "",
    '\'' => "",
    '"' => "",
    '`' => "",
    '*' => "",
    '#' => "",
    '(' => "",
    ')' => "",
    '[' => "",
    ']' => "",
    '{' => "",
    '}' => "",
};

static SYMBOL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    matcher::compile_class(SYMBOL_TABLE.keys().copied())
        .expect("built-in symbol table must compile to a pattern - this is a bug")
});

/// Matcher over the built-in key set, compiled on first use.
pub(crate) fn base_pattern() -> &'static Regex {
    &SYMBOL_PATTERN
}

/// Effective map for a call that supplies overrides: the built-in table
/// with the caller's entries merged on top. Overrides win on collision.
pub(crate) fn merged_with(overrides: &HashMap<char, String>) -> HashMap<char, &str> {
    let mut map: HashMap<char, &str> = SYMBOL_TABLE.entries().map(|(&c, &r)| (c, r)).collect();
    for (&c, r) in overrides {
        map.insert(c, r.as_str());
    }
    map
}
