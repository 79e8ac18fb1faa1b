//! Dynamic character-class construction.
//!
//! Every matcher in this crate that is built from data-defined key sets
//! (symbol keys, locale keys) goes through [`compile_class`], which escapes
//! each character before it enters the pattern. A separator, bracket, or
//! quantifier character used as a replacement key must match itself, never
//! act as pattern syntax.

use regex::Regex;

/// Build a single-character class over `keys`.
///
/// Each key is escaped with [`regex::escape`]. `keys` must be non-empty;
/// an empty replacement map is represented upstream by the absence of a
/// matcher, not by an empty class.
pub(crate) fn compile_class<I>(keys: I) -> Result<Regex, regex::Error>
where
    I: IntoIterator<Item = char>,
{
    let mut class = String::from("[");
    let mut buf = [0u8; 4];
    for c in keys {
        class.push_str(&regex::escape(c.encode_utf8(&mut buf)));
    }
    class.push(']');
    Regex::new(&class)
}
