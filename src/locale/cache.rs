//! Merged locale maps and their compiled matchers.
//!
//! A call may name one locale or several; the merged replacement map for a
//! given *set* of keys is built once and reused. The cache key is the
//! sorted, deduplicated, `+`-joined key set, so `["de", "tr"]` and
//! `["tr", "de"]` share an entry. Entries live as long as the owning
//! engine; growth is bounded by the finite alphabet of supported locale
//! combinations ever requested.

use log::{debug, warn};
use regex::Regex;
use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use crate::{locale::data::LOCALE_TABLE, matcher};

/// Merged replacement map for one locale-key set, plus its matcher.
///
/// `pattern` is `None` when the merged map came out empty (unknown keys
/// only, or just `"en"`): the sentinel that never matches anything.
pub(crate) struct LocaleEntry {
    pub map: HashMap<char, &'static str>,
    pub pattern: Option<Regex>,
}

#[derive(Default)]
pub(crate) struct LocaleCache {
    entries: RwLock<HashMap<String, Arc<LocaleEntry>>>,
}

impl LocaleCache {
    /// Look up or build the merged entry for `keys`.
    ///
    /// Returns `Ok(None)` when `keys` is empty: no locale requested, no
    /// cache interaction.
    pub fn resolve(&self, keys: &[String]) -> Result<Option<Arc<LocaleEntry>>, regex::Error> {
        if keys.is_empty() {
            return Ok(None);
        }
        let canonical = canonical_key(keys);

        if let Some(entry) = self
            .entries
            .read()
            .expect("locale cache lock poisoned")
            .get(&canonical)
        {
            return Ok(Some(Arc::clone(entry)));
        }

        // Miss: build outside the lock. A racing builder produces a
        // structurally equal entry, so last writer wins harmlessly.
        let built = Arc::new(build_entry(&canonical)?);
        let mut entries = self.entries.write().expect("locale cache lock poisoned");
        let entry = entries.entry(canonical).or_insert(built);
        Ok(Some(Arc::clone(entry)))
    }
}

/// Canonical cache key: sorted, deduplicated, `+`-joined.
fn canonical_key(keys: &[String]) -> String {
    let mut sorted: Vec<&str> = keys.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted.dedup();
    sorted.join("+")
}

/// Merge the registry tables named by `canonical`.
///
/// Merging walks the canonical (sorted) key order, so on a colliding source
/// character the lexicographically later key wins, independent of the order
/// the caller listed. Unknown keys are skipped.
fn build_entry(canonical: &str) -> Result<LocaleEntry, regex::Error> {
    let mut map = HashMap::new();

    for key in canonical.split('+') {
        let Some(pairs) = LOCALE_TABLE.get(key) else {
            warn!("unknown locale key `{key}` ignored");
            continue;
        };
        for &(from, to) in *pairs {
            if let Some(previous) = map.insert(from, to)
                && previous != to
            {
                debug!("locale `{key}` remaps `{from}` to `{to}` (was `{previous}`)");
            }
        }
    }

    let pattern = if map.is_empty() {
        None
    } else {
        Some(matcher::compile_class(map.keys().copied())?)
    };
    Ok(LocaleEntry { map, pattern })
}
