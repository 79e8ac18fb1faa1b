//! Generic diacritic fallback.
//!
//! Canonical decomposition (NFD) splits precomposed letters into base
//! letter plus combining marks, then every mark in the Combining
//! Diacritical Marks block is dropped. This catches accents from locales
//! the registry never modeled (`"Señor"` without `locale: "es"` still
//! slugs to `senor`). Ligatures, fractions, and superscripts have no
//! canonical decomposition and pass through to the collapse stage.

use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;
use unicode_normalization::UnicodeNormalization;

pub struct RemoveDiacritics;

/// Combining Diacritical Marks block.
#[inline(always)]
fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}')
}

impl Stage for RemoveDiacritics {
    fn name(&self) -> &'static str {
        "remove_diacritics"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context<'_>) -> bool {
        // ASCII can neither decompose nor carry combining marks.
        !text.is_empty() && !text.is_ascii()
    }

    fn apply<'a>(
        &self,
        text: Cow<'a, str>,
        _ctx: &Context<'_>,
    ) -> Result<Cow<'a, str>, StageError> {
        let mut stripped = false;
        let mut out = String::with_capacity(text.len());

        for c in text.nfd() {
            if is_combining_mark(c) {
                stripped = true;
                continue;
            }
            out.push(c);
        }

        // NFD can rewrite without stripping anything (Hangul decomposes to
        // jamo). Only keep the original when decomposition was the identity.
        if !stripped && out == *text {
            return Ok(text);
        }
        Ok(Cow::Owned(out))
    }
}
