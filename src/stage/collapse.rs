//! Non-alphanumeric collapsing.
//!
//! Every maximal run of characters outside `[A-Za-z0-9]` becomes a single
//! separator instance. This is the stage that turns space-padded symbol
//! replacements and locale-folded text into token boundaries, and that
//! silently drops scripts nothing upstream transliterated.

use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use std::borrow::Cow;

/// Maximal runs outside the slug alphabet.
static NON_ALNUM: Lazy<Regex> = Lazy::new(|| {
    Regex::new("[^A-Za-z0-9]+").expect("collapse pattern must compile - this is a bug")
});

pub struct Collapse;

impl Stage for Collapse {
    fn name(&self) -> &'static str {
        "collapse"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context<'_>) -> bool {
        text.bytes().any(|b| !b.is_ascii_alphanumeric())
    }

    fn apply<'a>(
        &self,
        text: Cow<'a, str>,
        ctx: &Context<'_>,
    ) -> Result<Cow<'a, str>, StageError> {
        // NoExpand keeps a caller-supplied `$` in the separator literal.
        let collapsed = NON_ALNUM.replace_all(text.as_ref(), NoExpand(ctx.separator));
        let collapsed = dedup_separators(collapsed, ctx.separator);
        if let Cow::Owned(out) = collapsed {
            return Ok(Cow::Owned(out));
        }
        Ok(text)
    }
}

/// Fold doubled separators down to one.
///
/// A single collapse pass cannot create adjacency for a separator made
/// entirely of non-alphanumeric characters (each maximal run yields exactly
/// one instance), so this is a no-op on the common path. Separators that
/// contain alphanumerics can collide with neighboring input and are folded
/// here until none remain.
fn dedup_separators<'h>(text: Cow<'h, str>, separator: &str) -> Cow<'h, str> {
    if separator.is_empty() {
        return text;
    }
    let doubled = separator.repeat(2);
    if !text.contains(&doubled) {
        return text;
    }
    let mut out = text.into_owned();
    while out.contains(&doubled) {
        out = out.replace(&doubled, separator);
    }
    Cow::Owned(out)
}
