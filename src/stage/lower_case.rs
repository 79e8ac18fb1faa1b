//! Final case fold.
//!
//! By the time this runs the text is the collapsed, trimmed slug, so in
//! the common case it is pure ASCII and folds in place. A non-ASCII
//! separator takes the full Unicode path.

use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

pub struct LowerCase;

impl Stage for LowerCase {
    fn name(&self) -> &'static str {
        "lower_case"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context<'_>) -> bool {
        ctx.lowercase && text.chars().any(char::is_uppercase)
    }

    fn apply<'a>(
        &self,
        text: Cow<'a, str>,
        _ctx: &Context<'_>,
    ) -> Result<Cow<'a, str>, StageError> {
        if text.is_ascii() {
            let mut out = text.into_owned();
            out.make_ascii_lowercase();
            return Ok(Cow::Owned(out));
        }
        Ok(Cow::Owned(text.to_lowercase()))
    }
}
