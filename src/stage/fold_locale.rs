//! Locale-specific character folding.
//!
//! Runs before canonical decomposition so an explicit locale mapping
//! (`'ß'` to `"ss"`, Turkish `'İ'` to `"i"`) wins over the generic
//! mark-stripping fallback that follows it.

use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

pub struct FoldLocale;

impl Stage for FoldLocale {
    fn name(&self) -> &'static str {
        "fold_locale"
    }

    fn needs_apply(&self, _text: &str, ctx: &Context<'_>) -> bool {
        // No keys means no cache interaction at all. Turkish maps plain
        // ASCII 'I', so the text itself cannot rule the stage out here.
        !ctx.locale.is_empty()
    }

    fn apply<'a>(
        &self,
        text: Cow<'a, str>,
        ctx: &Context<'_>,
    ) -> Result<Cow<'a, str>, StageError> {
        let entry = ctx
            .cache
            .resolve(ctx.locale)
            .map_err(|e| StageError::Pattern(self.name(), e))?;
        let Some(entry) = entry else {
            return Ok(text);
        };
        // The sentinel entry for an empty merge carries no matcher.
        let Some(pattern) = &entry.pattern else {
            return Ok(text);
        };

        let replaced = pattern.replace_all(text.as_ref(), |caps: &regex::Captures<'_>| {
            caps[0]
                .chars()
                .next()
                .and_then(|c| entry.map.get(&c))
                .copied()
                .unwrap_or("")
        });
        if let Cow::Owned(out) = replaced {
            return Ok(Cow::Owned(out));
        }
        Ok(text)
    }
}
