//! Symbol substitution, the first pipeline stage.
//!
//! Runs over the raw input so that word replacements (" and ", " dollar ")
//! land before any character-level folding changes the text around them.

use crate::{
    context::Context,
    matcher,
    stage::{Stage, StageError},
    symbols,
    symbols::SYMBOL_TABLE,
};
use std::borrow::Cow;

pub struct ReplaceSymbols;

impl Stage for ReplaceSymbols {
    fn name(&self) -> &'static str {
        "replace_symbols"
    }

    fn needs_apply(&self, text: &str, ctx: &Context<'_>) -> bool {
        if !ctx.symbols {
            return false;
        }
        match ctx.custom_replacements {
            // Override keys are not in the base pattern; the merged map has
            // to be built either way.
            Some(_) => true,
            None => symbols::base_pattern().is_match(text),
        }
    }

    fn apply<'a>(
        &self,
        text: Cow<'a, str>,
        ctx: &Context<'_>,
    ) -> Result<Cow<'a, str>, StageError> {
        let replaced = match ctx.custom_replacements {
            None => symbols::base_pattern().replace_all(text.as_ref(), |caps: &regex::Captures<'_>| {
                caps[0]
                    .chars()
                    .next()
                    .and_then(|c| SYMBOL_TABLE.get(&c))
                    .copied()
                    .unwrap_or("")
            }),
            Some(overrides) => {
                let map = symbols::merged_with(overrides);
                let pattern = matcher::compile_class(map.keys().copied())
                    .map_err(|e| StageError::Pattern(self.name(), e))?;
                pattern.replace_all(text.as_ref(), |caps: &regex::Captures<'_>| {
                    caps[0]
                        .chars()
                        .next()
                        .and_then(|c| map.get(&c))
                        .copied()
                        .unwrap_or("")
                })
            }
        };
        if let Cow::Owned(out) = replaced {
            return Ok(Cow::Owned(out));
        }
        Ok(text)
    }
}
