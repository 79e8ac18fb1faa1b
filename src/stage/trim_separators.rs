//! Boundary trimming.
//!
//! Leading and trailing separator runs are stripped with literal string
//! matching, so separators like `"+"`, `"."`, or `"$"` need no escaping in
//! the first place.

use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

pub struct TrimSeparators;

impl Stage for TrimSeparators {
    fn name(&self) -> &'static str {
        "trim_separators"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context<'_>) -> bool {
        !ctx.separator.is_empty()
            && (text.starts_with(ctx.separator) || text.ends_with(ctx.separator))
    }

    fn apply<'a>(
        &self,
        text: Cow<'a, str>,
        ctx: &Context<'_>,
    ) -> Result<Cow<'a, str>, StageError> {
        match text {
            Cow::Borrowed(s) => Ok(Cow::Borrowed(
                s.trim_start_matches(ctx.separator)
                    .trim_end_matches(ctx.separator),
            )),
            Cow::Owned(s) => {
                let trimmed = s
                    .trim_start_matches(ctx.separator)
                    .trim_end_matches(ctx.separator);
                if trimmed.len() == s.len() {
                    return Ok(Cow::Owned(s));
                }
                Ok(Cow::Owned(trimmed.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{locale::cache::LocaleCache, options::Options};

    fn run(input: &str, options: &Options) -> String {
        let cache = LocaleCache::default();
        let ctx = Context::new(options, &cache);
        TrimSeparators
            .apply(Cow::Borrowed(input), &ctx)
            .unwrap()
            .into_owned()
    }

    #[test]
    fn trims_runs_on_both_ends() {
        let options = Options::default();
        assert_eq!(run("--hello-world---", &options), "hello-world");
    }

    #[test]
    fn metacharacter_separator_is_literal() {
        let options = Options::new().separator("+");
        assert_eq!(run("+++a+b++", &options), "a+b");
        let options = Options::new().separator(".");
        assert_eq!(run(".a.b.", &options), "a.b");
    }

    #[test]
    fn multi_char_separator() {
        let options = Options::new().separator("--");
        assert_eq!(run("----a--b----", &options), "a--b");
    }

    #[test]
    fn empty_separator_never_applies() {
        let cache = LocaleCache::default();
        let options = Options::new().separator("");
        let ctx = Context::new(&options, &cache);
        assert!(!TrimSeparators.needs_apply("anything", &ctx));
    }

    #[test]
    fn interior_separators_survive() {
        let options = Options::default();
        assert_eq!(run("a-b-c", &options), "a-b-c");
    }
}
