use thiserror::Error;

use crate::{
    context::Context,
    locale::cache::LocaleCache,
    options::Options,
    pipeline::Pipeline,
    stage::{
        Stage, StageError, collapse::Collapse, fold_locale::FoldLocale, lower_case::LowerCase,
        remove_diacritics::RemoveDiacritics, replace_symbols::ReplaceSymbols,
        trim_separators::TrimSeparators,
    },
};
use once_cell::sync::Lazy;
use std::{borrow::Cow, sync::Arc};

#[derive(Debug, Error)]
pub enum SlugenError {
    #[error("stage error: {0}")]
    Stage(#[from] StageError),
}

/// The slug engine: the fixed stage order plus an engine-scoped locale
/// cache.
///
/// Stage order is load-bearing. Symbols run first so word replacements land
/// before any character folding; the locale pass precedes canonical
/// decomposition so explicit foldings beat the generic mark strip;
/// collapsing precedes trimming so the trim only ever sees separator runs
/// at the boundaries; the case fold comes last and sees the finished slug.
pub struct Slugen {
    pipeline: Pipeline,
    cache: LocaleCache,
}

impl Default for Slugen {
    fn default() -> Self {
        Self::new()
    }
}

impl Slugen {
    pub fn new() -> Self {
        Self {
            pipeline: Pipeline::new(vec![
                Arc::new(ReplaceSymbols) as Arc<dyn Stage>,
                Arc::new(FoldLocale),
                Arc::new(RemoveDiacritics),
                Arc::new(Collapse),
                Arc::new(TrimSeparators),
                Arc::new(LowerCase),
            ]),
            cache: LocaleCache::default(),
        }
    }

    /// Slugify `input` under `options`, reusing this engine's locale cache.
    pub fn slugify(&self, input: &str, options: &Options) -> Result<String, SlugenError> {
        if input.is_empty() {
            return Ok(String::new());
        }
        let ctx = Context::new(options, &self.cache);
        let out = self.pipeline.process(Cow::Borrowed(input), &ctx)?;
        Ok(out.into_owned())
    }
}

/// Shared engine behind the free function, so repeated calls with the same
/// locale sets reuse compiled matchers across the whole process.
static DEFAULT_ENGINE: Lazy<Slugen> = Lazy::new(Slugen::new);

/// Slugify with the process-wide shared engine.
pub fn slugify(input: &str, options: &Options) -> Result<String, SlugenError> {
    DEFAULT_ENGINE.slugify(input, options)
}
