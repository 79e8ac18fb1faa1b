//! Core transformation stage abstraction.
//!
//! A slug is produced by folding the input through a fixed sequence of
//! stages. Each stage is a stateless unit struct; everything it needs at
//! call time comes from the [`Context`]. `needs_apply` is a cheap pre-check
//! that lets untouched text flow through as `Cow::Borrowed`.

pub mod collapse;
pub mod fold_locale;
pub mod lower_case;
pub mod remove_diacritics;
pub mod replace_symbols;
pub mod trim_separators;

use crate::context::Context;
use std::borrow::Cow;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error)]
pub enum StageError {
    /// A matcher built from runtime-supplied replacement keys failed to
    /// compile. Keys are escaped before compilation, so this means a
    /// pathological replacement map (one large enough to blow the pattern
    /// size limit), not ordinary input.
    #[error("stage `{0}`: replacement pattern failed to compile: {1}")]
    Pattern(&'static str, #[source] regex::Error),
}

/// A single slugification step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used in error messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` skips the whole stage.
    fn needs_apply(&self, text: &str, ctx: &Context<'_>) -> bool;

    /// Allocation-aware transformation. Total for every code point.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context<'_>)
    -> Result<Cow<'a, str>, StageError>;
}
