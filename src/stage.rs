//! Core slug stage abstraction.
//!
//! Every platform slug is a fixed sequence of small text transforms. Each
//! transform is a [`Stage`]: it gets a cheap [`Stage::needs_apply`] pre-check
//! and a `Cow`-in/`Cow`-out [`Stage::apply`] that hands back the borrowed input
//! untouched whenever nothing changes.
//!
//! Stages that are a pure per-character mapping (lowercasing, character
//! removal, single-character substitution) additionally expose themselves as a
//! [`CharMapper`] through [`Stage::as_char_mapper`]. The chained process runs
//! those through the iterator path, which never looks at neighbouring
//! characters.

pub mod append_repetition;
pub mod ascii_lower_case;
pub mod collapse_runs;
pub mod decode_char_refs;
pub mod hyphenate_whitespace;
pub mod leading_letter;
pub mod prefix;
pub mod remove_punctuation;
pub mod replace_char;
pub mod strip_emoji;
pub mod strip_html;
pub mod strip_markdown;
pub mod strip_percent_escapes;
pub mod trim;
pub mod trim_char;
pub mod underscore_non_alnum;

use crate::context::Context;
use std::borrow::Cow;
use std::iter::FusedIterator;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("Slugification failed at stage `{0}`: {1}")]
    Failed(&'static str, String),
}

/// A single slugification step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used in error messages and traces.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `Ok(false)` skips the whole stage.
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError>;

    /// Allocation-aware transformation. Must always be correct.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError>;

    /// Return a trait-object reference to `self` **iff** this stage can be
    /// expressed as a pure character mapping under `ctx`. The default
    /// implementation returns `None`.
    #[inline]
    fn as_char_mapper(&self, _ctx: &Context) -> Option<&dyn CharMapper> {
        None
    }
}

/// One-to-one (or one-to-zero) character transform.
pub trait CharMapper: Send + Sync {
    /// Map a single Unicode scalar value.
    /// Return `None` if the character should be **removed**.
    fn map(&self, c: char, ctx: &Context) -> Option<char>;

    /// Bind the mapper to a concrete `&str`.
    fn bind<'a>(&self, text: &'a str, ctx: &Context) -> Box<dyn FusedIterator<Item = char> + 'a>;
}

/// Shared `apply` body for mapper stages: copies nothing until the first
/// character that actually changes.
pub(crate) fn apply_char_mapper<'a>(
    mapper: &dyn CharMapper,
    text: Cow<'a, str>,
    ctx: &Context,
) -> Cow<'a, str> {
    let Some((idx, _)) = text
        .char_indices()
        .find(|&(_, c)| mapper.map(c, ctx) != Some(c))
    else {
        return text;
    };
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..idx]);
    out.extend(text[idx..].chars().filter_map(|c| mapper.map(c, ctx)));
    Cow::Owned(out)
}

/// Shared `needs_apply` body for mapper stages.
#[inline]
pub(crate) fn mapper_changes(mapper: &dyn CharMapper, text: &str, ctx: &Context) -> bool {
    text.chars().any(|c| mapper.map(c, ctx) != Some(c))
}
