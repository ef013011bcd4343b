use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;
use std::fmt::Write;
use tracing::debug;

/// Append `<separator><count>` for duplicate headings.
///
/// No-op when the count is zero or the platform has no separator (Ghost).
pub struct AppendRepetition;

impl Stage for AppendRepetition {
    fn name(&self) -> &'static str {
        "append_repetition"
    }

    #[inline(always)]
    fn needs_apply(&self, _: &str, ctx: &Context) -> Result<bool, StageError> {
        Ok(ctx.repetition.is_set() && ctx.entry.supports_repetition())
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !ctx.repetition.is_set() {
            return Ok(text);
        }
        let Some(separator) = ctx.entry.repetition_separator else {
            debug!(
                platform = %ctx.platform,
                repetition = %ctx.repetition,
                "platform has no repetition suffix, ignoring"
            );
            return Ok(text);
        };
        let mut out = text.into_owned();
        out.push(separator);
        write!(out, "{}", ctx.repetition)
            .map_err(|e| StageError::Failed(self.name(), e.to_string()))?;
        Ok(Cow::Owned(out))
    }
}
