use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// Prepend the platform's fixed fragment prefix (`markdown-header-` on
/// Bitbucket, nothing elsewhere).
pub struct PlatformPrefix;

impl Stage for PlatformPrefix {
    fn name(&self) -> &'static str {
        "platform_prefix"
    }

    #[inline(always)]
    fn needs_apply(&self, _: &str, ctx: &Context) -> Result<bool, StageError> {
        Ok(!ctx.entry.prefix.is_empty())
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let prefix = ctx.entry.prefix;
        if prefix.is_empty() {
            return Ok(text);
        }
        let mut out = String::with_capacity(prefix.len() + text.len());
        out.push_str(prefix);
        out.push_str(&text);
        Ok(Cow::Owned(out))
    }
}
