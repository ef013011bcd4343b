use crate::{
    context::Context,
    stage::{Stage, StageError},
    unicode::is_js_whitespace,
};
use std::borrow::Cow;

/// Every run of whitespace (tabs, NBSP, ideographic space…) becomes one `-`.
pub struct HyphenateWhitespace;

impl Stage for HyphenateWhitespace {
    fn name(&self) -> &'static str {
        "hyphenate_whitespace"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _: &Context) -> Result<bool, StageError> {
        Ok(text.chars().any(is_js_whitespace))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _: &Context) -> Result<Cow<'a, str>, StageError> {
        if !text.chars().any(is_js_whitespace) {
            return Ok(text);
        }
        let mut out = String::with_capacity(text.len());
        let mut in_run = false;
        for c in text.chars() {
            if is_js_whitespace(c) {
                if !in_run {
                    out.push('-');
                }
                in_run = true;
            } else {
                out.push(c);
                in_run = false;
            }
        }
        Ok(Cow::Owned(out))
    }
}
