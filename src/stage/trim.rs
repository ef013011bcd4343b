use crate::{
    context::Context,
    stage::{Stage, StageError},
    unicode::is_js_whitespace,
};
use std::borrow::Cow;

/// Trim leading and trailing whitespace, BOM included.
pub struct Trim;

impl Stage for Trim {
    fn name(&self) -> &'static str {
        "trim"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _: &Context) -> Result<bool, StageError> {
        let bytes = text.as_bytes();
        // Fast ASCII path: check first/last byte
        if bytes.first().is_some_and(u8::is_ascii_whitespace)
            || bytes.last().is_some_and(u8::is_ascii_whitespace)
        {
            return Ok(true);
        }
        // Unicode fallback: only if needed
        Ok(text.starts_with(is_js_whitespace) || text.ends_with(is_js_whitespace))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(match text {
            // Sub-slicing a borrowed input never copies.
            Cow::Borrowed(s) => Cow::Borrowed(s.trim_matches(is_js_whitespace)),
            Cow::Owned(s) => {
                let trimmed = s.trim_matches(is_js_whitespace);
                if trimmed.len() == s.len() {
                    Cow::Owned(s)
                } else {
                    Cow::Owned(trimmed.to_string())
                }
            }
        })
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{
        assert_stage_contract, platform::Platform, testing::stage_contract::StageTestConfig,
    };

    impl StageTestConfig for Trim {
        fn should_transform(_: Platform) -> &'static [(&'static str, &'static str)] {
            &[
                ("  hello  ", "hello"),
                ("\t\nHeading\r\n", "Heading"),
                ("\u{FEFF}bom", "bom"),
                ("\u{3000}全角\u{3000}", "全角"),
            ]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(Trim);
    }
}
