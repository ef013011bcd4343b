use crate::{
    context::Context,
    stage::{Stage, StageError},
    unicode::EMOJI,
};
use std::borrow::Cow;

/// Delete emoji sequences as whole units, so a ZWJ family or a flag never
/// leaves half a sequence behind.
///
/// Runs after the repetition suffix on GitHub; the pattern never treats a
/// bare digit as an emoji so the suffix survives.
pub struct StripEmoji;

#[inline(always)]
fn may_contain_emoji(text: &str) -> bool {
    // Every emoji sequence contains either a non-ASCII scalar or U+20E3.
    !text.is_ascii()
}

impl Stage for StripEmoji {
    fn name(&self) -> &'static str {
        "strip_emoji"
    }

    fn needs_apply(&self, text: &str, _: &Context) -> Result<bool, StageError> {
        Ok(may_contain_emoji(text) && EMOJI.is_match(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _: &Context) -> Result<Cow<'a, str>, StageError> {
        if !may_contain_emoji(&text) {
            return Ok(text);
        }
        let stripped = match EMOJI.replace_all(&text, "") {
            Cow::Borrowed(_) => None,
            Cow::Owned(s) => Some(s),
        };
        Ok(stripped.map_or(text, Cow::Owned))
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{
        assert_stage_contract, platform::Platform, testing::stage_contract::StageTestConfig,
    };

    impl StageTestConfig for StripEmoji {
        fn should_transform(_: Platform) -> &'static [(&'static str, &'static str)] {
            &[
                ("😄-emoji", "-emoji"),
                ("hello-👍🏽-world-2", "hello--world-2"),
                (
                    "female-construction-worker-👷🏼\u{200D}♀\u{FE0F}",
                    "female-construction-worker-",
                ),
                ("flag-🇯🇵", "flag-"),
                ("keycap-1\u{FE0F}\u{20E3}-1", "keycap--1"),
                ("中文-1", "中文-1"),
            ]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(StripEmoji);
    }
}
