use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// Node.js ids start with `a-z`; anything else gets a leading `_`.
/// The empty string stays empty.
pub struct LeadingLetter;

impl Stage for LeadingLetter {
    fn name(&self) -> &'static str {
        "leading_letter"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _: &Context) -> Result<bool, StageError> {
        Ok(text.chars().next().is_some_and(|c| !c.is_ascii_lowercase()))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !self.needs_apply(&text, ctx)? {
            return Ok(text);
        }
        let mut out = String::with_capacity(text.len() + 1);
        out.push('_');
        out.push_str(&text);
        Ok(Cow::Owned(out))
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{
        assert_stage_contract, platform::Platform, testing::stage_contract::StageTestConfig,
    };

    impl StageTestConfig for LeadingLetter {
        fn should_pass_through(_: Platform) -> &'static [&'static str] {
            &["hello", "a1", ""]
        }

        fn should_transform(_: Platform) -> &'static [(&'static str, &'static str)] {
            &[("1st", "_1st"), ("_x", "__x"), ("éa", "_éa")]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(LeadingLetter);
    }
}
