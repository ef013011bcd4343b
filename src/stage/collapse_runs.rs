use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// Squeeze every run of `ch` down to a single `ch`.
#[derive(Debug, Clone, Copy)]
pub struct CollapseRuns {
    pub ch: char,
}

/// Bitbucket and GitLab never emit `--`; GitHub does.
pub const COLLAPSE_HYPHENS: CollapseRuns = CollapseRuns { ch: '-' };

impl CollapseRuns {
    fn has_run(&self, text: &str) -> bool {
        let mut prev_was_ch = false;
        for c in text.chars() {
            let is_ch = c == self.ch;
            if is_ch && prev_was_ch {
                return true;
            }
            prev_was_ch = is_ch;
        }
        false
    }
}

impl Stage for CollapseRuns {
    fn name(&self) -> &'static str {
        "collapse_runs"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _: &Context) -> Result<bool, StageError> {
        Ok(self.has_run(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _: &Context) -> Result<Cow<'a, str>, StageError> {
        if !self.has_run(&text) {
            return Ok(text);
        }
        let mut out = String::with_capacity(text.len());
        let mut prev_was_ch = false;
        for c in text.chars() {
            let is_ch = c == self.ch;
            if !(is_ch && prev_was_ch) {
                out.push(c);
            }
            prev_was_ch = is_ch;
        }
        Ok(Cow::Owned(out))
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{
        assert_stage_contract, platform::Platform, testing::stage_contract::StageTestConfig,
    };

    impl StageTestConfig for CollapseRuns {
        fn should_transform(_: Platform) -> &'static [(&'static str, &'static str)] {
            &[
                ("a----b", "a-b"),
                ("--a-b--", "-a-b-"),
                ("a-b-c", "a-b-c"),
            ]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(COLLAPSE_HYPHENS);
    }
}
