use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

#[inline(always)]
fn is_id_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9')
}

/// Node.js docs: every run of characters outside `[a-z0-9]` becomes `_`.
///
/// Already-valid input (`a_b`) maps onto itself, so the stage only reports
/// work when a run is longer than one character or is not a bare `_`.
pub struct UnderscoreNonAlnum;

impl Stage for UnderscoreNonAlnum {
    fn name(&self) -> &'static str {
        "underscore_non_alnum"
    }

    fn needs_apply(&self, text: &str, _: &Context) -> Result<bool, StageError> {
        let mut prev_sep = false;
        for c in text.chars() {
            if is_id_char(c) {
                prev_sep = false;
                continue;
            }
            if c != '_' || prev_sep {
                return Ok(true);
            }
            prev_sep = true;
        }
        Ok(false)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !self.needs_apply(&text, ctx)? {
            return Ok(text);
        }
        let mut out = String::with_capacity(text.len());
        let mut in_run = false;
        for c in text.chars() {
            if is_id_char(c) {
                out.push(c);
                in_run = false;
            } else if !in_run {
                out.push('_');
                in_run = true;
            }
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

    impl StageTestConfig for UnderscoreNonAlnum {
        fn should_transform(_: Platform) -> &'static [(&'static str, &'static str)] {
            &[
                ("domain.my heading", "domain_my_heading"),
                ("fs.readfile(path, options)", "fs_readfile_path_options_"),
                ("a_b", "a_b"),
                ("a__b", "a_b"),
                ("Upper é", "_pper_"),
            ]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(UnderscoreNonAlnum);
    }
}
