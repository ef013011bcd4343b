//! Table-driven character removal.
//!
//! `RemovePunctuation` reads the active platform's removal set from the
//! context; `RemoveCjkPunctuation` uses the shared CJK set and only runs for
//! platforms whose table entry opts in.

use crate::{
    context::Context,
    stage::{CharMapper, Stage, StageError, apply_char_mapper, mapper_changes},
    unicode::is_cjk_punctuation,
};
use std::borrow::Cow;
use std::iter::FusedIterator;

pub struct RemovePunctuation;

impl Stage for RemovePunctuation {
    fn name(&self) -> &'static str {
        "remove_punctuation"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        Ok(mapper_changes(self, text, ctx))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(apply_char_mapper(self, text, ctx))
    }

    #[inline]
    fn as_char_mapper(&self, _: &Context) -> Option<&dyn CharMapper> {
        Some(self)
    }
}

impl CharMapper for RemovePunctuation {
    #[inline(always)]
    fn map(&self, c: char, ctx: &Context) -> Option<char> {
        if ctx.entry.removes(c) { None } else { Some(c) }
    }

    fn bind<'a>(&self, text: &'a str, ctx: &Context) -> Box<dyn FusedIterator<Item = char> + 'a> {
        let entry = ctx.entry;
        Box::new(text.chars().filter(move |&c| !entry.removes(c)))
    }
}

pub struct RemoveCjkPunctuation;

impl Stage for RemoveCjkPunctuation {
    fn name(&self) -> &'static str {
        "remove_cjk_punctuation"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        Ok(ctx.entry.strips_cjk_punctuation && text.chars().any(is_cjk_punctuation))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !ctx.entry.strips_cjk_punctuation {
            return Ok(text);
        }
        Ok(apply_char_mapper(self, text, ctx))
    }

    #[inline]
    fn as_char_mapper(&self, _: &Context) -> Option<&dyn CharMapper> {
        Some(self)
    }
}

impl CharMapper for RemoveCjkPunctuation {
    #[inline(always)]
    fn map(&self, c: char, ctx: &Context) -> Option<char> {
        if ctx.entry.strips_cjk_punctuation && is_cjk_punctuation(c) {
            None
        } else {
            Some(c)
        }
    }

    fn bind<'a>(&self, text: &'a str, ctx: &Context) -> Box<dyn FusedIterator<Item = char> + 'a> {
        let enabled = ctx.entry.strips_cjk_punctuation;
        Box::new(
            text.chars()
                .filter(move |&c| !(enabled && is_cjk_punctuation(c))),
        )
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{
        assert_stage_contract, platform::Platform, testing::stage_contract::StageTestConfig,
    };

    impl StageTestConfig for RemovePunctuation {
        fn should_transform(platform: Platform) -> &'static [(&'static str, &'static str)] {
            match platform {
                Platform::Github | Platform::Bitbucket => &[
                    ("hello, world!", "hello world"),
                    ("a%b^c&d¥e–f—g", "abcdefg"),
                    ("c++ & friends", "c  friends"),
                ],
                Platform::Gitlab => &[
                    ("hello, world!", "hello world"),
                    ("a%b^c&d", "a%b^c&d"),
                ],
                Platform::Nodejs => &[("hello, world!", "hello, world!")],
                Platform::Ghost => &[
                    ("a-b\\c", "abc"),
                    ("$~", "$~"),
                    ("c++ & friends", "c  friends"),
                ],
            }
        }
    }

    impl StageTestConfig for RemoveCjkPunctuation {
        fn should_transform(platform: Platform) -> &'static [(&'static str, &'static str)] {
            match platform {
                Platform::Github | Platform::Bitbucket | Platform::Gitlab => {
                    &[("中文。標點！", "中文標點"), ("「引用」", "引用")]
                }
                Platform::Nodejs | Platform::Ghost => &[("中文。標點！", "中文。標點！")],
            }
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(RemovePunctuation);
        assert_stage_contract!(RemoveCjkPunctuation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;

    #[test]
    fn full_github_removal_set() {
        let ctx = Context::new(Platform::Github);
        let input = "/?!:[]`.,()*\"';{}+=<>~$|#@%^&¥–—keep";
        let out = RemovePunctuation.apply(Cow::Borrowed(input), &ctx).unwrap();
        assert_eq!(out, "keep");
    }

    #[test]
    fn hyphen_and_underscore_survive_github() {
        let ctx = Context::new(Platform::Github);
        let out = RemovePunctuation
            .apply(Cow::Borrowed("a-b_c"), &ctx)
            .unwrap();
        assert!(matches!(out, Cow::Borrowed("a-b_c")));
    }
}
