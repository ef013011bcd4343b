use crate::{
    context::Context,
    stage::{CharMapper, Stage, StageError, apply_char_mapper},
};
use std::borrow::Cow;
use std::iter::FusedIterator;

/// Lowercase `A–Z` only.
///
/// Platforms lowercase headings byte-wise before slugifying, so `É`, `Σ` or
/// `İ` must reach the slugifier untouched. Full Unicode lowercasing would
/// change both the code points and, for some of them, the string length.
pub struct AsciiLowerCase;

/// Convenience wrapper: zero-copy when `text` has no ASCII capitals.
pub fn ascii_only_to_lower_case(text: &str) -> Cow<'_, str> {
    if !text.bytes().any(|b| b.is_ascii_uppercase()) {
        return Cow::Borrowed(text);
    }
    apply_char_mapper(&AsciiLowerCase, Cow::Borrowed(text), &Context::default())
}

impl Stage for AsciiLowerCase {
    fn name(&self) -> &'static str {
        "ascii_lower_case"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _: &Context) -> Result<bool, StageError> {
        Ok(text.bytes().any(|b| b.is_ascii_uppercase()))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(apply_char_mapper(self, text, ctx))
    }

    #[inline]
    fn as_char_mapper(&self, _: &Context) -> Option<&dyn CharMapper> {
        Some(self)
    }
}

impl CharMapper for AsciiLowerCase {
    #[inline(always)]
    fn map(&self, c: char, _: &Context) -> Option<char> {
        Some(c.to_ascii_lowercase())
    }

    fn bind<'a>(&self, text: &'a str, _: &Context) -> Box<dyn FusedIterator<Item = char> + 'a> {
        Box::new(text.chars().map(|c| c.to_ascii_lowercase()))
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{
        assert_stage_contract, platform::Platform, testing::stage_contract::StageTestConfig,
    };

    impl StageTestConfig for AsciiLowerCase {
        fn should_transform(_: Platform) -> &'static [(&'static str, &'static str)] {
            &[
                ("HELLO World", "hello world"),
                ("ÉCOLE", "École"),
                ("İSTANBUL", "İstanbul"),
                ("ΣΟΦΙΑ ABC", "ΣΟΦΙΑ abc"),
            ]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(AsciiLowerCase);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapper_is_zero_copy_on_lowercase() {
        let input = "already lower 中文";
        assert!(matches!(
            ascii_only_to_lower_case(input),
            Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()
        ));
    }

    #[test]
    fn wrapper_leaves_multibyte_untouched() {
        assert_eq!(ascii_only_to_lower_case("Ünïcödé ÄBC"), "Ünïcödé äbc");
        assert_eq!(ascii_only_to_lower_case("👍 OK"), "👍 ok");
    }
}
