use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use memchr::memchr;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

static NUMERIC_CHAR_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#([0-9]+);").expect("char ref pattern is a valid regex"));

/// Decode decimal character references (`&#169;`) and lowercase the result.
///
/// Only the decimal form is recognised; named (`&amp;`) and hex (`&#x41;`)
/// references are left for the punctuation stage to shred.
pub struct DecodeNumericCharRefs;

/// UTF-16 code unit semantics: the value wraps at 2^16 and a lone surrogate
/// becomes U+FFFD.
fn decode_code_unit(digits: &str) -> char {
    let unit = digits
        .bytes()
        .fold(0u32, |acc, b| (acc * 10 + u32::from(b - b'0')) % 0x1_0000);
    char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER)
}

impl Stage for DecodeNumericCharRefs {
    fn name(&self) -> &'static str {
        "decode_numeric_char_refs"
    }

    fn needs_apply(&self, text: &str, _: &Context) -> Result<bool, StageError> {
        if memchr(b'&', text.as_bytes()).is_none() {
            return Ok(false);
        }
        Ok(NUMERIC_CHAR_REF.is_match(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _: &Context) -> Result<Cow<'a, str>, StageError> {
        if memchr(b'&', text.as_bytes()).is_none() {
            return Ok(text);
        }
        let decoded = match NUMERIC_CHAR_REF.replace_all(&text, |caps: &Captures<'_>| {
            decode_code_unit(&caps[1]).to_lowercase().collect::<String>()
        }) {
            Cow::Borrowed(_) => None,
            Cow::Owned(s) => Some(s),
        };
        Ok(decoded.map_or(text, Cow::Owned))
    }
}
