use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use memchr::memchr;
use std::borrow::Cow;

/// Drop `%XX` escape-looking triplets (`X` in `[0-9A-Fa-f]`).
pub struct StripPercentEscapes;

/// Byte offsets of every non-overlapping escape, scanned left to right.
fn escapes(text: &str) -> impl Iterator<Item = usize> + '_ {
    let bytes = text.as_bytes();
    let mut pos = 0;
    std::iter::from_fn(move || {
        while let Some(off) = memchr(b'%', &bytes[pos..]) {
            let at = pos + off;
            if bytes.len() >= at + 3
                && bytes[at + 1].is_ascii_hexdigit()
                && bytes[at + 2].is_ascii_hexdigit()
            {
                pos = at + 3;
                return Some(at);
            }
            pos = at + 1;
        }
        None
    })
}

impl Stage for StripPercentEscapes {
    fn name(&self) -> &'static str {
        "strip_percent_escapes"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _: &Context) -> Result<bool, StageError> {
        Ok(escapes(text).next().is_some())
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _: &Context) -> Result<Cow<'a, str>, StageError> {
        let mut out = String::new();
        let mut last = 0;
        for at in escapes(&text) {
            out.push_str(&text[last..at]);
            last = at + 3;
        }
        if last == 0 {
            return Ok(text);
        }
        out.push_str(&text[last..]);
        Ok(Cow::Owned(out))
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{
        assert_stage_contract, platform::Platform, testing::stage_contract::StageTestConfig,
    };

    impl StageTestConfig for StripPercentEscapes {
        fn should_transform(_: Platform) -> &'static [(&'static str, &'static str)] {
            &[
                ("100%20off", "100off"),
                ("%41%42c", "c"),
                ("%zz%4", "%zz%4"),
                ("%%41", "%"),
                ("50%", "50%"),
            ]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(StripPercentEscapes);
    }
}
