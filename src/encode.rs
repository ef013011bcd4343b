//! Fragment percent-encoding.
//!
//! Mirrors the browser `encodeURI` contract: everything outside the URI
//! reserved/unreserved set is UTF-8 percent-encoded with uppercase hex, while
//! `#`, `/`, `?` and friends are left alone.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use std::borrow::Cow;

/// ASCII bytes escaped by `encodeURI`. Non-ASCII is always escaped.
const URI: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

const ENCODED_ZWJ: &str = "%E2%80%8D";
const ZWJ: &str = "\u{200D}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UriEncoder {
    #[default]
    Standard,
    /// GitHub leaves the zero-width joiner of emoji sequences unencoded, so
    /// the anchor only resolves if we do the same.
    PreserveZwj,
}

impl UriEncoder {
    pub fn encode<'a>(&self, fragment: &'a str) -> Cow<'a, str> {
        let encoded: Cow<'a, str> = utf8_percent_encode(fragment, URI).into();
        match self {
            Self::Standard => encoded,
            Self::PreserveZwj if encoded.contains(ENCODED_ZWJ) => {
                Cow::Owned(encoded.replace(ENCODED_ZWJ, ZWJ))
            }
            Self::PreserveZwj => encoded,
        }
    }
}
