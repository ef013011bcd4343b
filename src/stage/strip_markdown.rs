use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use memchr::memchr;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// `.` with ECMAScript semantics: anything but `\n`, `\r`, U+2028 and U+2029.
const ANY: &str = r"[^\n\r\x{2028}\x{2029}]";

static IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"!\[{ANY}*\]\({ANY}*\)")).expect("image pattern is a valid regex")
});
static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\[({ANY}*)\]\({ANY}*\)")).expect("link pattern is a valid regex")
});

/// Fast pre-scan: no `[` means no image and no link.
#[inline(always)]
fn contains_bracket(text: &str) -> bool {
    memchr(b'[', text.as_bytes()).is_some()
}

/// Drop inline markdown images and unwrap a link to its label.
///
/// Both patterns are greedy, so `![a](b) text (c)` loses everything up to the
/// last `)`. Only the **first** link is unwrapped; a heading with two links
/// keeps the second one verbatim (its brackets are removed later by the
/// punctuation stage, leaving the url text in the slug).
pub struct StripMarkdown;

impl Stage for StripMarkdown {
    fn name(&self) -> &'static str {
        "strip_markdown"
    }

    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        if !contains_bracket(text) {
            return Ok(false);
        }
        // An image is always removed; a link always loses at least `[`, `]`, `(`, `)`.
        Ok(IMAGE.is_match(text) || LINK.is_match(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !contains_bracket(&text) {
            return Ok(text);
        }
        let without_images = match IMAGE.replace_all(&text, "") {
            Cow::Borrowed(_) => None,
            Cow::Owned(s) => Some(s),
        };
        let text = without_images.map_or(text, Cow::Owned);
        let unwrapped = match LINK.replace(&text, "$1") {
            Cow::Borrowed(_) => None,
            Cow::Owned(s) => Some(s),
        };
        Ok(unwrapped.map_or(text, Cow::Owned))
    }
}
