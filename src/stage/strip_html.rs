use crate::{
    context::Context,
    stage::{Stage, StageError},
    unicode::is_js_line_terminator,
};
use memchr::{memchr, memchr_iter, memrchr_iter};
use std::borrow::Cow;
use std::ops::Range;

/// Fast pre-scan: if no '<' appears, text is guaranteed to have no tags
#[inline(always)]
fn contains_html_tag(text: &str) -> bool {
    memchr(b'<', text.as_bytes()).is_some()
}

/// A matched `<name>inner</name>` pair.
struct TagPair {
    whole: Range<usize>,
    inner: Range<usize>,
}

/// Find the first tag pair at or after `from`, resolved the way a greedy
/// backtracking `<(.*)>(.*)</\1>` would: leftmost `<`, then the longest
/// opening "name", then the last matching closing tag. Neither part may
/// cross a line break.
fn find_pair(text: &str, from: usize) -> Option<TagPair> {
    let bytes = text.as_bytes();
    for open in memchr_iter(b'<', &bytes[from..]).map(|i| from + i) {
        let line_end = text[open..]
            .find(is_js_line_terminator)
            .map_or(bytes.len(), |i| open + i);
        let line = &bytes[..line_end];
        for gt in memrchr_iter(b'>', &line[open + 1..]).map(|i| open + 1 + i) {
            let name = &text[open + 1..gt];
            let closing = format!("</{name}>");
            if let Some(close) = text[gt + 1..line_end].rfind(&closing) {
                let close = gt + 1 + close;
                return Some(TagPair {
                    whole: open..close + closing.len(),
                    inner: gt + 1..close,
                });
            }
        }
    }
    None
}

/// Replace every `<tag>inner</tag>` pair by its inner text.
///
/// This is not an HTML parser: attributes make the opening "name" differ from
/// the closing one, so `<a href="x">y</a>` is left as is, and nested or
/// repeated pairs resolve greedily (`<b>a</b> <b>c</b>` keeps
/// `a</b> <b>c`). Self-closing and unpaired tags are untouched here and lose
/// their brackets to the punctuation stage later.
pub struct StripHtml;

impl Stage for StripHtml {
    fn name(&self) -> &'static str {
        "strip_html"
    }

    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        if !contains_html_tag(text) {
            return Ok(false);
        }
        Ok(find_pair(text, 0).is_some())
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !contains_html_tag(&text) {
            return Ok(text);
        }
        let mut out = String::new();
        let mut last = 0;
        while let Some(pair) = find_pair(&text, last) {
            out.push_str(&text[last..pair.whole.start]);
            out.push_str(&text[pair.inner]);
            last = pair.whole.end;
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

    impl StageTestConfig for StripHtml {
        fn should_transform(_: Platform) -> &'static [(&'static str, &'static str)] {
            &[
                ("<b>bold</b> text", "bold text"),
                ("<em>a</em> and <i>c</i>", "a and c"),
                ("<b>a</b> <b>c</b>", "a</b> <b>c"),
                ("a <br> b", "a <br> b"),
                ("<a href=\"x\">y</a>", "<a href=\"x\">y</a>"),
                ("x < y > z", "x < y > z"),
            ]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(StripHtml);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inner_text() {
        let out = StripHtml
            .apply(Cow::Borrowed("a<i></i>b"), &Context::default())
            .unwrap();
        assert_eq!(out, "ab");
    }

    #[test]
    fn multibyte_names_and_content() {
        let out = StripHtml
            .apply(Cow::Borrowed("<名>中文</名>!"), &Context::default())
            .unwrap();
        assert_eq!(out, "中文!");
    }

    #[test]
    fn pairs_do_not_span_lines() {
        let input = "<b>a\n</b>";
        let out = StripHtml
            .apply(Cow::Borrowed(input), &Context::default())
            .unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn every_line_terminator_splits_pairs() {
        for input in ["<b>a\r</b>", "<b>a\u{2028}</b>", "<b>a\u{2029}</b>"] {
            let out = StripHtml
                .apply(Cow::Borrowed(input), &Context::default())
                .unwrap();
            assert_eq!(out, input, "{input:?}");
        }
        let out = StripHtml
            .apply(Cow::Borrowed("<b>a\u{85}</b>"), &Context::default())
            .unwrap();
        assert_eq!(out, "a\u{85}");
    }
}
