use regex::Regex;
use std::sync::LazyLock;

pub const ZERO_WIDTH_JOINER: char = '\u{200D}';

/// Full-width and CJK punctuation removed by GitHub, Bitbucket and GitLab.
///
/// The plain ASCII space is part of the upstream set; it never survives to
/// this point because every platform that uses the set has already turned
/// spaces into hyphens.
pub static CJK_PUNCTUATION: &[char] = &[
    '。', '？', '！', '，', '、', '；', '：', '“', '”', '【', '】', '（', '）', '〔', '〕',
    '［', '］', '﹃', '﹄', ' ', '‘', '’', '﹁', '﹂', '—', '…', '－', '～', '《', '》',
    '〈', '〉', '「', '」',
];

#[inline(always)]
pub fn is_cjk_punctuation(c: char) -> bool {
    // Everything in the set except the space sits at or above U+2014.
    if (c as u32) < 0x2014 && c != ' ' {
        return false;
    }
    CJK_PUNCTUATION.contains(&c)
}

/// Whitespace as seen by ECMAScript `\s` and `String.prototype.trim`:
/// the WhiteSpace and LineTerminator productions. Unlike
/// [`char::is_whitespace`] this excludes U+0085 and includes the BOM.
#[inline(always)]
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

/// Characters ECMAScript `.` refuses to match.
#[inline(always)]
pub fn is_js_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// One emoji "grapheme": keycaps, regional-indicator flags, and pictographs
/// with their presentation selectors, skin tones, tag sequences and ZWJ
/// chains. Bare digits, `#` and `*` only match as part of a keycap.
const EMOJI_PATTERN: &str = concat!(
    r"[0-9#*]\x{FE0F}?\x{20E3}",
    r"|[\x{1F1E6}-\x{1F1FF}]{2}",
    r"|[\p{Extended_Pictographic}\p{Emoji_Presentation}]",
    r"(?:\x{FE0F}|\p{Emoji_Modifier}|[\x{E0020}-\x{E007F}])*",
    r"(?:\x{200D}[\p{Extended_Pictographic}\p{Emoji_Presentation}]",
    r"(?:\x{FE0F}|\p{Emoji_Modifier})*)*",
);

pub static EMOJI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMOJI_PATTERN).expect("emoji pattern is a valid regex"));
