//! Ready-made profiles, one per platform plus the heading normalizer.
//!
//! Stage order is significant. In particular GitHub appends the repetition
//! suffix *before* stripping emoji, and Bitbucket collapses hyphens *after*
//! adding its prefix.

use crate::{
    process::Process,
    profile::Profile,
    stage::{
        append_repetition::AppendRepetition,
        ascii_lower_case::AsciiLowerCase,
        collapse_runs::COLLAPSE_HYPHENS,
        decode_char_refs::DecodeNumericCharRefs,
        hyphenate_whitespace::HyphenateWhitespace,
        leading_letter::LeadingLetter,
        prefix::PlatformPrefix,
        remove_punctuation::{RemoveCjkPunctuation, RemovePunctuation},
        replace_char::{DOLLAR_TO_D, SPACE_TO_HYPHEN, STRIP_SPACES, TILDE_TO_T},
        strip_emoji::StripEmoji,
        strip_html::StripHtml,
        strip_markdown::StripMarkdown,
        strip_percent_escapes::StripPercentEscapes,
        trim::Trim,
        trim_char::{TRIM_HYPHEN_ONCE, TRIM_UNDERSCORES},
        underscore_non_alnum::UnderscoreNonAlnum,
    },
};

/// Trim + ASCII-only lowercase, applied to every heading before slugifying.
pub fn heading() -> Profile<impl Process> {
    Profile::builder("heading")
        .add_stage(Trim)
        .add_stage(AsciiLowerCase)
        .build()
}

/// The part of GitHub's algorithm Bitbucket builds on.
pub fn basic_github() -> Profile<impl Process> {
    Profile::builder("basic_github")
        .add_stage(DecodeNumericCharRefs)
        .add_stage(SPACE_TO_HYPHEN)
        .add_stage(StripPercentEscapes)
        .add_stage(RemovePunctuation)
        .add_stage(RemoveCjkPunctuation)
        .build()
}

pub fn github() -> Profile<impl Process> {
    Profile::builder("github")
        .add_stage(DecodeNumericCharRefs)
        .add_stage(SPACE_TO_HYPHEN)
        .add_stage(StripPercentEscapes)
        .add_stage(RemovePunctuation)
        .add_stage(RemoveCjkPunctuation)
        .add_stage(AppendRepetition)
        .add_stage(StripEmoji)
        .build()
}

pub fn bitbucket() -> Profile<impl Process> {
    Profile::builder("bitbucket")
        .add_stage(DecodeNumericCharRefs)
        .add_stage(SPACE_TO_HYPHEN)
        .add_stage(StripPercentEscapes)
        .add_stage(RemovePunctuation)
        .add_stage(RemoveCjkPunctuation)
        .add_stage(PlatformPrefix)
        .add_stage(COLLAPSE_HYPHENS)
        .add_stage(AppendRepetition)
        .build()
}

pub fn gitlab() -> Profile<impl Process> {
    Profile::builder("gitlab")
        .add_stage(StripHtml)
        .add_stage(StripMarkdown)
        .add_stage(HyphenateWhitespace)
        .add_stage(RemovePunctuation)
        .add_stage(RemoveCjkPunctuation)
        .add_stage(COLLAPSE_HYPHENS)
        .add_stage(TRIM_HYPHEN_ONCE)
        .add_stage(AppendRepetition)
        .build()
}

/// Expects module-qualified text (`<module>.<heading>`).
pub fn nodejs() -> Profile<impl Process> {
    Profile::builder("nodejs")
        .add_stage(UnderscoreNonAlnum)
        .add_stage(TRIM_UNDERSCORES)
        .add_stage(LeadingLetter)
        .add_stage(AppendRepetition)
        .build()
}

pub fn ghost() -> Profile<impl Process> {
    Profile::builder("ghost")
        .add_stage(STRIP_SPACES)
        .add_stage(RemovePunctuation)
        .add_stage(DOLLAR_TO_D)
        .add_stage(TILDE_TO_T)
        .build()
}
