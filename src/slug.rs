//! Per-platform slug functions.
//!
//! Each function runs the raw slugifier only: callers that start from a
//! heading as written should normalize it first (see
//! [`crate::stage::ascii_lower_case::ascii_only_to_lower_case`]), which is
//! what [`crate::anchor::url_hash`] does.

use crate::{
    context::Context,
    platform::Platform,
    process::Process,
    profile::{Profile, ProfileError, preset},
    repetition::Repetition,
};
use std::borrow::Cow;

fn run<P: Process>(
    profile: Profile<P>,
    platform: Platform,
    text: &str,
    repetition: Repetition,
) -> Result<String, ProfileError> {
    let ctx = Context::new(platform).with_repetition(repetition);
    profile
        .run(Cow::Borrowed(text), &ctx)
        .map(Cow::into_owned)
}

/// GitHub's id without repetition suffix or emoji stripping.
pub fn basic_github_id(text: &str) -> Result<String, ProfileError> {
    run(
        preset::basic_github(),
        Platform::Github,
        text,
        Repetition::NONE,
    )
}

pub fn github_id(text: &str, repetition: impl Into<Repetition>) -> Result<String, ProfileError> {
    run(preset::github(), Platform::Github, text, repetition.into())
}

pub fn bitbucket_id(text: &str, repetition: impl Into<Repetition>) -> Result<String, ProfileError> {
    run(
        preset::bitbucket(),
        Platform::Bitbucket,
        text,
        repetition.into(),
    )
}

pub fn gitlab_id(text: &str, repetition: impl Into<Repetition>) -> Result<String, ProfileError> {
    run(preset::gitlab(), Platform::Gitlab, text, repetition.into())
}

/// `text` must already carry the module namespace, e.g. `fs.readfile`.
pub fn nodejs_id(text: &str, repetition: impl Into<Repetition>) -> Result<String, ProfileError> {
    run(preset::nodejs(), Platform::Nodejs, text, repetition.into())
}

/// Ghost has no duplicate-heading suffix.
pub fn ghost_id(text: &str) -> Result<String, ProfileError> {
    run(preset::ghost(), Platform::Ghost, text, Repetition::NONE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn github_examples() {
        assert_eq!(github_id("hello, world!", 0u32).unwrap(), "hello-world");
        assert_eq!(github_id("hello world", 1u32).unwrap(), "hello-world-1");
        assert_eq!(github_id("a -- b", None::<u32>).unwrap(), "a----b");
        assert_eq!(github_id("😄 emoji", 0u32).unwrap(), "-emoji");
        assert_eq!(github_id("中文。標題", 0u32).unwrap(), "中文標題");
        assert_eq!(github_id("100% sure", 0u32).unwrap(), "100-sure");
        assert_eq!(github_id("&#60;tag&#62;", 0u32).unwrap(), "tag");
    }

    #[test]
    fn github_percent_escape_before_punctuation() {
        // `%20` vanishes as an escape, the lone `%` as punctuation.
        assert_eq!(github_id("a%20b %", 0u32).unwrap(), "ab-");
    }

    #[test]
    fn github_suffix_survives_emoji_stripping() {
        assert_eq!(github_id("party 🎉", 2u32).unwrap(), "party--2");
    }

    #[test]
    fn basic_github_keeps_emoji() {
        assert_eq!(basic_github_id("hi 👋").unwrap(), "hi-👋");
    }

    #[test]
    fn bitbucket_examples() {
        assert_eq!(
            bitbucket_id("hello world", 0u32).unwrap(),
            "markdown-header-hello-world"
        );
        assert_eq!(
            bitbucket_id("a -- b", 0u32).unwrap(),
            "markdown-header-a-b"
        );
        assert_eq!(
            bitbucket_id("hello world", 3u32).unwrap(),
            "markdown-header-hello-world_3"
        );
    }

    #[test]
    fn gitlab_examples() {
        assert_eq!(gitlab_id("hello   world", 0u32).unwrap(), "hello-world");
        assert_eq!(gitlab_id(" -hello- ", 0u32).unwrap(), "hello");
        assert_eq!(
            gitlab_id("<b>bold</b> [link](http://x.io) ![i](p.png)", 0u32).unwrap(),
            "bold-link"
        );
        assert_eq!(gitlab_id("100% & more", 1u32).unwrap(), "100%-&-more-1");
    }

    #[test]
    fn nodejs_examples() {
        assert_eq!(
            nodejs_id("domain.my heading", 0u32).unwrap(),
            "domain_my_heading"
        );
        assert_eq!(
            nodejs_id("fs.fs.readfile(file, [options], callback)", 0u32).unwrap(),
            "fs_fs_readfile_file_options_callback"
        );
        assert_eq!(
            nodejs_id("domain.example", 1u32).unwrap(),
            "domain_example_1"
        );
        assert_eq!(nodejs_id("1.intro", 0u32).unwrap(), "_1_intro");
        assert_eq!(nodejs_id("", 0u32).unwrap(), "");
    }

    #[test]
    fn ghost_examples() {
        assert_eq!(ghost_id("c++ & friends").unwrap(), "cfriends");
        assert_eq!(ghost_id("cost $5 ~ now").unwrap(), "costd5tnow");
        assert_eq!(ghost_id("a-b\\c").unwrap(), "abc");
    }
}
