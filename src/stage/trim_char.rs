use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// How much of the separator is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimMode {
    /// The leading run, or the trailing run when the text has no leading one.
    /// Never both.
    FirstRun,
    /// At most one occurrence at each end.
    OncePerEnd,
}

/// Strip a separator character from the ends of the slug.
#[derive(Debug, Clone, Copy)]
pub struct TrimChar {
    pub ch: char,
    pub mode: TrimMode,
}

/// Node.js: `__foo_` → `foo_`, `foo__` → `foo`.
pub const TRIM_UNDERSCORES: TrimChar = TrimChar {
    ch: '_',
    mode: TrimMode::FirstRun,
};

/// GitLab: one leading and one trailing hyphen.
pub const TRIM_HYPHEN_ONCE: TrimChar = TrimChar {
    ch: '-',
    mode: TrimMode::OncePerEnd,
};

impl TrimChar {
    fn trimmed<'s>(&self, text: &'s str) -> &'s str {
        match self.mode {
            TrimMode::FirstRun if text.starts_with(self.ch) => text.trim_start_matches(self.ch),
            TrimMode::FirstRun => text.trim_end_matches(self.ch),
            TrimMode::OncePerEnd => {
                let text = text.strip_prefix(self.ch).unwrap_or(text);
                text.strip_suffix(self.ch).unwrap_or(text)
            }
        }
    }
}

impl Stage for TrimChar {
    fn name(&self) -> &'static str {
        "trim_char"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _: &Context) -> Result<bool, StageError> {
        Ok(text.starts_with(self.ch) || text.ends_with(self.ch))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(match text {
            Cow::Borrowed(s) => Cow::Borrowed(self.trimmed(s)),
            Cow::Owned(s) => {
                let trimmed = self.trimmed(&s);
                if trimmed.len() == s.len() {
                    Cow::Owned(s)
                } else {
                    Cow::Owned(trimmed.to_string())
                }
            }
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn run(stage: TrimChar, input: &str) -> String {
        stage
            .apply(Cow::Borrowed(input), &Context::default())
            .unwrap()
            .into_owned()
    }

    #[test]
    fn underscores_trim_only_the_first_run() {
        assert_eq!(run(TRIM_UNDERSCORES, "__a_b__"), "a_b__");
        assert_eq!(run(TRIM_UNDERSCORES, "a_b__"), "a_b");
        assert_eq!(run(TRIM_UNDERSCORES, "__a_b"), "a_b");
        assert_eq!(run(TRIM_UNDERSCORES, "___"), "");
    }

    #[test]
    fn owned_input_keeps_trailing_run_after_leading_trim() {
        let out = TRIM_UNDERSCORES
            .apply(Cow::Owned("_x_".to_string()), &Context::default())
            .unwrap();
        assert_eq!(out, "x_");
    }

    #[test]
    fn hyphen_trimmed_once_per_end() {
        assert_eq!(run(TRIM_HYPHEN_ONCE, "--a--"), "-a-");
        assert_eq!(run(TRIM_HYPHEN_ONCE, "-"), "");
    }
}
