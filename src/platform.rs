pub mod data;

use crate::{anchor::AnchorError, encode::UriEncoder};
use std::{fmt, str::FromStr};

pub use data::{PLATFORM_TABLE, Platform};

pub const DEFAULT_PLATFORM: Platform = Platform::Github;

/// Static, per-platform slug rules.
///
/// Every field is `'static` so a `PlatformEntry` is `Copy` and can be carried
/// by value inside [`crate::context::Context`].
#[derive(Clone, Copy, Debug)]
pub struct PlatformEntry {
    /// ASCII (and a few typographic) characters deleted from the slug.
    pub removed_chars: &'static [char],
    /// Whether the shared CJK punctuation set is deleted as well.
    pub strips_cjk_punctuation: bool,
    /// Separator placed before a repetition count. `None` means the platform
    /// never disambiguates duplicate headings.
    pub repetition_separator: Option<char>,
    /// Literal prepended to every fragment.
    pub prefix: &'static str,
    pub encoder: UriEncoder,
}

impl PlatformEntry {
    #[inline(always)]
    pub fn removes(&self, c: char) -> bool {
        self.removed_chars.contains(&c)
    }

    #[inline]
    pub fn supports_repetition(&self) -> bool {
        self.repetition_separator.is_some()
    }
}

impl Default for Platform {
    fn default() -> Self {
        DEFAULT_PLATFORM
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Platform {
    type Err = AnchorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PLATFORM_TABLE
            .get(s)
            .copied()
            .ok_or_else(|| AnchorError::UnsupportedMode(s.to_string()))
    }
}

impl Platform {
    /// URI encoder used for this platform's fragments.
    #[inline]
    pub fn encoder(self) -> UriEncoder {
        self.entry().encoder
    }
}
