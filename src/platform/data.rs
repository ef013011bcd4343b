use crate::{encode::UriEncoder, platform::PlatformEntry};

use paste::paste;
use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates the platform enum, its static rules and the key table
/// ---------------------------------------------------------------------------
macro_rules! define_platforms {
($(
        $variant:ident, $code_str:literal, $name:literal,
        removed: [ $($r:expr),* $(,)? ],
        cjk: $cjk:expr,
        separator: $sep:expr,
        prefix: $prefix:literal,
        encoder: $enc:expr
    );* $(;)?) => {
        /// Hosting platform whose anchor rules are emulated.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Platform {
            $( $variant ),*
        }

        // Per-platform static data
        paste! {
            $(
                static [<$variant:upper _ENTRY>]: PlatformEntry = PlatformEntry {
                    removed_chars: &[$($r),*],
                    strips_cjk_punctuation: $cjk,
                    repetition_separator: $sep,
                    prefix: $prefix,
                    encoder: $enc,
                };
            )*
        }

        impl Platform {
            pub const ALL: &'static [Platform] = &[$(Platform::$variant),*];

            /// Key used to select the platform, e.g. `github.com`.
            #[inline(always)]
            pub const fn code(self) -> &'static str {
                match self {
                    $( Platform::$variant => $code_str ),*
                }
            }

            #[inline(always)]
            pub const fn name(self) -> &'static str {
                match self {
                    $( Platform::$variant => $name ),*
                }
            }

            #[inline(always)]
            pub fn entry(self) -> &'static PlatformEntry {
                paste! {
                    match self {
                        $( Platform::$variant => &[<$variant:upper _ENTRY>] ),*
                    }
                }
            }
        }

        // Global key lookup table (public)
        pub static PLATFORM_TABLE: Map<&'static str, Platform> = phf_map! {
            $( $code_str => Platform::$variant ),*
        };
    };
}

// ---------------------------------------------------------------------------
//    Platform definitions (single source of truth)
//    GitHub and Bitbucket share the same removal set: Bitbucket ids are built
//    on top of the basic GitHub id.
// ---------------------------------------------------------------------------
define_platforms! {
    Github, "github.com", "GitHub",
    removed: [
        '/', '?', '!', ':', '[', ']', '`', '.', ',', '(', ')', '*', '"', '\'', ';',
        '{', '}', '+', '=', '<', '>', '~', '$', '|', '#', '@', '%', '^', '&',
        '¥', '–', '—',
    ],
    cjk: true,
    separator: Some('-'),
    prefix: "",
    encoder: UriEncoder::PreserveZwj;

    Bitbucket, "bitbucket.org", "Bitbucket",
    removed: [
        '/', '?', '!', ':', '[', ']', '`', '.', ',', '(', ')', '*', '"', '\'', ';',
        '{', '}', '+', '=', '<', '>', '~', '$', '|', '#', '@', '%', '^', '&',
        '¥', '–', '—',
    ],
    cjk: true,
    separator: Some('_'),
    prefix: "markdown-header-",
    encoder: UriEncoder::Standard;

    Gitlab, "gitlab.com", "GitLab",
    removed: [
        '/', '?', '!', ':', '[', ']', '`', '.', ',', '(', ')', '*', '"', '\'', ';',
        '{', '}', '+', '=', '<', '>', '~', '$', '|', '#', '@',
    ],
    cjk: true,
    separator: Some('-'),
    prefix: "",
    encoder: UriEncoder::Standard;

    // Node.js collapses everything outside [a-z0-9] itself, no removal set.
    Nodejs, "nodejs.org", "Node.js",
    removed: [],
    cjk: false,
    separator: Some('_'),
    prefix: "",
    encoder: UriEncoder::Standard;

    // `$` and `~` are substituted rather than removed.
    Ghost, "ghost.org", "Ghost",
    removed: [
        '/', '?', ':', '[', ']', '`', '.', ',', '(', ')', '*', '"', '\'', ';',
        '{', '}', '-', '+', '=', '<', '>', '!', '@', '#', '%', '^', '&', '\\', '|',
    ],
    cjk: false,
    separator: None,
    prefix: "",
    encoder: UriEncoder::Standard;
}
