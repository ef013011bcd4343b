use crate::anchor::AnchorError;
use std::{fmt, str::FromStr};

/// Disambiguator for headings that slugify to the same fragment.
///
/// `0` and "absent" are the same thing: no suffix is appended. Callers that
/// hold the count as text (`"2"`, `""`) go through [`FromStr`], which is the
/// single place where the two representations are reconciled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Repetition(u64);

impl Repetition {
    pub const NONE: Repetition = Repetition(0);

    #[inline(always)]
    pub const fn new(count: u64) -> Self {
        Self(count)
    }

    #[inline(always)]
    pub const fn count(self) -> u64 {
        self.0
    }

    /// `true` when a suffix must be appended.
    #[inline(always)]
    pub const fn is_set(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for Repetition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Repetition {
    type Err = AnchorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::NONE);
        }
        trimmed
            .parse::<u64>()
            .map(Self)
            .map_err(|_| AnchorError::InvalidRepetition(s.to_string()))
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Repetition {
                #[inline(always)]
                fn from(count: $t) -> Self {
                    Self(count as u64)
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, usize);

/// Signed counts, so unsuffixed literals (`1`, which default to `i32`) work.
/// A negative count means no suffix.
macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Repetition {
                #[inline(always)]
                fn from(count: $t) -> Self {
                    u64::try_from(count).map_or(Self::NONE, Self)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);

impl<T: Into<Repetition>> From<Option<T>> for Repetition {
    #[inline]
    fn from(count: Option<T>) -> Self {
        count.map_or(Self::NONE, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_absent_are_unset() {
        assert!(!Repetition::from(0u32).is_set());
        assert!(!Repetition::from(None::<u32>).is_set());
        assert!(!Repetition::default().is_set());
        assert!(Repetition::from(Some(3usize)).is_set());
    }

    #[test]
    fn signed_counts_clamp_negatives_to_unset() {
        assert_eq!(Repetition::from(3), Repetition::new(3));
        assert_eq!(Repetition::from(-1i64), Repetition::NONE);
        assert_eq!(Repetition::from(Some(2i32)), Repetition::new(2));
        assert!(!Repetition::from(0isize).is_set());
    }

    #[test]
    fn numeric_strings_normalize() {
        assert_eq!("2".parse::<Repetition>().unwrap(), Repetition::new(2));
        assert_eq!(" 7 ".parse::<Repetition>().unwrap(), Repetition::new(7));
        assert_eq!("".parse::<Repetition>().unwrap(), Repetition::NONE);
        assert_eq!("0".parse::<Repetition>().unwrap(), Repetition::NONE);
    }

    #[test]
    fn non_numeric_strings_are_rejected() {
        for bad in ["abc", "-1", "1.5", "0x2"] {
            assert!(
                matches!(bad.parse::<Repetition>(), Err(AnchorError::InvalidRepetition(s)) if s == bad),
                "{bad}"
            );
        }
    }

    #[test]
    fn displays_as_plain_number() {
        assert_eq!(Repetition::new(12).to_string(), "12");
    }
}
