// crates/shared-kernel/src/value_objects/counts.rs
use serde::{Deserialize, Serialize};

/// Length of a candidate string as measured by a counting policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextLength(usize);

impl TextLength {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    /// Signed view used when comparing against bounds; saturates at `i64::MAX`.
    #[inline]
    pub fn as_i64(self) -> i64 {
        i64::try_from(self.0).unwrap_or(i64::MAX)
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Default for TextLength {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<usize> for TextLength {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl PartialEq<usize> for TextLength {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl PartialEq<TextLength> for usize {
    fn eq(&self, other: &TextLength) -> bool {
        *self == other.0
    }
}

mod display {
    use std::fmt;

    use super::TextLength;

    impl fmt::Display for TextLength {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }
}
