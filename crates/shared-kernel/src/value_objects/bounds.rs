// crates/shared-kernel/src/value_objects/bounds.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use super::TextLength;

/// A minimum or maximum permissible length. `-1` means "no upper bound".
///
/// Values are kept verbatim, including negatives other than `-1`; a rule with such a bound
/// simply admits nothing (as a max) or everything (as a min).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LengthBound(i64);

impl LengthBound {
    pub const UNBOUNDED: Self = Self(-1);
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn is_unbounded(self) -> bool {
        self.0 == Self::UNBOUNDED.0
    }

    /// `length >= self`.
    #[inline]
    pub fn admits_as_min(self, length: TextLength) -> bool {
        length.as_i64() >= self.0
    }

    /// `length <= self`, or always when unbounded.
    #[inline]
    pub fn admits_as_max(self, length: TextLength) -> bool {
        self.is_unbounded() || length.as_i64() <= self.0
    }
}

impl Default for LengthBound {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for LengthBound {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl PartialEq<i64> for LengthBound {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for LengthBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
