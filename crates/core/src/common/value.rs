//! Normalized enum values.

use std::fmt;
use std::ops::{BitAnd, BitOr};

/// A raw enum value normalized into the unsigned 64-bit domain.
///
/// Values produced by parsing or casting under [`InvalidValuePolicy::Allow`](super::InvalidValuePolicy::Allow)
/// may lie outside the member table; the storage is just an integer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EnumValue(u64);

impl EnumValue {
    /// The all-zero value.
    pub const ZERO: Self = Self(0);

    /// Wraps an already normalized bit pattern.
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Normalizes any primitive integer without checking it against a storage width.
    ///
    /// Negative integers are sign-extended. Returns `None` outside `i64::MIN..=u64::MAX`.
    pub fn from_integer<I: Into<i128>>(value: I) -> Option<Self> {
        let value = value.into();
        (value >= i128::from(i64::MIN) && value <= i128::from(u64::MAX))
            .then(|| Self(super::width::normalize(value)))
    }

    /// Returns the normalized bit pattern.
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Returns true if no bits are set.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns true if every bit of `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl From<u64> for EnumValue {
    fn from(bits: u64) -> Self {
        Self(bits)
    }
}

impl BitOr for EnumValue {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for EnumValue {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
