//! Underlying integer widths.
//!
//! Every enum stores its members in one primitive integer type. This module implements:
//! 1. **Width Classification:** The eight signed and unsigned storage domains.
//! 2. **Bounded Conversion:** A single overflow-checked conversion from any integer into a width.
//! 3. **Normalization:** Sign- or zero-extension of a native value into the shared 64-bit domain.
//!
//! All member comparisons happen on normalized `u64` bit patterns, so a signed `-1`
//! and an unsigned `u64::MAX` share the same raw value.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::error::{EnumError, Result};

/// Storage domain of an enum's members.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegerWidth {
    /// Signed 8-bit storage.
    I8,
    /// Signed 16-bit storage.
    I16,
    /// Signed 32-bit storage.
    #[default]
    I32,
    /// Signed 64-bit storage.
    I64,
    /// Unsigned 8-bit storage.
    U8,
    /// Unsigned 16-bit storage.
    U16,
    /// Unsigned 32-bit storage.
    U32,
    /// Unsigned 64-bit storage.
    U64,
}

impl IntegerWidth {
    /// Returns the number of bits in the storage type.
    pub const fn bits(self) -> u32 {
        match self {
            Self::I8 | Self::U8 => 8,
            Self::I16 | Self::U16 => 16,
            Self::I32 | Self::U32 => 32,
            Self::I64 | Self::U64 => 64,
        }
    }

    /// Returns true if the storage type is signed.
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
    }

    /// Returns the smallest value representable in the storage type.
    pub const fn min(self) -> i128 {
        match self {
            Self::I8 => i8::MIN as i128,
            Self::I16 => i16::MIN as i128,
            Self::I32 => i32::MIN as i128,
            Self::I64 => i64::MIN as i128,
            Self::U8 | Self::U16 | Self::U32 | Self::U64 => 0,
        }
    }

    /// Returns the largest value representable in the storage type.
    pub const fn max(self) -> i128 {
        match self {
            Self::I8 => i8::MAX as i128,
            Self::I16 => i16::MAX as i128,
            Self::I32 => i32::MAX as i128,
            Self::I64 => i64::MAX as i128,
            Self::U8 => u8::MAX as i128,
            Self::U16 => u16::MAX as i128,
            Self::U32 => u32::MAX as i128,
            Self::U64 => u64::MAX as i128,
        }
    }

    /// Returns a mask covering the native bits of the storage type.
    pub const fn mask(self) -> u64 {
        match self.bits() {
            64 => u64::MAX,
            bits => (1u64 << bits) - 1,
        }
    }

    /// Returns true if `value` fits the storage type.
    pub const fn contains(self, value: i128) -> bool {
        value >= self.min() && value <= self.max()
    }

    /// Converts an integer into the normalized 64-bit domain of this width.
    ///
    /// # Arguments
    ///
    /// * `value` - The integer to convert, widened losslessly to `i128`.
    ///
    /// # Returns
    ///
    /// The sign- or zero-extended bit pattern.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `value` does not fit the storage type.
    pub fn check(self, value: i128) -> Result<u64> {
        if !self.contains(value) {
            return Err(EnumError::out_of_range(value, self));
        }
        Ok(normalize(value))
    }

    /// Converts a normalized bit pattern back into the native integer value.
    pub const fn to_native(self, bits: u64) -> i128 {
        match self {
            Self::I8 => bits as i8 as i128,
            Self::I16 => bits as i16 as i128,
            Self::I32 => bits as i32 as i128,
            Self::I64 => bits as i64 as i128,
            Self::U8 => bits as u8 as i128,
            Self::U16 => bits as u16 as i128,
            Self::U32 => bits as u32 as i128,
            Self::U64 => bits as i128,
        }
    }

    /// Drops the sign extension of a normalized bit pattern, keeping the native bits.
    pub const fn truncate(self, bits: u64) -> u64 {
        bits & self.mask()
    }

    /// Returns the Rust name of the storage type.
    pub const fn name(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
        }
    }
}

impl fmt::Display for IntegerWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IntegerWidth {
    type Err = EnumError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "i8" => Ok(Self::I8),
            "i16" => Ok(Self::I16),
            "i32" => Ok(Self::I32),
            "i64" => Ok(Self::I64),
            "u8" => Ok(Self::U8),
            "u16" => Ok(Self::U16),
            "u32" => Ok(Self::U32),
            "u64" => Ok(Self::U64),
            _ => Err(EnumError::format_invalid("IntegerWidth", s)),
        }
    }
}

/// Maps an integer into the shared 64-bit domain without a width check.
///
/// Callers guarantee `value` lies in `i64::MIN..=u64::MAX`.
pub(crate) const fn normalize(value: i128) -> u64 {
    if value < 0 {
        value as i64 as u64
    } else {
        value as u64
    }
}

/// Primitive integer types usable as enum storage.
pub trait NativeInteger: Copy + Into<i128> + 'static {
    /// Storage width of the type.
    const WIDTH: IntegerWidth;

    /// Normalizes the value into the shared 64-bit domain.
    fn to_bits(self) -> u64;

    /// Narrows a normalized bit pattern back into the native type.
    fn from_bits(bits: u64) -> Self;
}

macro_rules! native_integer {
    ($($ty:ty => $wide:ty, $width:ident);* $(;)?) => {
        $(
            impl NativeInteger for $ty {
                const WIDTH: IntegerWidth = IntegerWidth::$width;

                #[inline]
                fn to_bits(self) -> u64 {
                    self as $wide as u64
                }

                #[inline]
                fn from_bits(bits: u64) -> Self {
                    bits as $ty
                }
            }
        )*
    };
}

native_integer! {
    i8 => i64, I8;
    i16 => i64, I16;
    i32 => i64, I32;
    i64 => i64, I64;
    u8 => u64, U8;
    u16 => u64, U16;
    u32 => u64, U32;
    u64 => u64, U64;
}
