//! Validity and decomposition engine.
//!
//! Given a descriptor, this module determines:
//! 1. **Membership:** Whether a raw value equals some declared member (`is_defined`).
//! 2. **Validity:** Whether a raw value is legitimate for the enum (`is_valid`): exact
//!    membership for plain enums, full bit-cover decomposition for flags enums.
//! 3. **Decomposition:** Which declared flags compose a value (`extract_flags`).

/// The bit-cover pass.
pub mod cover;

/// Flag extraction and flag predicates.
pub mod flags;

pub use cover::{BitCover, cover};

use crate::common::{EnumError, EnumValue, Result};
use crate::descriptor::{EnumDescriptor, Member};

impl EnumDescriptor {
    /// Determines whether `value` is legitimate for this enum.
    ///
    /// For a plain enum the value must equal a declared member. For a flags enum it must
    /// be fully explained by the bit-cover pass; zero is valid only if a zero member is
    /// explicitly declared.
    pub fn is_valid(&self, value: EnumValue) -> bool {
        if !self.is_flags {
            return self.is_defined(value);
        }
        if value.is_zero() {
            return self.has_zero_member();
        }
        self.cover(value).is_complete()
    }

    /// Determines whether `value` equals a declared member exactly.
    ///
    /// Duplicate member values are irrelevant; existence is enough.
    pub fn is_defined(&self, value: EnumValue) -> bool {
        self.members.iter().any(|m| m.bits == value.bits())
    }

    /// Like [`is_valid`](Self::is_valid) for a primitive integer.
    ///
    /// The integer is normalized without a width check; integers outside the 64-bit
    /// domain are never valid.
    pub fn is_valid_integer<I: Into<i128>>(&self, value: I) -> bool {
        EnumValue::from_integer(value).is_some_and(|v| self.is_valid(v))
    }

    /// Like [`is_defined`](Self::is_defined) for a primitive integer.
    pub fn is_defined_integer<I: Into<i128>>(&self, value: I) -> bool {
        EnumValue::from_integer(value).is_some_and(|v| self.is_defined(v))
    }

    /// Runs the bit-cover pass of `value` over this enum's members.
    pub fn cover(&self, value: EnumValue) -> BitCover {
        cover(value.bits(), self.members.iter().map(Member::bits))
    }

    /// Fails unless `value` is valid.
    ///
    /// # Errors
    ///
    /// `NoSuchValue` if [`is_valid`](Self::is_valid) returns false.
    pub fn ensure_valid(&self, value: EnumValue) -> Result<()> {
        if self.is_valid(value) {
            Ok(())
        } else {
            Err(EnumError::no_such_value(&self.name, self.render(value)))
        }
    }

    /// Fails on the first invalid value of `values`.
    ///
    /// # Errors
    ///
    /// `NoSuchValue` naming the first invalid value.
    pub fn ensure_all_valid<I>(&self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = EnumValue>,
    {
        values.into_iter().try_for_each(|v| self.ensure_valid(v))
    }
}
