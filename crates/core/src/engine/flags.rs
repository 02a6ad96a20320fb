//! Flag extraction and flag predicates.
//!
//! Every operation here requires a flags enum and a valid value. Extraction returns
//! all declared members whose bits are contained in the value, combination members
//! included, in declaration order.

use crate::common::{EnumError, EnumValue, Result};
use crate::descriptor::{EnumDescriptor, Member};

impl EnumDescriptor {
    /// Returns every non-zero member whose bits are all set in `value`.
    ///
    /// A zero value yields no members.
    ///
    /// # Errors
    ///
    /// * `UnsupportedOperation` if the enum is not a flags type.
    /// * `NoSuchValue` if `value` is not valid.
    pub fn extract_flags(&self, value: EnumValue) -> Result<Vec<&Member>> {
        self.require_flags()?;
        self.ensure_valid(value)?;
        if value.is_zero() {
            return Ok(Vec::new());
        }
        Ok(self
            .members
            .iter()
            .filter(|m| !m.is_zero() && value.contains(m.value()))
            .collect())
    }

    /// Returns true if any bit is set.
    ///
    /// # Errors
    ///
    /// `UnsupportedOperation` on a plain enum, `NoSuchValue` for an invalid value.
    pub fn has_any_flags(&self, value: EnumValue) -> Result<bool> {
        self.check_operand(value)?;
        Ok(!value.is_zero())
    }

    /// Returns true if no bit is set.
    ///
    /// # Errors
    ///
    /// `UnsupportedOperation` on a plain enum, `NoSuchValue` for an invalid value.
    pub fn has_no_flags(&self, value: EnumValue) -> Result<bool> {
        self.check_operand(value)?;
        Ok(value.is_zero())
    }

    /// Returns true if every bit of every member is set.
    ///
    /// # Errors
    ///
    /// `UnsupportedOperation` on a plain enum, `NoSuchValue` for an invalid value.
    pub fn has_all_flags(&self, value: EnumValue) -> Result<bool> {
        self.check_operand(value)?;
        let mask = self.summary.all_flags;
        Ok(value.bits() & mask == mask)
    }

    /// Returns true if any of `flags` is set in `value`.
    ///
    /// # Errors
    ///
    /// `UnsupportedOperation` on a plain enum, `NullInput` for an empty `flags`,
    /// `NoSuchValue` if `value` or any flag is invalid.
    pub fn has_any_flags_of(&self, value: EnumValue, flags: &[EnumValue]) -> Result<bool> {
        let mask = self.flag_mask(value, flags)?;
        Ok(value.bits() & mask != 0)
    }

    /// Returns true if none of `flags` is set in `value`.
    ///
    /// # Errors
    ///
    /// Same as [`has_any_flags_of`](Self::has_any_flags_of).
    pub fn has_no_flags_of(&self, value: EnumValue, flags: &[EnumValue]) -> Result<bool> {
        let mask = self.flag_mask(value, flags)?;
        Ok(value.bits() & mask == 0)
    }

    /// Returns true if all of `flags` are set in `value`.
    ///
    /// # Errors
    ///
    /// Same as [`has_any_flags_of`](Self::has_any_flags_of).
    pub fn has_all_flags_of(&self, value: EnumValue, flags: &[EnumValue]) -> Result<bool> {
        let mask = self.flag_mask(value, flags)?;
        Ok(value.bits() & mask == mask)
    }

    /// Returns true if `value` sets no bit outside `flags`.
    ///
    /// Not every flag has to be set. A zero value matches only an all-zero mask.
    ///
    /// # Errors
    ///
    /// Same as [`has_any_flags_of`](Self::has_any_flags_of).
    pub fn has_only_flags_of(&self, value: EnumValue, flags: &[EnumValue]) -> Result<bool> {
        let mask = self.flag_mask(value, flags)?;
        let bits = value.bits();
        if bits == 0 {
            return Ok(mask == 0);
        }
        Ok(bits & !mask == 0)
    }

    /// Returns true if `value` sets exactly the bits of `flags`.
    ///
    /// A zero value never matches.
    ///
    /// # Errors
    ///
    /// Same as [`has_any_flags_of`](Self::has_any_flags_of).
    pub fn has_exactly_flags_of(&self, value: EnumValue, flags: &[EnumValue]) -> Result<bool> {
        let mask = self.flag_mask(value, flags)?;
        let bits = value.bits();
        Ok(bits != 0 && bits & mask == mask && bits & !mask == 0)
    }

    fn check_operand(&self, value: EnumValue) -> Result<()> {
        self.require_flags()?;
        self.ensure_valid(value)
    }

    fn flag_mask(&self, value: EnumValue, flags: &[EnumValue]) -> Result<u64> {
        self.check_operand(value)?;
        if flags.is_empty() {
            return Err(EnumError::NullInput("flags"));
        }
        flags.iter().try_fold(0u64, |mask, &flag| {
            self.ensure_valid(flag)?;
            Ok(mask | flag.bits())
        })
    }
}
