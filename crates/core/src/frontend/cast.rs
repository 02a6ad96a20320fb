//! Integer casts.

use crate::common::error::found;
use crate::common::{EnumError, EnumValue, InvalidValuePolicy, Result};
use crate::descriptor::EnumDescriptor;

impl EnumDescriptor {
    /// Converts a primitive integer into a value of this enum.
    ///
    /// # Arguments
    ///
    /// * `value` - Any primitive integer; it is checked against the storage width before
    ///   any member lookup.
    /// * `policy` - Whether values that are not valid may be synthesized.
    ///
    /// # Returns
    ///
    /// The normalized value.
    ///
    /// # Errors
    ///
    /// * `OutOfRange` if `value` does not fit the width, under either policy.
    /// * `NoSuchValue` if the value is not valid and `policy` is `Disallow`.
    pub fn cast<I: Into<i128>>(&self, value: I, policy: InvalidValuePolicy) -> Result<EnumValue> {
        let bits = self.width.check(value.into())?;
        self.admit(EnumValue::from_bits(bits), policy)
    }

    /// Like [`cast`](Self::cast), but a value rejected by the policy yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// `OutOfRange` is still returned.
    pub fn try_cast<I: Into<i128>>(
        &self,
        value: I,
        policy: InvalidValuePolicy,
    ) -> Result<Option<EnumValue>> {
        found(self.cast(value, policy))
    }

    /// Applies the invalid-value policy to an in-range value.
    pub(crate) fn admit(&self, value: EnumValue, policy: InvalidValuePolicy) -> Result<EnumValue> {
        if policy.allows_unknown() || self.is_valid(value) {
            Ok(value)
        } else {
            Err(EnumError::no_such_value(&self.name, self.render(value)))
        }
    }
}
