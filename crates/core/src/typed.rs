//! Typed enums.
//!
//! [`EnumType`] binds a Rust type to its descriptor so that every descriptor operation
//! can be called on typed values. Types are usually declared with
//! [`declare_enum!`](crate::declare_enum), which memoizes the descriptor in a `LazyLock`
//! built on first use.

use crate::common::{EnumValue, InvalidValuePolicy, NativeInteger, Result};
use crate::config::ParseOptions;
use crate::descriptor::EnumDescriptor;
use crate::frontend::FormatSpec;

/// A Rust type whose values are described by one [`EnumDescriptor`].
///
/// Implementors only supply the descriptor and the conversion to and from the
/// native storage; everything else is provided.
pub trait EnumType: Copy + Sized + 'static {
    /// Native storage type.
    type Native: NativeInteger;

    /// Returns the type's descriptor.
    fn descriptor() -> &'static EnumDescriptor;

    /// Returns the raw native value.
    fn to_native(self) -> Self::Native;

    /// Wraps a raw native value without validating it.
    fn from_native(native: Self::Native) -> Self;

    /// Returns the normalized value.
    fn to_value(self) -> EnumValue {
        EnumValue::from_bits(self.to_native().to_bits())
    }

    /// Wraps a normalized value without validating it.
    fn from_value(value: EnumValue) -> Self {
        Self::from_native(Self::Native::from_bits(value.bits()))
    }

    /// See [`EnumDescriptor::is_valid`].
    fn is_valid(self) -> bool {
        Self::descriptor().is_valid(self.to_value())
    }

    /// See [`EnumDescriptor::is_defined`].
    fn is_defined(self) -> bool {
        Self::descriptor().is_defined(self.to_value())
    }

    /// See [`EnumDescriptor::ensure_valid`].
    ///
    /// # Errors
    ///
    /// `NoSuchValue` if the value is not valid.
    fn ensure_valid(self) -> Result<()> {
        Self::descriptor().ensure_valid(self.to_value())
    }

    /// Fails on the first value of `values` that is not valid.
    ///
    /// # Errors
    ///
    /// `NoSuchValue` naming the first invalid value.
    fn ensure_all_valid<I>(values: I) -> Result<()>
    where
        I: IntoIterator<Item = Self>,
    {
        Self::descriptor().ensure_all_valid(values.into_iter().map(Self::to_value))
    }

    /// Returns every declared flag contained in the value.
    ///
    /// # Errors
    ///
    /// See [`EnumDescriptor::extract_flags`].
    fn extract_flags(self) -> Result<Vec<Self>> {
        Ok(Self::descriptor()
            .extract_flags(self.to_value())?
            .into_iter()
            .map(|m| Self::from_value(m.value()))
            .collect())
    }

    /// See [`EnumDescriptor::has_any_flags`].
    ///
    /// # Errors
    ///
    /// `UnsupportedOperation` on a plain enum, `NoSuchValue` for an invalid value.
    fn has_any_flags(self) -> Result<bool> {
        Self::descriptor().has_any_flags(self.to_value())
    }

    /// See [`EnumDescriptor::has_no_flags`].
    ///
    /// # Errors
    ///
    /// `UnsupportedOperation` on a plain enum, `NoSuchValue` for an invalid value.
    fn has_no_flags(self) -> Result<bool> {
        Self::descriptor().has_no_flags(self.to_value())
    }

    /// See [`EnumDescriptor::has_all_flags`].
    ///
    /// # Errors
    ///
    /// `UnsupportedOperation` on a plain enum, `NoSuchValue` for an invalid value.
    fn has_all_flags(self) -> Result<bool> {
        Self::descriptor().has_all_flags(self.to_value())
    }

    /// See [`EnumDescriptor::has_any_flags_of`].
    ///
    /// # Errors
    ///
    /// See [`EnumDescriptor::has_any_flags_of`].
    fn has_any_flags_of(self, flags: &[Self]) -> Result<bool> {
        Self::descriptor().has_any_flags_of(self.to_value(), &values_of(flags))
    }

    /// See [`EnumDescriptor::has_no_flags_of`].
    ///
    /// # Errors
    ///
    /// See [`EnumDescriptor::has_any_flags_of`].
    fn has_no_flags_of(self, flags: &[Self]) -> Result<bool> {
        Self::descriptor().has_no_flags_of(self.to_value(), &values_of(flags))
    }

    /// See [`EnumDescriptor::has_all_flags_of`].
    ///
    /// # Errors
    ///
    /// See [`EnumDescriptor::has_any_flags_of`].
    fn has_all_flags_of(self, flags: &[Self]) -> Result<bool> {
        Self::descriptor().has_all_flags_of(self.to_value(), &values_of(flags))
    }

    /// See [`EnumDescriptor::has_only_flags_of`].
    ///
    /// # Errors
    ///
    /// See [`EnumDescriptor::has_any_flags_of`].
    fn has_only_flags_of(self, flags: &[Self]) -> Result<bool> {
        Self::descriptor().has_only_flags_of(self.to_value(), &values_of(flags))
    }

    /// See [`EnumDescriptor::has_exactly_flags_of`].
    ///
    /// # Errors
    ///
    /// See [`EnumDescriptor::has_any_flags_of`].
    fn has_exactly_flags_of(self, flags: &[Self]) -> Result<bool> {
        Self::descriptor().has_exactly_flags_of(self.to_value(), &values_of(flags))
    }

    /// Parses with default options (case-sensitive, unknown integers rejected).
    ///
    /// # Errors
    ///
    /// See [`EnumDescriptor::parse`].
    fn parse(text: &str) -> Result<Self> {
        Self::parse_with(text, ParseOptions::default())
    }

    /// See [`EnumDescriptor::parse`].
    ///
    /// # Errors
    ///
    /// See [`EnumDescriptor::parse`].
    fn parse_with(text: &str, options: ParseOptions) -> Result<Self> {
        Self::descriptor()
            .parse(text, options)
            .map(Self::from_value)
    }

    /// See [`EnumDescriptor::try_parse`].
    ///
    /// # Errors
    ///
    /// Every kind except `NoSuchValue` and `FormatInvalid`.
    fn try_parse_with(text: &str, options: ParseOptions) -> Result<Option<Self>> {
        Ok(Self::descriptor()
            .try_parse(text, options)?
            .map(Self::from_value))
    }

    /// See [`EnumDescriptor::cast`].
    ///
    /// # Errors
    ///
    /// See [`EnumDescriptor::cast`].
    fn cast<I: Into<i128>>(value: I, policy: InvalidValuePolicy) -> Result<Self> {
        Self::descriptor()
            .cast(value, policy)
            .map(Self::from_value)
    }

    /// See [`EnumDescriptor::try_cast`].
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `value` does not fit the width.
    fn try_cast<I: Into<i128>>(value: I, policy: InvalidValuePolicy) -> Result<Option<Self>> {
        Ok(Self::descriptor()
            .try_cast(value, policy)?
            .map(Self::from_value))
    }

    /// See [`EnumDescriptor::get_name`].
    ///
    /// # Errors
    ///
    /// `NoSuchValue` if no member equals the value, `AmbiguousValue` if several do.
    fn name(self) -> Result<&'static str> {
        Self::descriptor().get_name(self.to_value())
    }

    /// See [`EnumDescriptor::get_description`].
    ///
    /// # Errors
    ///
    /// `NoSuchValue` if no member equals the value, `AmbiguousValue` if several do.
    fn description(self) -> Result<Option<&'static str>> {
        Self::descriptor().get_description(self.to_value())
    }

    /// See [`EnumDescriptor::get_text`].
    ///
    /// # Errors
    ///
    /// `NoSuchValue` if no member equals the value, `AmbiguousValue` if several do.
    fn text(self) -> Result<&'static str> {
        Self::descriptor().get_text(self.to_value())
    }

    /// See [`EnumDescriptor::format`].
    ///
    /// # Errors
    ///
    /// `NoSuchValue` if the value is not valid.
    fn format(self, spec: FormatSpec) -> Result<String> {
        Self::descriptor().format(self.to_value(), spec)
    }

    /// Returns every declared member in declaration order.
    fn values() -> Vec<Self> {
        Self::descriptor().values().map(Self::from_value).collect()
    }

    /// Returns every member name in declaration order.
    fn names() -> Vec<&'static str> {
        Self::descriptor().names().collect()
    }

    /// Returns the smallest non-zero member.
    fn min_value() -> Option<Self> {
        Self::descriptor()
            .min_member()
            .map(|m| Self::from_value(m.value()))
    }

    /// Returns the largest non-zero member.
    fn max_value() -> Option<Self> {
        Self::descriptor()
            .max_member()
            .map(|m| Self::from_value(m.value()))
    }

    /// Returns the union of every member.
    ///
    /// # Errors
    ///
    /// `UnsupportedOperation` on a plain enum.
    fn all_flags() -> Result<Self> {
        Self::descriptor().all_flags().map(Self::from_value)
    }
}

fn values_of<T: EnumType>(flags: &[T]) -> Vec<EnumValue> {
    flags.iter().map(|f| f.to_value()).collect()
}
