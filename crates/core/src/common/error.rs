//! Error definitions.
//!
//! This module defines the failures reported by the library. It provides:
//! 1. **Usage Errors:** Missing or blank input, invalid policies and unsupported operations.
//! 2. **Range Errors:** Integers that do not fit the underlying storage width.
//! 3. **Resolution Errors:** Values or names that match no member, or more than one.
//!
//! The `try_*` operations turn [`EnumError::NoSuchValue`] and [`EnumError::FormatInvalid`]
//! into an empty result; every other kind is caller misuse and is always returned.

use std::fmt::Display;

use super::width::IntegerWidth;

/// Result type used throughout the crate.
pub type Result<T, E = EnumError> = std::result::Result<T, E>;

/// Failure kinds reported by descriptor lookups, parsing and casting.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EnumError {
    /// A required argument was absent.
    ///
    /// The associated value names the argument.
    #[error("required argument `{0}` is missing")]
    NullInput(&'static str),

    /// A string argument was present but empty or whitespace only.
    #[error("input must not be blank")]
    BlankInput,

    /// The invalid-value policy itself was outside its own range.
    ///
    /// The associated value is the rejected policy representation.
    #[error("`{0}` is not a valid value policy")]
    InvalidPolicy(String),

    /// An integer exceeded the underlying storage width before any member lookup.
    #[error("{value} exceeds the bounds of the underlying {width} type")]
    OutOfRange {
        /// Textual form of the rejected integer.
        value: String,
        /// Storage width of the enum.
        width: IntegerWidth,
    },

    /// The value does not resolve to any declared member and the policy forbids synthesis.
    #[error("{input} is not a valid value of `{type_name}`")]
    NoSuchValue {
        /// Name of the enum type.
        type_name: String,
        /// The rejected value or text.
        input: String,
    },

    /// The value or name resolves to more than one member where exactly one was required.
    #[error("{input} resolves to more than one member of `{type_name}`")]
    AmbiguousValue {
        /// Name of the enum type.
        type_name: String,
        /// The ambiguous value or text.
        input: String,
    },

    /// The operation does not apply to this kind of enum.
    #[error("`{type_name}`: {operation}")]
    UnsupportedOperation {
        /// Name of the enum type.
        type_name: String,
        /// Description of the unsupported request.
        operation: &'static str,
    },

    /// The text matched neither the integer grammar nor any declared member name.
    #[error("`{input}` matches neither an integer nor a member name of `{type_name}`")]
    FormatInvalid {
        /// Name of the enum type.
        type_name: String,
        /// The rejected text.
        input: String,
    },
}

impl EnumError {
    /// Returns true for the "value not found" kinds that `try_*` operations swallow.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NoSuchValue { .. } | Self::FormatInvalid { .. })
    }

    pub(crate) fn out_of_range(value: impl Display, width: IntegerWidth) -> Self {
        Self::OutOfRange {
            value: value.to_string(),
            width,
        }
    }

    pub(crate) fn no_such_value(type_name: &str, input: impl Display) -> Self {
        Self::NoSuchValue {
            type_name: type_name.to_owned(),
            input: input.to_string(),
        }
    }

    pub(crate) fn ambiguous(type_name: &str, input: impl Display) -> Self {
        Self::AmbiguousValue {
            type_name: type_name.to_owned(),
            input: input.to_string(),
        }
    }

    pub(crate) fn unsupported(type_name: &str, operation: &'static str) -> Self {
        Self::UnsupportedOperation {
            type_name: type_name.to_owned(),
            operation,
        }
    }

    pub(crate) fn format_invalid(type_name: &str, input: &str) -> Self {
        Self::FormatInvalid {
            type_name: type_name.to_owned(),
            input: input.to_owned(),
        }
    }
}

/// Converts a "not found" failure into `Ok(None)` and passes every other outcome through.
pub(crate) fn found<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_not_found() => Ok(None),
        Err(err) => Err(err),
    }
}
