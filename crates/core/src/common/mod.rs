//! Common types shared by every part of the library.
//!
//! This module provides the fundamental building blocks used across the crate. It includes:
//! 1. **Error Handling:** The error taxonomy reported by every fallible operation.
//! 2. **Integer Widths:** The underlying storage domain of an enum and bounded conversion into it.
//! 3. **Policies:** Whether values outside the declared member table are accepted.
//! 4. **Values:** The normalized 64-bit raw value produced by parsing and casting.

/// Error types for validation, parsing and casting.
pub mod error;

/// Invalid-value policy definitions.
pub mod policy;

/// Value type definitions.
pub mod value;

/// Underlying integer widths and native integer conversions.
pub mod width;

pub use error::{EnumError, Result};
pub use policy::InvalidValuePolicy;
pub use value::EnumValue;
pub use width::{IntegerWidth, NativeInteger};
