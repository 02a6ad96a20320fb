//! Conversion frontends.
//!
//! This module turns outside representations into validated [`EnumValue`](crate::common::EnumValue)s
//! and back:
//! 1. **Cast:** Primitive integers, bound-checked against the storage width first.
//! 2. **Parse:** Text holding either an integer or comma-separated member names.
//! 3. **Format:** Values rendered as names, decimal or hexadecimal text.
//!
//! Both inbound paths share one admission rule: under
//! [`InvalidValuePolicy::Disallow`](crate::common::InvalidValuePolicy::Disallow) the value must
//! be valid, under `Allow` anything inside the width passes.

/// Integer casts.
pub mod cast;

/// Value rendering.
pub mod format;

/// Text parsing.
pub mod parse;

pub use format::FormatSpec;
