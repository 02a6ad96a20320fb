//! Validation, decomposition and parsing of enum and bitflag values.
//!
//! This crate checks raw integers and text against a closed table of named members:
//! 1. **Descriptor:** The immutable member table of one enum (names, values, metadata, width).
//! 2. **Engine:** Validity checks and flag decomposition by a one-pass bit cover.
//! 3. **Frontends:** Bound-checked casts, text parsing and formatting under a value policy.
//! 4. **Metadata:** Exact-value lookup of names, descriptions and tags.
//! 5. **Registry:** Descriptors loaded from providers such as a JSON catalog.
//! 6. **Typed Layer:** `declare_enum!` newtypes with a lazily built descriptor.

mod macros;

/// Common types (widths, values, policy, errors).
pub mod common;
/// Catalog configuration (parse options, enum definitions, loading).
pub mod config;
/// Enum descriptors and their builders.
pub mod descriptor;
/// Validity checks, bit cover and flag predicates.
pub mod engine;
/// Cast, parse and format.
pub mod frontend;
/// Exact-value metadata lookup.
pub mod metadata;
/// Descriptor providers and the process-wide registry.
pub mod registry;
/// The `EnumType` trait.
pub mod typed;

/// Failure kinds and the crate result type.
pub use crate::common::{EnumError, Result};
/// Value domain types.
pub use crate::common::{EnumValue, IntegerWidth, InvalidValuePolicy, NativeInteger};
/// Parse options and catalog loading.
pub use crate::config::{Catalog, ConfigError, ParseOptions};
/// Member tables.
pub use crate::descriptor::{Attribute, DescriptorBuilder, EnumDescriptor, Member};
/// Rendering styles.
pub use crate::frontend::FormatSpec;
/// Registry of descriptors.
pub use crate::registry::{DescriptorProvider, Registry};
/// Typed enum interface.
pub use crate::typed::EnumType;
