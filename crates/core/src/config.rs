//! Catalog configuration.
//!
//! This module defines the JSON catalog from which descriptors can be loaded at startup.
//! It provides:
//! 1. **Defaults:** Baseline parse options (case-sensitive, unknown values rejected).
//! 2. **Definitions:** Serde structures for enums, members and their tags.
//! 3. **Loading:** `Catalog::from_json` / `Catalog::from_path` and conversion into descriptors.
//!
//! A catalog is the descriptor provider used by the CLI; libraries embedding typed
//! enums use `declare_enum!` instead.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::{EnumError, IntegerWidth, InvalidValuePolicy};
use crate::descriptor::{Attribute, DescriptorBuilder, EnumDescriptor};
use crate::registry::DescriptorProvider;

/// Default parse options.
mod defaults {
    use crate::common::InvalidValuePolicy;

    /// Names are matched case-sensitively.
    pub const IGNORE_CASE: bool = false;

    /// Integers that are not valid are rejected.
    pub const POLICY: InvalidValuePolicy = InvalidValuePolicy::Disallow;
}

/// Failures while loading a catalog or populating a registry.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The catalog file could not be read.
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog is not well-formed JSON or does not match the schema.
    #[error("malformed catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// A member definition was rejected.
    #[error("member `{member}` of `{enum_name}`: {source}")]
    InvalidMember {
        /// Enum being built.
        enum_name: String,
        /// Offending member.
        member: String,
        /// Underlying failure.
        source: EnumError,
    },

    /// Any other enum failure.
    #[error(transparent)]
    Enum(#[from] EnumError),

    /// Two descriptors share a type name.
    #[error("enum `{0}` is registered more than once")]
    DuplicateType(String),

    /// No descriptor is registered under the requested name.
    #[error("no enum named `{0}` is registered")]
    UnknownType(String),

    /// A process-wide registry was already installed.
    #[error("a registry is already installed")]
    AlreadyInstalled,
}

/// Options governing [`EnumDescriptor::parse`].
///
/// # Examples
///
/// ```
/// use bitenum_core::{InvalidValuePolicy, ParseOptions};
///
/// let options: ParseOptions = serde_json::from_str(r#"{ "ignore_case": true }"#).unwrap();
/// assert!(options.ignore_case);
/// assert_eq!(options.policy, InvalidValuePolicy::Disallow);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ParseOptions {
    /// Match member names ignoring case.
    #[serde(default = "ParseOptions::default_ignore_case")]
    pub ignore_case: bool,

    /// Whether integers that are not valid may be synthesized.
    #[serde(default = "ParseOptions::default_policy")]
    pub policy: InvalidValuePolicy,
}

impl ParseOptions {
    /// Returns the default options.
    pub const fn new() -> Self {
        Self {
            ignore_case: defaults::IGNORE_CASE,
            policy: defaults::POLICY,
        }
    }

    /// Sets case sensitivity of name matching.
    #[must_use]
    pub const fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Sets the invalid-value policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: InvalidValuePolicy) -> Self {
        self.policy = policy;
        self
    }

    const fn default_ignore_case() -> bool {
        defaults::IGNORE_CASE
    }

    const fn default_policy() -> InvalidValuePolicy {
        defaults::POLICY
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// One declared member in a catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct MemberDefinition {
    /// Member name.
    pub name: String,
    /// Native integer value; must fit the enum's width.
    pub value: i128,
    /// Optional descriptive text.
    #[serde(default)]
    pub description: Option<String>,
    /// Attached tags.
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

/// One enum in a catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct EnumDefinition {
    /// Type name, unique within a registry.
    pub name: String,
    /// Whether members combine bitwise.
    #[serde(default)]
    pub flags: bool,
    /// Storage width (`"i8"` … `"u64"`), `"i32"` if omitted.
    #[serde(default)]
    pub width: IntegerWidth,
    /// Optional type-level description.
    #[serde(default)]
    pub description: Option<String>,
    /// Type-level tags.
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// Members in declaration order.
    pub members: Vec<MemberDefinition>,
}

impl EnumDefinition {
    /// Builds the descriptor, bound-checking every member value.
    ///
    /// # Errors
    ///
    /// `InvalidMember` naming the first member whose value does not fit the width.
    pub fn build(&self) -> Result<EnumDescriptor, ConfigError> {
        let mut builder = DescriptorBuilder::new(&self.name, self.width).flags(self.flags);
        if let Some(text) = &self.description {
            builder = builder.description(text);
        }
        for attribute in &self.attributes {
            builder = builder.attribute(attribute.clone());
        }
        for member in &self.members {
            builder = builder
                .member_with(
                    &member.name,
                    member.value,
                    member.description.clone(),
                    member.attributes.clone(),
                )
                .map_err(|source| ConfigError::InvalidMember {
                    enum_name: self.name.clone(),
                    member: member.name.clone(),
                    source,
                })?;
        }
        Ok(builder.build())
    }
}

/// A set of enum definitions plus default parse options.
///
/// # Examples
///
/// ```
/// use bitenum_core::config::Catalog;
///
/// let json = r#"{
///     "options": { "ignore_case": true },
///     "enums": [{
///         "name": "Access",
///         "flags": true,
///         "width": "u8",
///         "members": [
///             { "name": "None", "value": 0 },
///             { "name": "Read", "value": 1 },
///             { "name": "Write", "value": 2 }
///         ]
///     }]
/// }"#;
///
/// let catalog = Catalog::from_json(json).unwrap();
/// let access = catalog.enums[0].build().unwrap();
/// assert_eq!(access.parse("read, write", catalog.options).unwrap().bits(), 3);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    /// Parse options applied by front ends that use this catalog.
    #[serde(default)]
    pub options: ParseOptions,
    /// Enum definitions.
    #[serde(default)]
    pub enums: Vec<EnumDefinition>,
}

impl Catalog {
    /// Parses a catalog from JSON text.
    ///
    /// # Errors
    ///
    /// `Json` if the text is malformed.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a catalog file.
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, `Json` if it is malformed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let catalog = Self::from_json(&text)?;
        tracing::debug!(path = %path.display(), enums = catalog.enums.len(), "loaded catalog");
        Ok(catalog)
    }
}

impl DescriptorProvider for Catalog {
    fn descriptors(&self) -> Result<Vec<EnumDescriptor>, ConfigError> {
        self.enums.iter().map(EnumDefinition::build).collect()
    }
}
