//! Declared members and their metadata.

use serde::Deserialize;

use crate::common::EnumValue;

/// An open metadata tag attached to a member or to an enum type.
///
/// The `kind` identifies the tag; `data` carries its optional payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct Attribute {
    /// Tag identifier.
    pub kind: String,
    /// Optional payload.
    #[serde(default)]
    pub data: Option<String>,
}

impl Attribute {
    /// Creates a tag without a payload.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            data: None,
        }
    }

    /// Creates a tag carrying `data`.
    pub fn with_data(kind: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            data: Some(data.into()),
        }
    }
}

/// One declared constant of an enum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    pub(crate) name: String,
    pub(crate) bits: u64,
    pub(crate) description: Option<String>,
    pub(crate) attributes: Vec<Attribute>,
}

impl Member {
    /// Returns the declared name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the member's normalized value.
    pub const fn value(&self) -> EnumValue {
        EnumValue::from_bits(self.bits)
    }

    /// Returns the member's normalized bit pattern.
    pub const fn bits(&self) -> u64 {
        self.bits
    }

    /// Returns true if the member's value is zero.
    pub const fn is_zero(&self) -> bool {
        self.bits == 0
    }

    /// Returns the descriptive text, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the description, falling back to the name.
    pub fn text(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.name)
    }

    /// Returns every attached tag in declaration order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Returns the attached tags of one kind.
    pub fn attributes_of<'a>(&'a self, kind: &str) -> impl Iterator<Item = &'a Attribute> {
        self.attributes.iter().filter(move |a| a.kind == kind)
    }
}
