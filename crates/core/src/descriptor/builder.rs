//! Descriptor construction.
//!
//! Two builders produce an [`EnumDescriptor`]:
//! 1. **`DescriptorBuilder`:** Dynamic widths; every member value is bound-checked.
//! 2. **`NativeBuilder`:** Widths fixed by a primitive type; infallible, used by `declare_enum!`.

use std::marker::PhantomData;

use super::member::{Attribute, Member};
use super::{EnumDescriptor, Summary};
use crate::common::{IntegerWidth, NativeInteger, Result};

/// Builds a descriptor whose width is chosen at runtime.
#[derive(Clone, Debug)]
pub struct DescriptorBuilder {
    name: String,
    width: IntegerWidth,
    is_flags: bool,
    description: Option<String>,
    attributes: Vec<Attribute>,
    members: Vec<Member>,
}

impl DescriptorBuilder {
    /// Starts a non-flags descriptor named `name` stored in `width`.
    pub fn new(name: impl Into<String>, width: IntegerWidth) -> Self {
        Self {
            name: name.into(),
            width,
            is_flags: false,
            description: None,
            attributes: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Marks the enum as a flags type.
    #[must_use]
    pub const fn flags(mut self, is_flags: bool) -> Self {
        self.is_flags = is_flags;
        self
    }

    /// Sets the type-level description.
    #[must_use]
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Attaches a type-level tag.
    #[must_use]
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Declares a member without metadata.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `value` does not fit the descriptor's width.
    pub fn member<I: Into<i128>>(self, name: impl Into<String>, value: I) -> Result<Self> {
        self.member_with(name, value, None, Vec::new())
    }

    /// Declares a member with a description and tags.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `value` does not fit the descriptor's width.
    pub fn member_with<I: Into<i128>>(
        mut self,
        name: impl Into<String>,
        value: I,
        description: Option<String>,
        attributes: Vec<Attribute>,
    ) -> Result<Self> {
        let bits = self.width.check(value.into())?;
        self.members.push(Member {
            name: name.into(),
            bits,
            description,
            attributes,
        });
        Ok(self)
    }

    /// Freezes the member table.
    pub fn build(self) -> EnumDescriptor {
        let summary = Summary::compute(self.width, &self.members);
        let descriptor = EnumDescriptor {
            name: self.name,
            is_flags: self.is_flags,
            width: self.width,
            members: self.members,
            description: self.description,
            attributes: self.attributes,
            summary,
        };
        tracing::debug!(
            name = %descriptor.name,
            width = %descriptor.width,
            flags = descriptor.is_flags,
            members = descriptor.members.len(),
            "built enum descriptor"
        );
        descriptor
    }
}

/// Builds a descriptor stored in the primitive type `T`.
///
/// Member values are `T` themselves, so they always fit and no step can fail.
#[derive(Clone, Debug)]
pub struct NativeBuilder<T: NativeInteger> {
    inner: DescriptorBuilder,
    _native: PhantomData<T>,
}

impl<T: NativeInteger> NativeBuilder<T> {
    /// Starts a non-flags descriptor named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: DescriptorBuilder::new(name, T::WIDTH),
            _native: PhantomData,
        }
    }

    /// Marks the enum as a flags type.
    #[must_use]
    pub fn flags(mut self, is_flags: bool) -> Self {
        self.inner = self.inner.flags(is_flags);
        self
    }

    /// Sets the type-level description.
    #[must_use]
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.inner = self.inner.description(text);
        self
    }

    /// Declares a member with an optional description.
    #[must_use]
    pub fn member(mut self, name: impl Into<String>, value: T, description: Option<&str>) -> Self {
        self.inner.members.push(Member {
            name: name.into(),
            bits: value.to_bits(),
            description: description.map(str::to_owned),
            attributes: Vec::new(),
        });
        self
    }

    /// Freezes the member table.
    pub fn build(self) -> EnumDescriptor {
        self.inner.build()
    }
}
