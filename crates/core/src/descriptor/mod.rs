//! Enum descriptors.
//!
//! A descriptor is the immutable table of an enum's declared members. It records:
//! 1. **Members:** Name, normalized value and metadata, in declaration order.
//! 2. **Kind:** Whether members are meant to be combined bitwise (flags) or not.
//! 3. **Storage:** The underlying integer width used to bound-check incoming values.
//! 4. **Summary:** Facts derived once at build time (zero member, extremes, flag union).
//!
//! Declaration order matters: when several members could explain the same bits,
//! the first declared member wins.

use std::collections::HashSet;

/// Descriptor builders.
pub mod builder;

/// Declared members and attached metadata.
pub mod member;

pub use builder::{DescriptorBuilder, NativeBuilder};
pub use member::{Attribute, Member};

use crate::common::{EnumError, EnumValue, IntegerWidth, Result};

/// Immutable member table of one enum type.
///
/// Safe to share across threads once built; nothing mutates it afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumDescriptor {
    pub(crate) name: String,
    pub(crate) is_flags: bool,
    pub(crate) width: IntegerWidth,
    pub(crate) members: Vec<Member>,
    pub(crate) description: Option<String>,
    pub(crate) attributes: Vec<Attribute>,
    pub(crate) summary: Summary,
}

/// Facts derived from the member table at build time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Summary {
    pub(crate) zero: Option<usize>,
    pub(crate) min: Option<usize>,
    pub(crate) max: Option<usize>,
    pub(crate) all_flags: u64,
    pub(crate) case_collisions: bool,
}

impl Summary {
    pub(crate) fn compute(width: IntegerWidth, members: &[Member]) -> Self {
        let mut summary = Self::default();
        let mut folded = HashSet::with_capacity(members.len());

        for (index, member) in members.iter().enumerate() {
            summary.all_flags |= member.bits;
            if !folded.insert(member.name.to_lowercase()) {
                summary.case_collisions = true;
            }

            if member.bits == 0 {
                if summary.zero.is_none() {
                    summary.zero = Some(index);
                }
                continue;
            }

            // Extremes are ordered by native value, so signed widths sort negatives first.
            let native = width.to_native(member.bits);
            match summary.min {
                Some(i) if width.to_native(members[i].bits) <= native => {}
                _ => summary.min = Some(index),
            }
            match summary.max {
                Some(i) if width.to_native(members[i].bits) >= native => {}
                _ => summary.max = Some(index),
            }
        }

        if summary.case_collisions {
            tracing::debug!("member names collide case-insensitively");
        }
        summary
    }
}

impl EnumDescriptor {
    /// Starts building a descriptor.
    pub fn builder(name: impl Into<String>, width: IntegerWidth) -> DescriptorBuilder {
        DescriptorBuilder::new(name, width)
    }

    /// Returns the enum's type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if members are meant to be combined bitwise.
    pub const fn is_flags(&self) -> bool {
        self.is_flags
    }

    /// Returns the underlying storage width.
    pub const fn width(&self) -> IntegerWidth {
        self.width
    }

    /// Returns every member in declaration order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Returns the number of declared members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if no member is declared.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns member names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.members.iter().map(Member::name)
    }

    /// Returns member values in declaration order.
    pub fn values(&self) -> impl Iterator<Item = EnumValue> + '_ {
        self.members.iter().map(Member::value)
    }

    /// Returns the members whose value equals `value` exactly.
    pub fn members_with_value(&self, value: EnumValue) -> impl Iterator<Item = &Member> + '_ {
        self.members.iter().filter(move |m| m.bits == value.bits())
    }

    /// Returns the explicitly declared zero member, if any.
    pub fn zero_member(&self) -> Option<&Member> {
        self.summary.zero.map(|i| &self.members[i])
    }

    /// Returns true if a zero member is explicitly declared.
    pub const fn has_zero_member(&self) -> bool {
        self.summary.zero.is_some()
    }

    /// Returns the zero value, declared or not.
    pub const fn default_value(&self) -> EnumValue {
        EnumValue::ZERO
    }

    /// Returns the smallest non-zero member by native value.
    pub fn min_member(&self) -> Option<&Member> {
        self.summary.min.map(|i| &self.members[i])
    }

    /// Returns the largest non-zero member by native value.
    pub fn max_member(&self) -> Option<&Member> {
        self.summary.max.map(|i| &self.members[i])
    }

    /// Returns true if any non-zero member is declared.
    pub const fn has_non_zero_members(&self) -> bool {
        self.summary.min.is_some()
    }

    /// Returns true if two member names are equal ignoring case.
    pub const fn has_case_insensitive_duplicates(&self) -> bool {
        self.summary.case_collisions
    }

    /// Returns the union of every member's bits.
    ///
    /// # Errors
    ///
    /// `UnsupportedOperation` if the enum is not a flags type.
    pub fn all_flags(&self) -> Result<EnumValue> {
        self.require_flags()?;
        Ok(EnumValue::from_bits(self.summary.all_flags))
    }

    /// Returns the type-level description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the type-level tags.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Renders a value as its native integer for messages.
    pub(crate) fn render(&self, value: EnumValue) -> String {
        self.width.to_native(value.bits()).to_string()
    }

    pub(crate) fn require_flags(&self) -> Result<()> {
        if self.is_flags {
            Ok(())
        } else {
            Err(EnumError::unsupported(
                &self.name,
                "operation requires a flags enum",
            ))
        }
    }
}
