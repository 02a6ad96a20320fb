//! Member metadata lookup.
//!
//! Lookups resolve a value to exactly one member by exact equality, never by bit
//! decomposition, even for flags enums:
//! 1. **No match:** `NoSuchValue`.
//! 2. **Several matches:** `AmbiguousValue` (two names share one value).
//! 3. **One match:** its name, description or tags.

use crate::common::{EnumError, EnumValue, Result};
use crate::descriptor::{Attribute, EnumDescriptor, Member};

impl EnumDescriptor {
    /// Returns the single member whose value equals `value`.
    ///
    /// # Errors
    ///
    /// `NoSuchValue` if no member matches, `AmbiguousValue` if several do.
    pub fn member_info(&self, value: EnumValue) -> Result<&Member> {
        let mut matches = self.members_with_value(value);
        let first = matches
            .next()
            .ok_or_else(|| EnumError::no_such_value(&self.name, self.render(value)))?;
        if matches.next().is_some() {
            return Err(EnumError::ambiguous(&self.name, self.render(value)));
        }
        Ok(first)
    }

    /// Returns the name of the member equal to `value`.
    ///
    /// # Errors
    ///
    /// As [`member_info`](Self::member_info).
    pub fn get_name(&self, value: EnumValue) -> Result<&str> {
        self.member_info(value).map(Member::name)
    }

    /// Returns the description of the member equal to `value`, if it has one.
    ///
    /// # Errors
    ///
    /// As [`member_info`](Self::member_info).
    pub fn get_description(&self, value: EnumValue) -> Result<Option<&str>> {
        self.member_info(value).map(Member::description)
    }

    /// Returns the description of the member equal to `value`, or its name.
    ///
    /// # Errors
    ///
    /// As [`member_info`](Self::member_info).
    pub fn get_text(&self, value: EnumValue) -> Result<&str> {
        self.member_info(value).map(Member::text)
    }

    /// Returns every tag of the member equal to `value`.
    ///
    /// # Errors
    ///
    /// As [`member_info`](Self::member_info).
    pub fn get_attributes(&self, value: EnumValue) -> Result<&[Attribute]> {
        self.member_info(value).map(Member::attributes)
    }

    /// Returns the tags of one kind on the member equal to `value`.
    ///
    /// # Errors
    ///
    /// As [`member_info`](Self::member_info).
    pub fn get_attributes_of(&self, value: EnumValue, kind: &str) -> Result<Vec<&Attribute>> {
        Ok(self.member_info(value)?.attributes_of(kind).collect())
    }

    /// Returns the only tag of one kind on the member equal to `value`.
    ///
    /// # Errors
    ///
    /// As [`member_info`](Self::member_info), plus `AmbiguousValue` if the member
    /// carries the kind more than once.
    pub fn get_attribute(&self, value: EnumValue, kind: &str) -> Result<Option<&Attribute>> {
        let member = self.member_info(value)?;
        single(&self.name, kind, member.attributes_of(kind))
    }

    /// Returns the type-level tags of one kind.
    pub fn type_attributes_of<'a>(&'a self, kind: &str) -> impl Iterator<Item = &'a Attribute> {
        self.attributes.iter().filter(move |a| a.kind == kind)
    }

    /// Returns the only type-level tag of one kind.
    ///
    /// # Errors
    ///
    /// `AmbiguousValue` if the type carries the kind more than once.
    pub fn type_attribute(&self, kind: &str) -> Result<Option<&Attribute>> {
        single(&self.name, kind, self.type_attributes_of(kind))
    }
}

fn single<'a>(
    type_name: &str,
    kind: &str,
    mut tags: impl Iterator<Item = &'a Attribute>,
) -> Result<Option<&'a Attribute>> {
    let first = tags.next();
    if tags.next().is_some() {
        return Err(EnumError::ambiguous(type_name, format_args!("attribute `{kind}`")));
    }
    Ok(first)
}
