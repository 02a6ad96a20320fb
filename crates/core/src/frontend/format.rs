//! Value rendering.

use std::fmt;
use std::str::FromStr;

use crate::common::{EnumError, EnumValue, Result};
use crate::descriptor::{EnumDescriptor, Member};

/// Rendering style of [`EnumDescriptor::format`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FormatSpec {
    /// `G`: the member name; flags enums list the names covering the value.
    #[default]
    General,
    /// `F`: the flags listing, whether or not the enum is a flags type.
    Flags,
    /// `D`: the native decimal integer.
    Decimal,
    /// `X`: two's-complement hexadecimal padded to the storage width.
    Hex,
}

impl FromStr for FormatSpec {
    type Err = EnumError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "G" | "g" => Ok(Self::General),
            "F" | "f" => Ok(Self::Flags),
            "D" | "d" => Ok(Self::Decimal),
            "X" | "x" => Ok(Self::Hex),
            _ => Err(EnumError::format_invalid("FormatSpec", s)),
        }
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::General => "G",
            Self::Flags => "F",
            Self::Decimal => "D",
            Self::Hex => "X",
        })
    }
}

impl EnumDescriptor {
    /// Renders a valid value.
    ///
    /// # Errors
    ///
    /// `NoSuchValue` if `value` is not valid.
    pub fn format(&self, value: EnumValue, spec: FormatSpec) -> Result<String> {
        self.ensure_valid(value)?;
        Ok(self.format_unchecked(value, spec))
    }

    /// Renders a value using a textual specifier (`G`, `F`, `D` or `X`).
    ///
    /// # Errors
    ///
    /// `FormatInvalid` for an unknown specifier, `NoSuchValue` for an invalid value.
    pub fn format_str(&self, value: EnumValue, spec: &str) -> Result<String> {
        self.format(value, spec.parse()?)
    }

    /// Renders any value, including ones synthesized under `Allow`.
    ///
    /// Values no name describes fall back to decimal.
    pub fn format_unchecked(&self, value: EnumValue, spec: FormatSpec) -> String {
        match spec {
            FormatSpec::General if !self.is_flags => self
                .members_with_value(value)
                .next()
                .map_or_else(|| self.render(value), |m| m.name.clone()),
            FormatSpec::General | FormatSpec::Flags => self.render_flags(value),
            FormatSpec::Decimal => self.render(value),
            FormatSpec::Hex => format!(
                "{:0digits$X}",
                self.width.truncate(value.bits()),
                digits = (self.width.bits() / 4) as usize
            ),
        }
    }

    fn render_flags(&self, value: EnumValue) -> String {
        if let Some(member) = self.members_with_value(value).next() {
            return member.name.clone();
        }
        if value.is_zero() {
            return self.render(value);
        }

        // Largest patterns first; the sort is stable so declaration order breaks ties.
        let mut ordered: Vec<&Member> = self.members.iter().filter(|m| !m.is_zero()).collect();
        ordered.sort_by(|a, b| b.bits.cmp(&a.bits));

        let mut remaining = value.bits();
        let mut picked = Vec::new();
        for member in ordered {
            if remaining & member.bits == member.bits {
                remaining &= !member.bits;
                picked.push(member.name.as_str());
            }
        }

        if remaining != 0 {
            return self.render(value);
        }
        picked.reverse();
        picked.join(", ")
    }
}
