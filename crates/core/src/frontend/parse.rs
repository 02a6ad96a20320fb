//! Text parsing.
//!
//! Input is trimmed first. Text starting with a digit, `+` or `-` is tried as an integer
//! in the storage width; if it is not well-formed it falls through to name matching, so
//! `"-abc"` ends up as an unknown name rather than a malformed number. Names are split
//! on commas; only flags enums accept more than one.

use std::num::IntErrorKind;

use crate::common::error::found;
use crate::common::{EnumError, EnumValue, Result};
use crate::config::ParseOptions;
use crate::descriptor::{EnumDescriptor, Member};

impl EnumDescriptor {
    /// Parses an integer or comma-separated member names.
    ///
    /// # Arguments
    ///
    /// * `text` - The representation to convert. Surrounding whitespace is ignored.
    /// * `options` - Case sensitivity of name matching and the invalid-value policy
    ///   applied to integers.
    ///
    /// # Errors
    ///
    /// * `BlankInput` if `text` is empty after trimming.
    /// * `OutOfRange` if `text` is an integer outside the storage width.
    /// * `NoSuchValue` if `text` is an integer rejected by the policy.
    /// * `UnsupportedOperation` if several names are given for a plain enum.
    /// * `AmbiguousValue` if a name matches several members ignoring case.
    /// * `FormatInvalid` if no name matches.
    pub fn parse(&self, text: &str, options: ParseOptions) -> Result<EnumValue> {
        let text = text.trim();
        if text.is_empty() {
            return Err(EnumError::BlankInput);
        }

        if text.starts_with(|c: char| c.is_ascii_digit() || c == '+' || c == '-') {
            match text.parse::<i128>() {
                Ok(number) => {
                    let bits = self.width.check(number)?;
                    return self.admit(EnumValue::from_bits(bits), options.policy);
                }
                Err(err)
                    if matches!(
                        err.kind(),
                        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                    ) =>
                {
                    return Err(EnumError::out_of_range(text, self.width));
                }
                Err(_) => tracing::trace!(text, "not an integer, matching names"),
            }
        }

        self.parse_names(text, options.ignore_case)
    }

    /// Like [`parse`](Self::parse), but unknown input yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Every kind except `NoSuchValue` and `FormatInvalid`.
    pub fn try_parse(&self, text: &str, options: ParseOptions) -> Result<Option<EnumValue>> {
        found(self.parse(text, options))
    }

    /// Parses text that may be absent.
    ///
    /// # Errors
    ///
    /// `NullInput` for `None`, otherwise as [`parse`](Self::parse).
    pub fn parse_optional(&self, text: Option<&str>, options: ParseOptions) -> Result<EnumValue> {
        self.parse(text.ok_or(EnumError::NullInput("text"))?, options)
    }

    /// Finds the member declared under `name`.
    ///
    /// Case-sensitive lookup returns the first member with that exact name.
    ///
    /// # Errors
    ///
    /// `AmbiguousValue` if `ignore_case` is set and several members match.
    pub fn member_named(&self, name: &str, ignore_case: bool) -> Result<Option<&Member>> {
        if !ignore_case {
            return Ok(self.members.iter().find(|m| m.name == name));
        }

        let mut matches = self
            .members
            .iter()
            .filter(|m| eq_ignore_case(&m.name, name));
        let first = matches.next();
        if matches.next().is_some() {
            return Err(EnumError::ambiguous(&self.name, name));
        }
        Ok(first)
    }

    fn parse_names(&self, text: &str, ignore_case: bool) -> Result<EnumValue> {
        let tokens: Vec<&str> = text
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.len() > 1 && !self.is_flags {
            return Err(EnumError::unsupported(
                &self.name,
                "combining several names requires a flags enum",
            ));
        }

        let mut bits = 0u64;
        let mut matched = false;
        for token in tokens {
            // Unknown tokens are skipped as long as some other token matches.
            if let Some(member) = self.member_named(token, ignore_case)? {
                bits |= member.bits;
                matched = true;
            }
        }

        if matched {
            Ok(EnumValue::from_bits(bits))
        } else {
            Err(EnumError::format_invalid(&self.name, text))
        }
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
