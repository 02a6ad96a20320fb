//! Invalid-value policy.
//!
//! Governs whether parsing and casting accept values outside the declared member
//! table. Only two policies exist, so any other representation coming from
//! configuration or the command line is rejected with [`EnumError::InvalidPolicy`].

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::error::EnumError;

/// Whether values outside the member table are accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum InvalidValuePolicy {
    /// Reject values that are not members (or, for flags, not fully decomposable).
    #[default]
    #[serde(alias = "disallow")]
    Disallow,
    /// Accept any value that fits the underlying width.
    #[serde(alias = "allow")]
    Allow,
}

impl InvalidValuePolicy {
    /// Returns true if values outside the member table are accepted.
    pub const fn allows_unknown(self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Returns the name of the policy.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Disallow => "Disallow",
            Self::Allow => "Allow",
        }
    }
}

impl TryFrom<i64> for InvalidValuePolicy {
    type Error = EnumError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Disallow),
            1 => Ok(Self::Allow),
            other => Err(EnumError::InvalidPolicy(other.to_string())),
        }
    }
}

impl FromStr for InvalidValuePolicy {
    type Err = EnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("disallow") {
            Ok(Self::Disallow)
        } else if s.eq_ignore_ascii_case("allow") {
            Ok(Self::Allow)
        } else {
            Err(EnumError::InvalidPolicy(s.to_owned()))
        }
    }
}

impl fmt::Display for InvalidValuePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
