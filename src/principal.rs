//! Named identity values for authentication contexts.
//!
//! The category lives in [`PrincipalKind`] rather than in a subtype per
//! category; `Principal::user` covers the common case of a user-kind
//! principal built from a login name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A named identity tagged with its category. Name and kind are fixed at
/// construction; equality and hashing cover both.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Principal {
    /// Category of this principal.
    kind: PrincipalKind,
    /// Display or login name.
    name: String,
}

impl Principal {
    /// The category this principal was constructed with.
    pub fn kind(&self) -> PrincipalKind {
        return self.kind;
    }

    /// The principal's name.
    pub fn name(&self) -> &str {
        return &self.name;
    }

    /// A principal of an arbitrary kind.
    pub fn new(name: impl Into<String>, kind: PrincipalKind) -> Self {
        return Self {
            kind,
            name: name.into(),
        };
    }

    /// A user-kind principal. Equivalent to `new(name, PrincipalKind::User)`.
    pub fn user(name: impl Into<String>) -> Self {
        return Self::new(name, PrincipalKind::User);
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{}: {}", self.kind, self.name);
    }
}

/// Discriminator category for a [`Principal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrincipalKind {
    /// An NT-style domain.
    Domain,
    /// A group of users.
    Group,
    /// An individual user account.
    User,
}

impl PrincipalKind {
    /// Stable lowercase name for this kind, as used in logs and serialized
    /// forms. Round-trips through [`FromStr`].
    pub fn as_str(self) -> &'static str {
        return match self {
            Self::Domain => "domain",
            Self::Group => "group",
            Self::User => "user",
        };
    }
}

impl fmt::Display for PrincipalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(self.as_str());
    }
}

impl FromStr for PrincipalKind {
    type Err = Error;

    /// Parse a kind name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownPrincipalKind` for anything other than the
    /// three known categories.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("domain") {
            return Ok(Self::Domain);
        }
        if s.eq_ignore_ascii_case("group") {
            return Ok(Self::Group);
        }
        if s.eq_ignore_ascii_case("user") {
            return Ok(Self::User);
        }
        return Err(Error::UnknownPrincipalKind {
            kind: s.to_string(),
        });
    }
}
