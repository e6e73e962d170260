//! Text roles that can receive a font.

use std::{fmt, str::FromStr};

use crate::error::PairingError;

/// One of the four fixed text categories of a pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Heading,
    Subheading,
    Body,
    Caption,
}

impl Role {
    /// All roles in their stable order.
    pub const ALL: [Role; 4] = [Role::Heading, Role::Subheading, Role::Body, Role::Caption];

    /// Position of the role within [`Role::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Role::Heading => 0,
            Role::Subheading => 1,
            Role::Body => 2,
            Role::Caption => 3,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Heading => "heading",
            Role::Subheading => "subheading",
            Role::Body => "body",
            Role::Caption => "caption",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = PairingError;

    /// Parses an exact role name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PairingError::UnknownRole(s.to_string()))
    }
}
