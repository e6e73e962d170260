//! Combined font reference built from every role's current font.

use std::fmt;

use crate::{
    config::{NAME_SPACE_SEPARATOR, REFERENCE_DELIMITER, STYLESHEET_BASE_URL},
    role::Role,
    roles::CurrentFonts,
};

/// Single batched lookup key covering all four roles' fonts.
///
/// Tokens are in [`Role::ALL`] order and every role contributes one, active or
/// not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontReference(String);

impl FontReference {
    pub fn from_fonts(fonts: &CurrentFonts) -> Self {
        let mut reference = String::new();
        for role in Role::ALL {
            if !reference.is_empty() {
                reference.push(REFERENCE_DELIMITER);
            }
            reference.extend(fonts.get(role).chars().map(|c| {
                if c == ' ' { NAME_SPACE_SEPARATOR } else { c }
            }));
        }
        Self(reference)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Per-role tokens, in role order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split(REFERENCE_DELIMITER)
    }

    /// Stylesheet URL requesting every font of the reference at once.
    pub fn stylesheet_url(&self) -> String {
        format!("{STYLESHEET_BASE_URL}{}", self.0)
    }
}

impl fmt::Display for FontReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
