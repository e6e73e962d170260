//! Role visibility and font assignment.

use std::ops::Index;

use log::debug;

use crate::{
    config::{DEFAULT_FONT, NAME_SPACE_SEPARATOR, REFERENCE_DELIMITER},
    error::{PairingError, Result},
    reference::FontReference,
    role::Role,
};

/// Visibility and font of a single role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleState {
    pub active: bool,
    pub font_name: String,
}

impl Default for RoleState {
    fn default() -> Self {
        Self { active: true, font_name: DEFAULT_FONT.to_string() }
    }
}

/// State of every role, indexed by [`Role`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleStates([RoleState; 4]);

impl RoleStates {
    pub fn get(&self, role: Role) -> &RoleState {
        &self.0[role.index()]
    }

    fn get_mut(&mut self, role: Role) -> &mut RoleState {
        &mut self.0[role.index()]
    }

    /// Roles paired with their state, in role order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &RoleState)> {
        Role::ALL.into_iter().zip(self.0.iter())
    }
}

impl Index<Role> for RoleStates {
    type Output = RoleState;

    fn index(&self, role: Role) -> &RoleState {
        self.get(role)
    }
}

/// Font currently assigned to each role, regardless of visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentFonts([String; 4]);

impl CurrentFonts {
    pub fn get(&self, role: Role) -> &str {
        &self.0[role.index()]
    }
}

impl Default for CurrentFonts {
    fn default() -> Self {
        Self(std::array::from_fn(|_| DEFAULT_FONT.to_string()))
    }
}

impl From<[String; 4]> for CurrentFonts {
    fn from(fonts: [String; 4]) -> Self {
        Self(fonts)
    }
}

/// Tracks which roles are previewed and which font each one uses.
#[derive(Debug, Clone, Default)]
pub struct RoleManager {
    states: RoleStates,
}

impl RoleManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, role: Role) -> &RoleState {
        self.states.get(role)
    }

    pub fn states(&self) -> &RoleStates {
        &self.states
    }

    pub fn is_active(&self, role: Role) -> bool {
        self.states.get(role).active
    }

    /// True when no role is previewed.
    pub fn all_inactive(&self) -> bool {
        self.states.iter().all(|(_, state)| !state.active)
    }

    /// Flip a role's visibility and return the new value.
    pub fn toggle_role(&mut self, role: Role) -> bool {
        let state = self.states.get_mut(role);
        state.active = !state.active;
        debug!("Toggled {role} -> active={}", state.active);
        state.active
    }

    /// Assign a font to an active role.
    ///
    /// The name is trimmed first. Blank names, names containing a character the
    /// combined reference reserves, and inactive roles are rejected without
    /// touching any state.
    pub fn assign_font(&mut self, role: Role, font_name: &str) -> Result<FontReference> {
        let font_name = font_name.trim();
        if font_name.is_empty()
            || font_name.contains([REFERENCE_DELIMITER, NAME_SPACE_SEPARATOR])
        {
            return Err(PairingError::InvalidInput);
        }
        self.set_font(role, font_name)
    }

    /// Put an active role back on the default font, keeping its visibility.
    pub fn reset_role_font(&mut self, role: Role) -> Result<FontReference> {
        self.set_font(role, DEFAULT_FONT)
    }

    fn set_font(&mut self, role: Role, font_name: &str) -> Result<FontReference> {
        let state = self.states.get_mut(role);
        if !state.active {
            debug!("Rejected font '{font_name}' for inactive role {role}");
            return Err(PairingError::InactiveRole(role));
        }
        state.font_name = font_name.to_string();
        debug!("Assigned '{font_name}' to {role}");
        Ok(self.font_reference())
    }

    /// Every role's font, including inactive roles' last-known font.
    pub fn current_fonts(&self) -> CurrentFonts {
        CurrentFonts(Role::ALL.map(|role| self.states.get(role).font_name.clone()))
    }

    pub fn font_reference(&self) -> FontReference {
        FontReference::from_fonts(&self.current_fonts())
    }
}
