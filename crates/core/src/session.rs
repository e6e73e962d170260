//! Application state for one picker session.

use log::{debug, info};

use crate::{
    error::Result,
    reference::FontReference,
    role::Role,
    roles::RoleManager,
    slots::{PairingSlots, SlotKey},
};

/// What the presentation layer should currently show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    /// "Nothing to preview" message: every role is toggled off.
    pub show_no_preview: bool,
    /// Save-pairing affordance.
    pub show_save: bool,
    /// "Both slots are full" message.
    pub show_slots_full: bool,
    /// Empty placeholder per slot, indexed A then B.
    pub slot_empty: [bool; 2],
}

/// Owns the live role state and both pairing slots.
///
/// Every UI event maps to exactly one method call here, and each call runs to
/// completion before returning.
#[derive(Debug, Clone, Default)]
pub struct PairingSession {
    roles: RoleManager,
    slots: PairingSlots,
}

impl PairingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roles(&self) -> &RoleManager {
        &self.roles
    }

    pub fn slots(&self) -> &PairingSlots {
        &self.slots
    }

    pub fn toggle_role(&mut self, role: Role) -> bool {
        let active = self.roles.toggle_role(role);
        if self.roles.all_inactive() {
            debug!("All roles inactive; preview is empty");
        }
        active
    }

    pub fn assign_font(&mut self, role: Role, font_name: &str) -> Result<FontReference> {
        self.roles.assign_font(role, font_name)
    }

    pub fn reset_role_font(&mut self, role: Role) -> Result<FontReference> {
        self.roles.reset_role_font(role)
    }

    /// Save the live state into the next empty slot.
    pub fn save_pairing(&mut self) -> Result<SlotKey> {
        let key = self.slots.save_current(self.roles.states())?;
        info!("Saved pairing {} into slot {key}", self.roles.font_reference());
        Ok(key)
    }

    /// Empty a slot; live role state is untouched.
    pub fn reset_slot(&mut self, key: SlotKey) -> bool {
        self.slots.reset_slot(key)
    }

    pub fn font_reference(&self) -> FontReference {
        self.roles.font_reference()
    }

    pub fn view(&self) -> ViewState {
        let all_inactive = self.roles.all_inactive();
        let both_full = self.slots.both_full();
        ViewState {
            show_no_preview: all_inactive,
            show_save: !all_inactive && !both_full,
            show_slots_full: both_full,
            slot_empty: SlotKey::ALL.map(|key| !self.slots.is_full(key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PairingError;

    #[test]
    fn test_initial_view() {
        let session = PairingSession::new();
        assert_eq!(
            session.view(),
            ViewState {
                show_no_preview: false,
                show_save: true,
                show_slots_full: false,
                slot_empty: [true, true],
            }
        );
    }

    #[test]
    fn test_view_hides_save_when_nothing_previewed() {
        let mut session = PairingSession::new();
        for role in Role::ALL {
            session.toggle_role(role);
        }
        let view = session.view();
        assert!(view.show_no_preview);
        assert!(!view.show_save);
    }

    #[test]
    fn test_view_when_slots_full() {
        let mut session = PairingSession::new();
        session.save_pairing().unwrap();
        assert_eq!(session.view().slot_empty, [false, true]);
        session.save_pairing().unwrap();
        let view = session.view();
        assert!(view.show_slots_full);
        assert!(!view.show_save);
        assert_eq!(view.slot_empty, [false, false]);
        assert_eq!(session.save_pairing(), Err(PairingError::SlotsFull));

        session.reset_slot(SlotKey::B);
        let view = session.view();
        assert!(!view.show_slots_full);
        assert!(view.show_save);
    }

    #[test]
    fn test_reset_slot_keeps_live_state() {
        let mut session = PairingSession::new();
        session.assign_font(Role::Heading, "Bitter").unwrap();
        session.toggle_role(Role::Body);
        session.save_pairing().unwrap();
        session.reset_slot(SlotKey::A);
        assert_eq!(session.roles().state(Role::Heading).font_name, "Bitter");
        assert!(!session.roles().is_active(Role::Body));
    }
}
