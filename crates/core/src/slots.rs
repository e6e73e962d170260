//! Two fixed pairing slots holding saved role snapshots.

use std::{fmt, str::FromStr};

use log::debug;

use crate::{
    error::{PairingError, Result},
    role::Role,
    roles::RoleStates,
};

/// Identifies one of the two pairing slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKey {
    A,
    B,
}

impl SlotKey {
    /// Slots in the order a save fills them.
    pub const ALL: [SlotKey; 2] = [SlotKey::A, SlotKey::B];

    const fn index(self) -> usize {
        match self {
            SlotKey::A => 0,
            SlotKey::B => 1,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SlotKey::A => "A",
            SlotKey::B => "B",
        }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotKey {
    type Err = PairingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "a" | "A" => Ok(SlotKey::A),
            "b" | "B" => Ok(SlotKey::B),
            other => Err(PairingError::UnknownSlot(other.to_string())),
        }
    }
}

/// A role's font at save time and whether it was previewed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotEntry {
    pub font_name: String,
    pub included: bool,
}

/// Saved copy of every role's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairingSnapshot([SnapshotEntry; 4]);

impl PairingSnapshot {
    pub fn capture(states: &RoleStates) -> Self {
        Self(Role::ALL.map(|role| {
            let state = &states[role];
            SnapshotEntry { font_name: state.font_name.clone(), included: state.active }
        }))
    }

    pub fn get(&self, role: Role) -> &SnapshotEntry {
        &self.0[role.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, &SnapshotEntry)> {
        Role::ALL.into_iter().zip(self.0.iter())
    }
}

/// Slot A and slot B, each empty or holding one snapshot.
#[derive(Debug, Clone, Default)]
pub struct PairingSlots {
    slots: [Option<PairingSnapshot>; 2],
}

impl PairingSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save the given states into the first empty slot, A before B.
    ///
    /// Returns [`PairingError::SlotsFull`] without touching either slot when
    /// both are occupied.
    pub fn save_current(&mut self, states: &RoleStates) -> Result<SlotKey> {
        let key = SlotKey::ALL
            .into_iter()
            .find(|key| !self.is_full(*key))
            .ok_or(PairingError::SlotsFull)?;
        self.slots[key.index()] = Some(PairingSnapshot::capture(states));
        debug!("Saved pairing into slot {key}");
        Ok(key)
    }

    /// Empty a slot. Returns whether a snapshot was discarded.
    pub fn reset_slot(&mut self, key: SlotKey) -> bool {
        let discarded = self.slots[key.index()].take().is_some();
        debug!("Reset slot {key} (discarded={discarded})");
        discarded
    }

    pub fn is_full(&self, key: SlotKey) -> bool {
        self.slots[key.index()].is_some()
    }

    pub fn both_full(&self) -> bool {
        SlotKey::ALL.into_iter().all(|key| self.is_full(key))
    }

    pub fn snapshot(&self, key: SlotKey) -> Option<&PairingSnapshot> {
        self.slots[key.index()].as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::RoleManager;

    #[test]
    fn test_fills_a_then_b() {
        let roles = RoleManager::new();
        let mut slots = PairingSlots::new();
        assert_eq!(slots.save_current(roles.states()), Ok(SlotKey::A));
        assert!(slots.is_full(SlotKey::A));
        assert!(!slots.is_full(SlotKey::B));
        assert_eq!(slots.save_current(roles.states()), Ok(SlotKey::B));
        assert!(slots.both_full());
    }

    #[test]
    fn test_fills_a_when_only_b_occupied() {
        let roles = RoleManager::new();
        let mut slots = PairingSlots::new();
        slots.save_current(roles.states()).unwrap();
        slots.save_current(roles.states()).unwrap();
        slots.reset_slot(SlotKey::A);
        assert_eq!(slots.save_current(roles.states()), Ok(SlotKey::A));
    }

    #[test]
    fn test_full_save_does_not_mutate() {
        let mut roles = RoleManager::new();
        let mut slots = PairingSlots::new();
        slots.save_current(roles.states()).unwrap();
        roles.assign_font(Role::Body, "Lora").unwrap();
        slots.save_current(roles.states()).unwrap();
        let a = slots.snapshot(SlotKey::A).cloned();
        let b = slots.snapshot(SlotKey::B).cloned();

        roles.assign_font(Role::Body, "Arvo").unwrap();
        assert_eq!(slots.save_current(roles.states()), Err(PairingError::SlotsFull));
        assert_eq!(slots.snapshot(SlotKey::A).cloned(), a);
        assert_eq!(slots.snapshot(SlotKey::B).cloned(), b);
    }

    #[test]
    fn test_reset_empty_slot_is_noop() {
        let mut slots = PairingSlots::new();
        assert!(!slots.reset_slot(SlotKey::B));
        assert!(!slots.reset_slot(SlotKey::B));
        assert!(!slots.is_full(SlotKey::B));
        assert!(slots.snapshot(SlotKey::B).is_none());
    }

    #[test]
    fn test_snapshot_captures_inclusion() {
        let mut roles = RoleManager::new();
        roles.assign_font(Role::Caption, "Karla").unwrap();
        roles.toggle_role(Role::Caption);
        let snapshot = PairingSnapshot::capture(roles.states());
        let caption = snapshot.get(Role::Caption);
        assert_eq!(caption.font_name, "Karla");
        assert!(!caption.included);
        assert!(snapshot.get(Role::Heading).included);
    }

    #[test]
    fn test_parse_slot_key() {
        assert_eq!("a".parse::<SlotKey>(), Ok(SlotKey::A));
        assert_eq!("B".parse::<SlotKey>(), Ok(SlotKey::B));
        assert_eq!("c".parse::<SlotKey>(), Err(PairingError::UnknownSlot("c".to_string())));
    }
}
