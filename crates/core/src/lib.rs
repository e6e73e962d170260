//! fontpair core - role assignment and pairing slot state.
//!
//! Holds the live preview state of the four text roles and two pairing slots
//! of saved snapshots. Nothing here knows about a UI toolkit; adapters map
//! their events onto [`PairingSession`] calls.

pub mod config;
pub mod error;
pub mod reference;
pub mod role;
pub mod roles;
pub mod session;
pub mod slots;

pub use error::{PairingError, Result};
pub use reference::FontReference;
pub use role::Role;
pub use roles::{CurrentFonts, RoleManager, RoleState, RoleStates};
pub use session::{PairingSession, ViewState};
pub use slots::{PairingSlots, PairingSnapshot, SlotKey, SnapshotEntry};
