//! Error types for role and pairing slot operations.

use crate::role::Role;

/// Result type for pairing operations.
pub type Result<T> = std::result::Result<T, PairingError>;

/// Rejections reported by the pairing state.
///
/// None of these are fatal: whenever one is returned the state is left exactly
/// as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PairingError {
    /// Font name was empty after trimming, or contains a reference delimiter.
    #[error("Font name must be non-empty and must not contain '|' or '+'")]
    InvalidInput,

    /// Role is toggled off and does not accept font changes.
    #[error("Role '{0}' is inactive")]
    InactiveRole(Role),

    /// Both pairing slots are occupied.
    #[error("Both pairing slots are full")]
    SlotsFull,

    /// Text did not name a role.
    #[error("Unknown role '{0}' (expected heading, subheading, body or caption)")]
    UnknownRole(String),

    /// Text did not name a slot.
    #[error("Unknown pairing slot '{0}' (expected A or B)")]
    UnknownSlot(String),
}
