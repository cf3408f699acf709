//! # Domain Invariants
//!
//! Rules of the cascade that must always hold.

use super::entities::{AddressField, FieldSlot, FieldState};

/// Shortest text, in characters, that triggers a suggestion fetch.
pub const MIN_QUERY_CHARS: usize = 2;

/// Invariant: shorter text never reaches the network.
///
/// Counts characters, not bytes, so a single Cyrillic letter stays below
/// the gate.
pub fn invariant_query_long_enough(text: &str, min_chars: usize) -> bool {
    text.trim().chars().count() >= min_chars
}

/// Invariant: every field after `resolved` is blank and unanchored.
pub fn invariant_descendants_cleared(fields: &[FieldSlot; 4], resolved: AddressField) -> bool {
    resolved.descendants().iter().all(|field| {
        let slot = &fields[field.index()];
        slot.text.is_empty()
            && slot.anchor.is_none()
            && slot.candidates.is_empty()
            && slot.state == FieldState::Empty
    })
}
