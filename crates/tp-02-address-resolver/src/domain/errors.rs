//! # Domain Errors
//!
//! Error types for the address resolver.
//!
//! Suggestion failures are not in here: they are logged at the fetch
//! boundary and never reach the caller.

use thiserror::Error;

use super::entities::AddressField;

/// Address resolver error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolverError {
    /// A candidate was chosen for a field that shows none.
    #[error("No candidates on display for {field}")]
    NoCandidates {
        /// Field the choice was made on
        field: AddressField,
    },

    /// The chosen index is past the end of the displayed list.
    #[error("Candidate {index} out of range for {field} ({available} available)")]
    CandidateOutOfRange {
        /// Field the choice was made on
        field: AddressField,
        /// Requested index
        index: usize,
        /// Number of displayed candidates
        available: usize,
    },

    /// A field name could not be parsed.
    #[error("Unknown address field: {0}")]
    UnknownField(String),
}
