//! # Domain Invariants
//!
//! Constants and request preconditions of the suggestion client.

use super::errors::SuggestError;
use super::value_objects::SuggestQuery;

/// Public DaData address suggestion endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://suggestions.dadata.ru/suggestions/api/4_1/rs/suggest/address";

/// Result cap for unbounded queries.
pub const DEFAULT_SUGGESTION_COUNT: usize = 10;

/// Result cap for single-level queries.
pub const LEVEL_SUGGESTION_COUNT: usize = 20;

/// Per-request ceiling, after which the call fails as a transport error.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Invariant: a request always carries query text and a positive cap.
pub fn invariant_query_valid(query: &SuggestQuery) -> Result<(), SuggestError> {
    if query.query.trim().is_empty() {
        return Err(SuggestError::InvalidQuery("query text is empty".to_string()));
    }
    if query.count == 0 {
        return Err(SuggestError::InvalidQuery("count must be positive".to_string()));
    }
    Ok(())
}
