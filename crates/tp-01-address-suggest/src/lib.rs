//! # TP-01 Address Suggest
//!
//! Scoped address lookups against the DaData suggestion service.
//!
//! **Subsystem ID:** 01
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Translate one scoped query (free text, detail-level bounds, ancestor
//! FIAS filters, result cap) into exactly one outbound request and parse the
//! answer into ranked [`Candidate`]s. The client never re-ranks, retries or
//! caches: every call is a fresh request bounded by a fixed timeout.
//!
//! ## Error Taxonomy
//!
//! | Error | Raised when |
//! |-------|-------------|
//! | `Transport` | connection failure or timeout |
//! | `Remote` | service answered with a non-2xx status (status + body kept) |
//! | `Decode` | body is not a suggestion document |
//! | `InvalidQuery` | empty query text, rejected before any network call |
//!
//! ## Module Structure
//!
//! ```text
//! tp-01-address-suggest/
//! ├── domain/          # Candidate, AddressData, SuggestQuery, errors
//! ├── ports/           # SuggestionApi (inbound) + mock
//! ├── adapters/        # DaDataClient (reqwest)
//! └── config.rs        # SuggestConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use adapters::DaDataClient;
pub use config::SuggestConfig;
pub use domain::{
    non_empty, AddressData, Bound, Candidate, DetailLevel, LocationFilter, ScopeAnchor,
    SuggestError, SuggestQuery, SuggestionResponse, DEFAULT_ENDPOINT, DEFAULT_SUGGESTION_COUNT,
    DEFAULT_TIMEOUT_MS, LEVEL_SUGGESTION_COUNT,
};
pub use ports::{MockSuggestionService, SuggestionApi};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
