//! # TP-02 Address Resolver
//!
//! Cascading address entry: Region → City → Street → House.
//!
//! **Subsystem ID:** 02
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Own the per-field text, scope anchor and candidate state of the address
//! form, ask the suggestion client (tp-01) for candidates scoped to the
//! nearest resolved ancestor, and compose the official full-address string.
//!
//! ## Cascade Rules
//!
//! | Event | Effect |
//! |-------|--------|
//! | text changed, < 2 chars | field Empty, surface hidden, no request |
//! | text changed, >= 2 chars | field Querying, one tagged background fetch |
//! | fetch outcome, tag current | Populated (non-empty) or Empty |
//! | fetch outcome, tag stale | discarded |
//! | candidate chosen | field Resolved, anchor recorded, later fields cleared |
//!
//! ## Threading
//!
//! Fetches run as tokio tasks and report back over a channel. Only the
//! owner of the resolver applies outcomes, so field state and the
//! presentation surface are never touched from background tasks.
//!
//! ## Module Structure
//!
//! ```text
//! tp-02-address-resolver/
//! ├── domain/          # AddressField, FieldSlot, FetchOutcome, errors
//! ├── algorithms/      # cascade clearing, query scoping, full-address formatter
//! ├── ports/           # AddressFormApi (inbound) + PresentationSurface (outbound)
//! ├── application/     # CascadingResolver
//! └── config.rs        # ResolverConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use algorithms::{
    clear_descendants, compose_full_address, compose_house_query, field_query,
    full_address_label, FieldTexts,
};
pub use application::CascadingResolver;
pub use config::ResolverConfig;
pub use domain::{
    invariant_descendants_cleared, invariant_query_long_enough, AddressField, FetchOutcome,
    FieldQuery, FieldSlot, FieldState, ManualInputs, ResolverError, MIN_QUERY_CHARS,
};
pub use ports::{AddressFormApi, NullSurface, PresentationSurface, RecordingSurface, SurfaceEvent};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
