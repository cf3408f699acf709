//! # Algorithms Module
//!
//! Pure functions behind the resolver: cascade clearing, query scoping and
//! full-address formatting.

pub mod cascade;
pub mod formatter;

pub use cascade::{clear_descendants, compose_house_query, field_query, nearest_scope};
pub use formatter::{compose_full_address, full_address_label, FieldTexts};
