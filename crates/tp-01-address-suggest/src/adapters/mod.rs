//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements the suggestion port over HTTP.

mod dadata;

pub use dadata::DaDataClient;
