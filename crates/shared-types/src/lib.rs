//! # Shared Types Crate
//!
//! Passport-side types shared across subsystems: the `Address` entity, the
//! flat `AddressFields` hand-off produced by the address form, and the
//! field-level validation errors shown to the user.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: The hand-off mapping is the only contract
//!   between the address form and the passport subsystem.
//! - **Blocking errors are field-scoped**: every validation error names the
//!   field it belongs to.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
