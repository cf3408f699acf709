//! # Ports Module
//!
//! Hexagonal architecture ports (inbound form API, outbound presentation
//! surface).

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
