//! # Address Subsystems Test Suite
//!
//! Unified test crate for flows that cross crate boundaries.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── flows.rs       # resolver + mock client → passport address
//!     └── http_flow.rs   # resolver + HTTP client against a stub service
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p tp-tests
//! cargo test -p tp-tests integration::http_flow
//! ```

#![allow(dead_code)]

pub mod integration;
