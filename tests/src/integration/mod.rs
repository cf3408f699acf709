//! # Integration Tests
//!
//! Cross-subsystem flows: suggestion client (01) → address resolver (02) →
//! passport address (shared-types).

pub mod flows;
pub mod http_flow;
