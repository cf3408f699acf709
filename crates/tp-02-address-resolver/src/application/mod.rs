//! # Application Module
//!
//! Application service driving the cascade between the suggestion client
//! and the presentation surface.

pub mod service;

pub use service::CascadingResolver;
