//! # Application Layer
//!
//! Use cases orchestrating discovery, conversion, and aggregation through the
//! interfaces implemented by the connector layer.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
