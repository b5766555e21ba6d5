//! # Connector Layer
//!
//! Implementations of the application interfaces:
//! - File discovery (walkdir over the local filesystem)
//! - Header rendering (C++ raw string literals)

pub mod adapter;

pub use adapter::*;
