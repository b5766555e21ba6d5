//! # Domain Layer
//!
//! Core models, identifier rules, and JSON text handling.
//! This layer is independent of the filesystem walker and output format.

mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
