//! Domain services for reading and re-serializing JSON text.

mod json_text;

pub use json_text::*;
