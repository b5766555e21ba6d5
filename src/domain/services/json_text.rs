use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

use crate::domain::DomainError;

const INDENT: &[u8] = b"    ";

/// Parses a JSON document; invalid UTF-8 is reported as a parse error too.
pub fn parse_json(path: &Path, bytes: &[u8]) -> Result<Value, DomainError> {
    serde_json::from_slice(bytes).map_err(|e| DomainError::parse(path, e.to_string()))
}

/// Serializes with 4-space indentation. Object key order, non-ASCII
/// characters and number literals are kept as they appeared in the source.
pub fn to_indented_json(value: &Value) -> Result<String, DomainError> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value
        .serialize(&mut serializer)
        .map_err(|e| DomainError::Io(e.into()))?;

    String::from_utf8(buf).map_err(|e| {
        DomainError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}
