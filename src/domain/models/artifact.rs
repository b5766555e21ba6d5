use std::path::{Path, PathBuf};

use super::capitalize;

pub const ARTIFACT_SUFFIX: &str = ".h";

/// A header written for one source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    identifier: String,
    literal_body: String,
    output_path: PathBuf,
}

impl GeneratedArtifact {
    pub fn new(identifier: String, literal_body: String, output_path: PathBuf) -> Self {
        Self {
            identifier,
            literal_body,
            output_path,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Capitalized identifier used as the container name.
    pub fn container_name(&self) -> String {
        capitalize(&self.identifier)
    }

    /// Escaped JSON text embedded in the raw literal.
    pub fn literal_body(&self) -> &str {
        &self.literal_body
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn file_name_for(identifier: &str) -> String {
        format!("{}{}", identifier, ARTIFACT_SUFFIX)
    }

    pub fn is_artifact_path(path: &Path) -> bool {
        path.file_name()
            .map(|name| name.to_string_lossy().ends_with(ARTIFACT_SUFFIX))
            .unwrap_or(false)
    }
}
