use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{ContainerKeyword, DomainError};

/// Optional JSON settings file; command-line values take precedence.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub combine_all: Option<bool>,
    pub combine_by_directory: Option<bool>,
    pub container: Option<ContainerKeyword>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self, DomainError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainError::config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;
        Self::from_json(&content).map_err(|e| match e {
            DomainError::ConfigError(msg) => {
                DomainError::config(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    pub fn from_json(content: &str) -> Result<Self, DomainError> {
        serde_json::from_str(content)
            .map_err(|e| DomainError::config(format!("Invalid config file: {}", e)))
    }
}
