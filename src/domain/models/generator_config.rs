use std::path::{Path, PathBuf};

use super::{ContainerKeyword, COMBINED_ALL_FILE_NAME};
use crate::domain::DomainError;

/// Validated, immutable settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    input_root: PathBuf,
    output_root: PathBuf,
    combine_all: bool,
    combine_by_directory: bool,
    container: ContainerKeyword,
}

impl GeneratorConfig {
    /// The input root must be an existing directory; the output root is
    /// created by the run if absent.
    pub fn new(
        input_root: impl Into<PathBuf>,
        output_root: impl Into<PathBuf>,
    ) -> Result<Self, DomainError> {
        let input_root = input_root.into();
        let output_root = output_root.into();

        if input_root.as_os_str().is_empty() {
            return Err(DomainError::config("No JSON input folder selected"));
        }
        if output_root.as_os_str().is_empty() {
            return Err(DomainError::config("No output folder selected"));
        }
        if !input_root.is_dir() {
            return Err(DomainError::config(format!(
                "JSON input folder is not a directory: {}",
                input_root.display()
            )));
        }

        Ok(Self {
            input_root,
            output_root,
            combine_all: false,
            combine_by_directory: false,
            container: ContainerKeyword::default(),
        })
    }

    pub fn with_combine_all(mut self, combine_all: bool) -> Self {
        self.combine_all = combine_all;
        self
    }

    pub fn with_combine_by_directory(mut self, combine_by_directory: bool) -> Self {
        self.combine_by_directory = combine_by_directory;
        self
    }

    pub fn with_container(mut self, container: ContainerKeyword) -> Self {
        self.container = container;
        self
    }

    pub fn input_root(&self) -> &Path {
        &self.input_root
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    pub fn combine_all(&self) -> bool {
        self.combine_all
    }

    pub fn combine_by_directory(&self) -> bool {
        self.combine_by_directory
    }

    pub fn container(&self) -> ContainerKeyword {
        self.container
    }

    pub fn combined_all_path(&self) -> PathBuf {
        self.output_root.join(COMBINED_ALL_FILE_NAME)
    }
}
