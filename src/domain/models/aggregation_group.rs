use std::path::{Path, PathBuf};

pub const COMBINED_ALL_FILE_NAME: &str = "combined.h";

/// Artifacts concatenated into one combined header, in walk order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationGroup {
    combined_path: PathBuf,
    members: Vec<PathBuf>,
}

impl AggregationGroup {
    pub fn new(combined_path: PathBuf) -> Self {
        Self {
            combined_path,
            members: Vec::new(),
        }
    }

    pub fn with_members(mut self, members: Vec<PathBuf>) -> Self {
        self.members = members;
        self
    }

    pub fn combined_path(&self) -> &Path {
        &self.combined_path
    }

    pub fn members(&self) -> &[PathBuf] {
        &self.members
    }

    /// Name of the per-directory combined header for a directory base name.
    pub fn directory_file_name(dir_base_name: &str) -> String {
        format!("combined{}.h", dir_base_name)
    }
}
