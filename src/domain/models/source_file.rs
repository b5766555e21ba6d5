use std::path::{Path, PathBuf};

pub const SOURCE_SUFFIX: &str = ".json";

/// A `.json` document found below the input root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    relative_path: PathBuf,
}

impl SourceFile {
    pub fn new(path: PathBuf, relative_path: PathBuf) -> Self {
        Self {
            path,
            relative_path,
        }
    }

    /// Builds a source file from a walked path, relative to `root`.
    pub fn from_root(root: &Path, path: PathBuf) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.file_name().map(PathBuf::from).unwrap_or_default());
        Self::new(path, relative_path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// Directory part of the relative path; empty for files directly under the root.
    pub fn relative_dir(&self) -> &Path {
        self.relative_path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// File name without its final extension.
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// Matches on the file name suffix, case-sensitively.
    pub fn is_source_path(path: &Path) -> bool {
        path.file_name()
            .map(|name| name.to_string_lossy().ends_with(SOURCE_SUFFIX))
            .unwrap_or(false)
    }
}
