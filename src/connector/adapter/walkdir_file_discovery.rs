use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::application::{DirectoryHeaders, FileDiscovery};
use crate::domain::{DomainError, GeneratedArtifact, SourceFile};

/// Directory walker over the local filesystem.
///
/// Entries within a directory are visited in file-name order, so repeated
/// runs over the same tree produce identical combined headers.
pub struct WalkdirFileDiscovery;

impl WalkdirFileDiscovery {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WalkdirFileDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

impl FileDiscovery for WalkdirFileDiscovery {
    fn json_sources(
        &self,
        root: &Path,
    ) -> Box<dyn Iterator<Item = Result<SourceFile, DomainError>>> {
        let root = root.to_path_buf();
        let walker = WalkDir::new(&root).sort_by_file_name().into_iter();

        Box::new(walker.filter_map(move |entry| match entry {
            Ok(entry) => {
                let path = entry.path();
                if path.is_file() && SourceFile::is_source_path(path) {
                    debug!("Discovered {}", path.display());
                    Some(Ok(SourceFile::from_root(&root, entry.into_path())))
                } else {
                    None
                }
            }
            Err(e) => Some(Err(walk_error(&root, e))),
        }))
    }

    fn headers_by_directory(&self, root: &Path) -> Result<Vec<DirectoryHeaders>, DomainError> {
        let mut directories: Vec<DirectoryHeaders> = Vec::new();
        let mut index: HashMap<PathBuf, usize> = HashMap::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| walk_error(root, e))?;
            let path = entry.path();

            if entry.file_type().is_dir() {
                index.insert(path.to_path_buf(), directories.len());
                directories.push((path.to_path_buf(), Vec::new()));
            } else if path.is_file() && GeneratedArtifact::is_artifact_path(path) {
                let slot = path.parent().and_then(|parent| index.get(parent).copied());
                if let Some(slot) = slot {
                    directories[slot].1.push(path.to_path_buf());
                }
            }
        }

        Ok(directories
            .into_iter()
            .filter(|(_, headers)| !headers.is_empty())
            .collect())
    }
}

fn walk_error(root: &Path, err: walkdir::Error) -> DomainError {
    let path = err.path().unwrap_or(root).to_path_buf();
    DomainError::io(path, err.into())
}
