use std::path::{Path, PathBuf};

use crate::domain::{DomainError, SourceFile};

/// Headers found directly inside one directory of the output tree.
pub type DirectoryHeaders = (PathBuf, Vec<PathBuf>);

/// Walks directory trees for conversion inputs and generated headers.
pub trait FileDiscovery: Send + Sync {
    /// Lazily yield every `.json` file below `root`, recursively.
    ///
    /// Unreadable entries surface as `Err` items; the walk is not restartable.
    fn json_sources(
        &self,
        root: &Path,
    ) -> Box<dyn Iterator<Item = Result<SourceFile, DomainError>>>;

    /// List every directory below `root` (including `root`) that directly
    /// contains `.h` files, in walk order, with those files in walk order.
    fn headers_by_directory(&self, root: &Path) -> Result<Vec<DirectoryHeaders>, DomainError>;
}
