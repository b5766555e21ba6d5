use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::application::HeaderRenderer;
use crate::domain::{AggregationGroup, ContainerKeyword, DomainError};

/// Concatenates generated headers into one `Combined` container.
pub struct CombineHeadersUseCase {
    renderer: Arc<dyn HeaderRenderer>,
}

impl CombineHeadersUseCase {
    pub fn new(renderer: Arc<dyn HeaderRenderer>) -> Self {
        Self { renderer }
    }

    /// All inputs are read before the combined file is opened, so an
    /// unreadable input leaves no partial output behind.
    pub fn execute(
        &self,
        artifact_paths: &[PathBuf],
        combined_path: &Path,
        keyword: ContainerKeyword,
    ) -> Result<PathBuf, DomainError> {
        let parts = artifact_paths
            .iter()
            .map(|path| std::fs::read_to_string(path).map_err(|e| DomainError::io(path, e)))
            .collect::<Result<Vec<_>, _>>()?;

        let rendered = self.renderer.render_combined(keyword, &parts);
        std::fs::write(combined_path, rendered).map_err(|e| DomainError::io(combined_path, e))?;

        info!(
            "Combined {} header(s) into {}",
            parts.len(),
            combined_path.display()
        );
        debug!("Combined members: {:?}", artifact_paths);

        Ok(combined_path.to_path_buf())
    }

    pub fn execute_group(
        &self,
        group: &AggregationGroup,
        keyword: ContainerKeyword,
    ) -> Result<PathBuf, DomainError> {
        self.execute(group.members(), group.combined_path(), keyword)
    }
}
