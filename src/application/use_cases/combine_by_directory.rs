use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use super::CombineHeadersUseCase;
use crate::application::{FileDiscovery, HeaderRenderer};
use crate::domain::{AggregationGroup, ContainerKeyword, DomainError, COMBINED_ALL_FILE_NAME};

/// Writes one `combined<dir>.h` per output directory holding headers.
pub struct CombineByDirectoryUseCase {
    discovery: Arc<dyn FileDiscovery>,
    combiner: CombineHeadersUseCase,
}

impl CombineByDirectoryUseCase {
    pub fn new(discovery: Arc<dyn FileDiscovery>, renderer: Arc<dyn HeaderRenderer>) -> Self {
        Self {
            discovery,
            combiner: CombineHeadersUseCase::new(renderer),
        }
    }

    /// Groups the headers of each directory under `output_root`.
    ///
    /// Combined headers this tool writes (the per-directory targets inside
    /// `combined_folder` and the combine-all file at the output root) are
    /// left out, so earlier combined output is never nested again.
    pub fn plan(
        &self,
        output_root: &Path,
        combined_folder: &Path,
    ) -> Result<Vec<AggregationGroup>, DomainError> {
        let directories = self.discovery.headers_by_directory(output_root)?;

        let targets: Vec<PathBuf> = directories
            .iter()
            .map(|(dir, _)| {
                combined_folder.join(AggregationGroup::directory_file_name(&dir_base_name(dir)))
            })
            .collect();

        let mut excluded: HashSet<PathBuf> = targets.iter().cloned().collect();
        excluded.insert(output_root.join(COMBINED_ALL_FILE_NAME));

        let mut groups = Vec::new();
        let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();

        for ((dir, headers), target) in directories.into_iter().zip(targets) {
            let members: Vec<PathBuf> = headers
                .into_iter()
                .filter(|h| !excluded.contains(h))
                .collect();
            if members.is_empty() {
                continue;
            }

            if let Some(previous) = claimed.insert(target.clone(), dir.clone()) {
                warn!(
                    "Directories {} and {} share the combined file {}; the later one overwrites it",
                    previous.display(),
                    dir.display(),
                    target.display()
                );
            }

            groups.push(AggregationGroup::new(target).with_members(members));
        }

        Ok(groups)
    }

    /// Every header under `output_root` in walk order, combined files excluded.
    pub fn collect_artifacts(
        &self,
        output_root: &Path,
        combined_folder: &Path,
    ) -> Result<Vec<PathBuf>, DomainError> {
        Ok(self
            .plan(output_root, combined_folder)?
            .into_iter()
            .flat_map(|group| group.members().to_vec())
            .collect())
    }

    /// Stops at the first group that fails to combine.
    pub fn execute(
        &self,
        output_root: &Path,
        combined_folder: &Path,
        keyword: ContainerKeyword,
    ) -> Result<Vec<PathBuf>, DomainError> {
        let groups = self.plan(output_root, combined_folder)?;

        std::fs::create_dir_all(combined_folder)
            .map_err(|e| DomainError::io(combined_folder, e))?;

        let mut written = Vec::with_capacity(groups.len());
        for group in &groups {
            written.push(self.combiner.execute_group(group, keyword)?);
        }

        info!("Generated {} combined file(s) by directory", written.len());
        Ok(written)
    }
}

/// Base name of a directory, resolving `.`-style paths through the filesystem.
fn dir_base_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .or_else(|| {
            dir.canonicalize()
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::{CppHeaderRenderer, WalkdirFileDiscovery};
    use tempfile::tempdir;

    fn use_case() -> CombineByDirectoryUseCase {
        CombineByDirectoryUseCase::new(
            Arc::new(WalkdirFileDiscovery::new()),
            Arc::new(CppHeaderRenderer::new()),
        )
    }

    fn write(path: &Path, content: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_one_group_per_directory() {
        let out = tempdir().unwrap();
        let root = out.path().join("out");
        write(&root.join("items/sword.h"), "struct Sword {};\n");
        write(&root.join("items/shield.h"), "struct Shield {};\n");
        write(&root.join("maps/town.h"), "struct Town {};\n");
        write(&root.join("maps/notes.txt"), "ignored");

        let groups = use_case().plan(&root, &root).unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].combined_path(), root.join("combineditems.h"));
        assert_eq!(
            groups[0].members(),
            &[root.join("items/shield.h"), root.join("items/sword.h")]
        );
        assert_eq!(groups[1].combined_path(), root.join("combinedmaps.h"));
        assert_eq!(groups[1].members(), &[root.join("maps/town.h")]);
    }

    #[test]
    fn test_previous_combined_files_are_excluded() {
        let out = tempdir().unwrap();
        let root = out.path().join("out");
        write(&root.join("top.h"), "struct Top {};\n");
        write(&root.join("combined.h"), "old combine-all");
        write(&root.join("combinedout.h"), "old root combine");
        write(&root.join("items/sword.h"), "struct Sword {};\n");
        write(&root.join("combineditems.h"), "old items combine");

        let groups = use_case().plan(&root, &root).unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].combined_path(), root.join("combinedout.h"));
        assert_eq!(groups[0].members(), &[root.join("top.h")]);
        assert_eq!(groups[1].members(), &[root.join("items/sword.h")]);
    }

    #[test]
    fn test_execute_writes_scoped_files() {
        let out = tempdir().unwrap();
        let root = out.path().join("out");
        write(&root.join("a/x.h"), "struct X {};\n");
        write(&root.join("a/b/y.h"), "struct Y {};\n");

        let written = use_case()
            .execute(&root, &root, ContainerKeyword::Class)
            .unwrap();

        assert_eq!(written, vec![root.join("combineda.h"), root.join("combinedb.h")]);

        let a = std::fs::read_to_string(root.join("combineda.h")).unwrap();
        assert!(a.starts_with("#pragma once\n\nclass Combined {\n"));
        assert!(a.contains("struct X {};"));
        assert!(!a.contains("struct Y {};"));

        let b = std::fs::read_to_string(root.join("combinedb.h")).unwrap();
        assert!(b.contains("struct Y {};"));
        assert!(!b.contains("struct X {};"));
    }

    #[test]
    fn test_same_base_name_later_directory_wins() {
        let out = tempdir().unwrap();
        let root = out.path().join("out");
        write(&root.join("a/items/x.h"), "struct X {};\n");
        write(&root.join("b/items/y.h"), "struct Y {};\n");

        let groups = use_case().plan(&root, &root).unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].combined_path(), root.join("combineditems.h"));
        assert_eq!(groups[0].members(), &[root.join("a/items/x.h")]);
        assert_eq!(groups[1].combined_path(), root.join("combineditems.h"));
        assert_eq!(groups[1].members(), &[root.join("b/items/y.h")]);

        use_case()
            .execute(&root, &root, ContainerKeyword::Struct)
            .unwrap();

        let combined = std::fs::read_to_string(root.join("combineditems.h")).unwrap();
        assert!(combined.contains("struct Y {};"));
        assert!(!combined.contains("struct X {};"));
    }

    #[test]
    fn test_collect_artifacts_flattens_in_walk_order() {
        let out = tempdir().unwrap();
        let root = out.path().join("out");
        write(&root.join("z.h"), "z");
        write(&root.join("a/y.h"), "y");
        write(&root.join("combined.h"), "old");

        let artifacts = use_case().collect_artifacts(&root, &root).unwrap();

        assert_eq!(artifacts, vec![root.join("z.h"), root.join("a/y.h")]);
    }
}
