use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::application::HeaderRenderer;
use crate::domain::{
    derive_identifier, parse_json, to_indented_json, ContainerKeyword, DomainError,
    GeneratedArtifact, SourceFile,
};

/// Converts a single JSON document into a header under the output root.
pub struct ConvertFileUseCase {
    renderer: Arc<dyn HeaderRenderer>,
}

impl ConvertFileUseCase {
    pub fn new(renderer: Arc<dyn HeaderRenderer>) -> Self {
        Self { renderer }
    }

    pub fn execute(
        &self,
        source: &SourceFile,
        output_root: &Path,
        keyword: ContainerKeyword,
    ) -> Result<GeneratedArtifact, DomainError> {
        let bytes = std::fs::read(source.path()).map_err(|e| DomainError::io(source.path(), e))?;
        let value = parse_json(source.path(), &bytes)?;

        let literal_body = self.renderer.escape_literal(&to_indented_json(&value)?);
        let identifier = derive_identifier(&source.stem());

        let output_dir = output_dir_for(source, output_root);
        std::fs::create_dir_all(&output_dir).map_err(|e| DomainError::io(&output_dir, e))?;

        let output_path = output_dir.join(GeneratedArtifact::file_name_for(&identifier));
        let artifact = GeneratedArtifact::new(identifier, literal_body, output_path);

        let rendered = self.renderer.render_artifact(
            keyword,
            &artifact.container_name(),
            artifact.literal_body(),
        );
        std::fs::write(artifact.output_path(), rendered)
            .map_err(|e| DomainError::io(artifact.output_path(), e))?;

        debug!(
            "Converted {} -> {}",
            source.relative_path().display(),
            artifact.output_path().display()
        );

        Ok(artifact)
    }
}

/// Mirrors the source's relative directory, lowercased, under `output_root`.
fn output_dir_for(source: &SourceFile, output_root: &Path) -> PathBuf {
    let relative_dir = source.relative_dir().to_string_lossy().to_lowercase();
    if relative_dir.is_empty() {
        output_root.to_path_buf()
    } else {
        output_root.join(relative_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::CppHeaderRenderer;
    use tempfile::tempdir;

    fn use_case() -> ConvertFileUseCase {
        ConvertFileUseCase::new(Arc::new(CppHeaderRenderer::new()))
    }

    fn write_source(root: &Path, relative: &str, content: &str) -> SourceFile {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, content).unwrap();
        SourceFile::from_root(root, path)
    }

    #[test]
    fn test_writes_header_with_exact_shape() {
        let input = tempdir().unwrap();
        let output = tempdir().unwrap();
        let source = write_source(input.path(), "app-config.json", r#"{"debug": true}"#);

        let artifact = use_case()
            .execute(&source, output.path(), ContainerKeyword::Struct)
            .unwrap();

        assert_eq!(artifact.identifier(), "app_config");
        assert_eq!(artifact.output_path(), output.path().join("app_config.h"));

        let written = std::fs::read_to_string(artifact.output_path()).unwrap();
        assert_eq!(
            written,
            "struct App_config {\n    const char* jsonData = R\"(\n{\n    \"debug\": true\n}\n)\";\n};\n"
        );
    }

    #[test]
    fn test_lowercases_relative_directory() {
        let input = tempdir().unwrap();
        let output = tempdir().unwrap();
        let source = write_source(input.path(), "Levels/World1/Map.json", "[1]");

        let artifact = use_case()
            .execute(&source, output.path(), ContainerKeyword::Class)
            .unwrap();

        assert_eq!(
            artifact.output_path(),
            output.path().join("levels").join("world1").join("map.h")
        );
        let written = std::fs::read_to_string(artifact.output_path()).unwrap();
        assert!(written.starts_with("class Map {\n"));
    }

    #[test]
    fn test_escapes_raw_literal_delimiter() {
        let input = tempdir().unwrap();
        let output = tempdir().unwrap();
        let source = write_source(input.path(), "smiley.json", r#"{"face": ":)"}"#);

        let artifact = use_case()
            .execute(&source, output.path(), ContainerKeyword::Struct)
            .unwrap();

        assert_eq!(artifact.literal_body(), "{\n    \"face\": \":)\"\n\"\n}");
    }

    #[test]
    fn test_overwrites_existing_header() {
        let input = tempdir().unwrap();
        let output = tempdir().unwrap();
        std::fs::write(output.path().join("a.h"), "stale").unwrap();
        let source = write_source(input.path(), "a.json", "1");

        let artifact = use_case()
            .execute(&source, output.path(), ContainerKeyword::Union)
            .unwrap();

        let written = std::fs::read_to_string(artifact.output_path()).unwrap();
        assert!(written.starts_with("union A {"));
        assert!(!written.contains("stale"));
    }

    #[test]
    fn test_malformed_json_writes_nothing() {
        let input = tempdir().unwrap();
        let output = tempdir().unwrap();
        let source = write_source(input.path(), "nested/bad.json", "{ not json");

        let err = use_case()
            .execute(&source, output.path(), ContainerKeyword::Struct)
            .unwrap_err();

        assert!(err.is_parse_error());
        assert_eq!(err.path(), Some(source.path()));
        assert!(!output.path().join("nested").exists());
    }

    #[test]
    fn test_missing_source_is_io_error() {
        let input = tempdir().unwrap();
        let output = tempdir().unwrap();
        let source = SourceFile::from_root(input.path(), input.path().join("gone.json"));

        let err = use_case()
            .execute(&source, output.path(), ContainerKeyword::Struct)
            .unwrap_err();

        assert!(err.is_io_error());
    }
}
