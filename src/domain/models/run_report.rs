use std::path::PathBuf;

use super::{GeneratedArtifact, SourceFile};
use crate::domain::DomainError;

/// Result of converting one source file.
#[derive(Debug)]
pub struct FileOutcome {
    source: SourceFile,
    result: Result<GeneratedArtifact, DomainError>,
}

impl FileOutcome {
    pub fn new(source: SourceFile, result: Result<GeneratedArtifact, DomainError>) -> Self {
        Self { source, result }
    }

    pub fn source(&self) -> &SourceFile {
        &self.source
    }

    pub fn result(&self) -> &Result<GeneratedArtifact, DomainError> {
        &self.result
    }
}

/// Everything a run produced, in processing order.
#[derive(Debug, Default)]
pub struct RunReport {
    outcomes: Vec<FileOutcome>,
    combined_all: Option<Result<PathBuf, DomainError>>,
    combined_by_directory: Option<Result<Vec<PathBuf>, DomainError>>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn set_combined_all(&mut self, result: Result<PathBuf, DomainError>) {
        self.combined_all = Some(result);
    }

    pub fn set_combined_by_directory(&mut self, result: Result<Vec<PathBuf>, DomainError>) {
        self.combined_by_directory = Some(result);
    }

    pub fn outcomes(&self) -> &[FileOutcome] {
        &self.outcomes
    }

    pub fn succeeded(&self) -> impl Iterator<Item = &GeneratedArtifact> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = (&SourceFile, &DomainError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (&o.source, e)))
    }

    /// Output paths of successful artifacts, in processing order.
    pub fn artifact_paths(&self) -> Vec<PathBuf> {
        self.succeeded()
            .map(|a| a.output_path().to_path_buf())
            .collect()
    }

    pub fn success_count(&self) -> usize {
        self.succeeded().count()
    }

    pub fn failure_count(&self) -> usize {
        self.failed().count()
    }

    pub fn combined_all(&self) -> Option<&Result<PathBuf, DomainError>> {
        self.combined_all.as_ref()
    }

    pub fn combined_by_directory(&self) -> Option<&Result<Vec<PathBuf>, DomainError>> {
        self.combined_by_directory.as_ref()
    }

    /// True when any file or any requested aggregation step failed.
    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
            || matches!(self.combined_all, Some(Err(_)))
            || matches!(self.combined_by_directory, Some(Err(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(name: &str) -> SourceFile {
        SourceFile::new(PathBuf::from(format!("/in/{}", name)), PathBuf::from(name))
    }

    fn artifact(id: &str) -> GeneratedArtifact {
        GeneratedArtifact::new(
            id.to_string(),
            "{}".to_string(),
            PathBuf::from(format!("/out/{}.h", id)),
        )
    }

    #[test]
    fn test_report_splits_successes_and_failures() {
        let mut report = RunReport::new();
        report.record(FileOutcome::new(source("a.json"), Ok(artifact("a"))));
        report.record(FileOutcome::new(
            source("b.json"),
            Err(DomainError::parse("/in/b.json", "EOF while parsing")),
        ));
        report.record(FileOutcome::new(source("c.json"), Ok(artifact("c"))));

        assert_eq!(report.success_count(), 2);
        assert_eq!(report.failure_count(), 1);
        assert!(report.has_failures());
        assert_eq!(
            report.artifact_paths(),
            vec![PathBuf::from("/out/a.h"), PathBuf::from("/out/c.h")]
        );

        let (failed_source, err) = report.failed().next().unwrap();
        assert_eq!(failed_source.relative_path(), std::path::Path::new("b.json"));
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_failed_aggregation_counts_as_failure() {
        let mut report = RunReport::new();
        report.record(FileOutcome::new(source("a.json"), Ok(artifact("a"))));
        assert!(!report.has_failures());

        report.set_combined_all(Ok(PathBuf::from("/out/combined.h")));
        assert!(!report.has_failures());

        report.set_combined_by_directory(Err(DomainError::config("boom")));
        assert!(report.has_failures());
    }
}
