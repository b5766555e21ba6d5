use std::sync::Arc;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info};

use super::{CombineByDirectoryUseCase, CombineHeadersUseCase, ConvertFileUseCase};
use crate::application::{FileDiscovery, HeaderRenderer};
use crate::domain::{DomainError, FileOutcome, GeneratorConfig, RunReport};

/// Full pipeline: discover, convert each file, then the requested aggregations.
pub struct GenerateHeadersUseCase {
    discovery: Arc<dyn FileDiscovery>,
    converter: ConvertFileUseCase,
    combiner: CombineHeadersUseCase,
    directory_combiner: CombineByDirectoryUseCase,
    show_progress: bool,
}

impl GenerateHeadersUseCase {
    pub fn new(discovery: Arc<dyn FileDiscovery>, renderer: Arc<dyn HeaderRenderer>) -> Self {
        Self {
            discovery: discovery.clone(),
            converter: ConvertFileUseCase::new(renderer.clone()),
            combiner: CombineHeadersUseCase::new(renderer.clone()),
            directory_combiner: CombineByDirectoryUseCase::new(discovery, renderer),
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Per-file and per-aggregation failures are recorded in the report.
    /// Failing to create the output root or to walk the input aborts the
    /// run; headers already written stay in place.
    pub fn execute(&self, config: &GeneratorConfig) -> Result<RunReport, DomainError> {
        let start_time = Instant::now();
        let output_root = config.output_root();

        std::fs::create_dir_all(output_root).map_err(|e| DomainError::io(output_root, e))?;

        let sources = self
            .discovery
            .json_sources(config.input_root())
            .collect::<Result<Vec<_>, _>>()?;
        info!("Found {} JSON file(s) to convert", sources.len());

        let progress_bar = self.progress_bar(sources.len() as u64);
        let mut report = RunReport::new();

        for source in sources {
            progress_bar.set_message(source.relative_path().display().to_string());

            let result = self
                .converter
                .execute(&source, output_root, config.container());
            match &result {
                Ok(artifact) => info!("Generated {}", artifact.output_path().display()),
                Err(e) => error!("Failed to convert {}: {}", source.relative_path().display(), e),
            }

            report.record(FileOutcome::new(source, result));
            progress_bar.inc(1);
        }

        progress_bar.finish_with_message("done");

        if config.combine_all() {
            let combined_path = config.combined_all_path();
            let result = self.combiner.execute(
                &report.artifact_paths(),
                &combined_path,
                config.container(),
            );
            if let Err(e) = &result {
                error!("Failed to write combined header {}: {}", combined_path.display(), e);
            }
            report.set_combined_all(result);
        }

        if config.combine_by_directory() {
            let result = self
                .directory_combiner
                .execute(output_root, output_root, config.container());
            if let Err(e) = &result {
                error!("Failed to write combined headers by directory: {}", e);
            }
            report.set_combined_by_directory(result);
        }

        info!(
            "Generation complete: {} generated, {} failed in {:.2}s",
            report.success_count(),
            report.failure_count(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(report)
    }

    fn progress_bar(&self, total: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let progress_bar = ProgressBar::new(total);
        if let Ok(style) = ProgressStyle::default_bar().template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
        ) {
            progress_bar.set_style(style.progress_chars("#>-"));
        }
        progress_bar
    }
}
