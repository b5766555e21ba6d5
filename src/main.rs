use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use json2cpp::cli::{Commands, ConfigFile};
use json2cpp::{
    CombineByDirectoryUseCase, CombineHeadersUseCase, CppHeaderRenderer, FileDiscovery,
    GenerateHeadersUseCase, HeaderRenderer, RunReport, WalkdirFileDiscovery,
    COMBINED_ALL_FILE_NAME,
};

#[derive(Parser)]
#[command(name = "json2cpp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log warnings and errors, no progress bar
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// JSON settings file; command-line values take precedence
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config_file = cli
        .config
        .as_deref()
        .map(ConfigFile::load)
        .transpose()?;

    let discovery: Arc<dyn FileDiscovery> = Arc::new(WalkdirFileDiscovery::new());
    let renderer: Arc<dyn HeaderRenderer> = Arc::new(CppHeaderRenderer::new());

    match cli.command {
        Commands::Generate(args) => {
            let config = args.into_config(config_file)?;
            info!("Selected JSON folder: {}", config.input_root().display());
            info!("Selected output folder: {}", config.output_root().display());

            let use_case =
                GenerateHeadersUseCase::new(discovery, renderer).with_progress(!cli.quiet);
            let report = use_case
                .execute(&config)
                .context("An error occurred while generating header files")?;

            print_summary(&report);

            if report.failure_count() > 0 {
                bail!("{} file(s) failed to convert", report.failure_count());
            }
            if report.has_failures() {
                bail!("Combining header files failed");
            }
        }

        Commands::Combine(args) => {
            let request = args.into_request(config_file)?;
            let directory_combiner = CombineByDirectoryUseCase::new(discovery, renderer.clone());

            if request.all {
                let artifacts = directory_combiner
                    .collect_artifacts(&request.output_root, &request.output_root)?;
                let combined = CombineHeadersUseCase::new(renderer).execute(
                    &artifacts,
                    &request.output_root.join(COMBINED_ALL_FILE_NAME),
                    request.container,
                )?;
                println!("Combined header: {}", combined.display());
            }

            if request.by_directory {
                let written = directory_combiner.execute(
                    &request.output_root,
                    &request.output_root,
                    request.container,
                )?;
                println!("Combined headers by directory: {}", written.len());
                for path in written {
                    println!("  {}", path.display());
                }
            }
        }
    }

    Ok(())
}

fn print_summary(report: &RunReport) {
    println!(
        "Generated {} header file(s), {} failed",
        report.success_count(),
        report.failure_count()
    );

    for outcome in report.outcomes() {
        if let Err(e) = outcome.result() {
            println!("  error: {}: {}", outcome.source().relative_path().display(), e);
        }
    }

    match report.combined_all() {
        Some(Ok(path)) => println!("Combined header: {}", path.display()),
        Some(Err(e)) => println!("Combined header failed: {}", e),
        None => {}
    }

    match report.combined_by_directory() {
        Some(Ok(paths)) => println!("Combined headers by directory: {}", paths.len()),
        Some(Err(e)) => println!("Combined headers by directory failed: {}", e),
        None => {}
    }
}
