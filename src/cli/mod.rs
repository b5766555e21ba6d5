//! Command-line surface: subcommands and their resolution into run settings.

mod config_file;

use std::path::PathBuf;

use clap::{Args, Subcommand};

pub use config_file::*;

use crate::domain::{ContainerKeyword, DomainError, GeneratorConfig};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert every JSON file under the input folder into a header
    Generate(GenerateArgs),

    /// Combine headers already present in an output folder
    Combine(CombineArgs),
}

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Folder containing the JSON files
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Folder receiving the generated headers
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write <output>/combined.h holding every generated header
    #[arg(long)]
    pub combine_all: bool,

    /// Also write one combined<dir>.h per output directory
    #[arg(long)]
    pub combine_by_directory: bool,

    /// Container keyword: struct, class, union or namespace
    #[arg(long)]
    pub container: Option<ContainerKeyword>,
}

impl GenerateArgs {
    pub fn into_config(self, file: Option<ConfigFile>) -> Result<GeneratorConfig, DomainError> {
        let file = file.unwrap_or_default();

        let input = self
            .input
            .or(file.input)
            .ok_or_else(|| DomainError::config("Please select a JSON input folder (--input)"))?;
        let output = self
            .output
            .or(file.output)
            .ok_or_else(|| DomainError::config("Please select an output folder (--output)"))?;

        Ok(GeneratorConfig::new(input, output)?
            .with_combine_all(self.combine_all || file.combine_all.unwrap_or(false))
            .with_combine_by_directory(
                self.combine_by_directory || file.combine_by_directory.unwrap_or(false),
            )
            .with_container(self.container.or(file.container).unwrap_or_default()))
    }
}

#[derive(Args, Debug, Default)]
pub struct CombineArgs {
    /// Folder holding previously generated headers
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write <output>/combined.h from every header in the folder
    #[arg(long)]
    pub all: bool,

    /// Write one combined<dir>.h per directory
    #[arg(long)]
    pub by_directory: bool,

    /// Container keyword: struct, class, union or namespace
    #[arg(long)]
    pub container: Option<ContainerKeyword>,
}

/// Resolved settings for a standalone aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombineRequest {
    pub output_root: PathBuf,
    pub all: bool,
    pub by_directory: bool,
    pub container: ContainerKeyword,
}

impl CombineArgs {
    pub fn into_request(self, file: Option<ConfigFile>) -> Result<CombineRequest, DomainError> {
        let file = file.unwrap_or_default();

        let output_root = self
            .output
            .or(file.output)
            .ok_or_else(|| DomainError::config("Please select an output folder (--output)"))?;
        if !output_root.is_dir() {
            return Err(DomainError::config(format!(
                "Output folder is not a directory: {}",
                output_root.display()
            )));
        }

        let all = self.all || file.combine_all.unwrap_or(false);
        let by_directory = self.by_directory || file.combine_by_directory.unwrap_or(false);
        if !all && !by_directory {
            return Err(DomainError::config(
                "Nothing to combine: pass --all and/or --by-directory",
            ));
        }

        Ok(CombineRequest {
            output_root,
            all,
            by_directory,
            container: self.container.or(file.container).unwrap_or_default(),
        })
    }
}
