mod aggregation_group;
mod artifact;
mod container_keyword;
mod generator_config;
mod identifier;
mod run_report;
mod source_file;

pub use aggregation_group::*;
pub use artifact::*;
pub use container_keyword::*;
pub use generator_config::*;
pub use identifier::*;
pub use run_report::*;
pub use source_file::*;
