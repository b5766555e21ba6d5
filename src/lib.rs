pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    CombineByDirectoryUseCase, CombineHeadersUseCase, ConvertFileUseCase, DirectoryHeaders,
    FileDiscovery, GenerateHeadersUseCase, HeaderRenderer,
};

pub use connector::{CppHeaderRenderer, WalkdirFileDiscovery};

pub use domain::{
    capitalize, derive_identifier, parse_json, to_indented_json, AggregationGroup,
    ContainerKeyword, DomainError, FileOutcome, GeneratedArtifact, GeneratorConfig, RunReport,
    SourceFile, COMBINED_ALL_FILE_NAME,
};
