mod cpp_header_renderer;
mod walkdir_file_discovery;

pub use cpp_header_renderer::*;
pub use walkdir_file_discovery::*;
