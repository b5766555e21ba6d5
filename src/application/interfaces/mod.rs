mod file_discovery;
mod header_renderer;

pub use file_discovery::*;
pub use header_renderer::*;
