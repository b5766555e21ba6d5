mod combine_by_directory;
mod combine_headers;
mod convert_file;
mod generate_headers;

pub use combine_by_directory::*;
pub use combine_headers::*;
pub use convert_file::*;
pub use generate_headers::*;
