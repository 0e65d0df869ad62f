pub mod fs;

pub use fs::{copy_file, copy_stream, file_exists, list_documents};
