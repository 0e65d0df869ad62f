pub mod topic;

pub use topic::{DOCUMENT_EXTENSION, Topic};
