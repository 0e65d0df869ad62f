pub mod args;

pub use args::normalize_args;
