//! Input handling: pattern resolution and source opening

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::{FileReader, STDIN_MARKER};
pub use glob_resolver::resolve_patterns;
