//! Opening sources as splitter inputs

use anyhow::{Context, Result};
use munjang_core::Input;
use std::fs;
use std::path::Path;

use crate::error::CliError;

/// Argument value that stands for standard input
pub const STDIN_MARKER: &str = "-";

/// Opens files (or stdin) as core `Input`s
///
/// Decoding happens in the core so non-UTF-8 bytes surface as an
/// `InvalidInput` error rather than being replaced.
pub struct FileReader;

impl FileReader {
    /// Open a path argument, `-` meaning stdin
    pub fn open(arg: &str) -> Result<Input> {
        if arg == STDIN_MARKER {
            return Ok(Input::from_reader(std::io::stdin()));
        }
        Self::open_path(Path::new(arg))
    }

    /// Open a file that must exist
    pub fn open_path(path: &Path) -> Result<Input> {
        if !path.is_file() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        Ok(Input::from_file(path))
    }

    /// Size of a file in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }
}
