//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use munjang_core::SplitResult;
use std::io::Write;

/// One sentence per line, its translation indented on the next line
pub struct TextFormatter<W: Write> {
    writer: W,
    show_headers: bool,
    results_written: usize,
}

impl<W: Write> TextFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            show_headers: false,
            results_written: 0,
        }
    }

    /// Print a `==> source <==` header before each result
    pub fn with_headers(mut self, show_headers: bool) -> Self {
        self.show_headers = show_headers;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_result(&mut self, source: &str, result: &SplitResult) -> Result<()> {
        if self.show_headers {
            if self.results_written > 0 {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "==> {source} <==")?;
        }

        for sentence in &result.sentences {
            writeln!(self.writer, "{}", sentence.text)?;
            if let Some(translation) = &sentence.translation {
                writeln!(self.writer, "\t{translation}")?;
            }
        }

        self.results_written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
