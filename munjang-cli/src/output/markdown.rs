//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use munjang_core::SplitResult;
use std::io::Write;

/// Numbered sentence list per source, with review notes
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    review_threshold: f64,
    sentence_count: usize,
    flagged_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    pub fn new(writer: W, review_threshold: f64) -> Self {
        Self {
            writer,
            review_threshold,
            sentence_count: 0,
            flagged_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_result(&mut self, source: &str, result: &SplitResult) -> Result<()> {
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;

        for sentence in &result.sentences {
            let review = sentence.needs_review(self.review_threshold);
            let marker = if review { " **(review)**" } else { "" };
            writeln!(
                self.writer,
                "{}. {}{marker}",
                sentence.ordinal, sentence.text
            )?;

            if let Some(translation) = &sentence.translation {
                writeln!(self.writer, "   > {translation}")?;
            }
            if !sentence.issues.is_empty() {
                writeln!(
                    self.writer,
                    "   *confidence {:.2}: {}*",
                    sentence.confidence,
                    sentence.issues.join("; ")
                )?;
            }

            self.sentence_count += 1;
            if review {
                self.flagged_count += 1;
            }
        }

        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Overall confidence: {:.2}",
            result.overall_confidence
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total sentences: {}, flagged for review: {}*",
            self.sentence_count, self.flagged_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
