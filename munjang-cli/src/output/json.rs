//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use munjang_core::SplitResult;
use serde::Serialize;
use std::io::Write;

/// Collects every result and writes one pretty-printed JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    review_threshold: f64,
    reports: Vec<FileReport>,
}

/// Split result for one source, with the ordinals that need review
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub source: String,
    #[serde(flatten)]
    pub result: SplitResult,
    pub flagged: Vec<usize>,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W, review_threshold: f64) -> Self {
        Self {
            writer,
            review_threshold,
            reports: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_result(&mut self, source: &str, result: &SplitResult) -> Result<()> {
        let flagged = result
            .flagged(self.review_threshold)
            .iter()
            .map(|s| s.ordinal)
            .collect();
        self.reports.push(FileReport {
            source: source.to_string(),
            result: result.clone(),
            flagged,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.reports)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use munjang_core::Splitter;

    #[test]
    fn test_json_document() {
        let result = Splitter::new().split("Fine. The meeting ran long.", None);
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, 0.7);
            formatter.format_result("notes.txt", &result).unwrap();
            formatter.finish().unwrap();
        }

        let json: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        let report = &json[0];
        assert_eq!(report["source"], "notes.txt");
        assert_eq!(report["method"], "rule_based");
        assert_eq!(report["sentences"].as_array().unwrap().len(), 2);
        assert_eq!(report["sentences"][0]["ordinal"], 1);
        assert_eq!(report["sentences"][0]["issues"][0], "sentence too short");
        // 0.9 is not below 0.7
        assert_eq!(report["flagged"], serde_json::json!([]));
    }

    #[test]
    fn test_flagged_ordinals() {
        let result = Splitter::new().split("All good here today. no end (", None);
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, 0.7);
            formatter.format_result("-", &result).unwrap();
            formatter.finish().unwrap();
        }

        let json: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(json[0]["flagged"], serde_json::json!([1]));
    }

    #[test]
    fn test_empty_run_is_empty_array() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, 0.7);
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap(), "[]\n");
    }
}
