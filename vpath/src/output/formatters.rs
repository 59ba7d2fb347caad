//! Output formatter implementations.

use crate::{Error, Result};

use super::{Outcome, OutputFormatter, Report};

/// Plain text: one value per line.
///
/// A split prints the directory and the file on separate lines; lists and
/// components print one entry per line and nothing when empty.
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        Ok(match &report.result {
            Outcome::Path(path) => path.clone(),
            Outcome::Split { dir, file } => format!("{dir}\n{file}"),
            Outcome::Flag(flag) => flag.to_string(),
            Outcome::Paths(paths) => paths.join("\n"),
            Outcome::Components { parts, .. } => parts.join("\n"),
        })
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        serde_json::to_string_pretty(report).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}
