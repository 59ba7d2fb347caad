//! Rendering of operation results for front ends.
//!
//! A [`Report`] records which operation ran, under which semantics, on which
//! inputs, and what it produced. Formatters turn a report into text for a
//! terminal or a JSON document for scripts.

mod formatters;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::os::OsKind;
use crate::Result;

pub use formatters::{JsonFormatter, TextFormatter};

/// Trait for formatting reports into different output formats.
pub trait OutputFormatter {
    /// Format `report` into a string without a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be serialized.
    fn format(&self, report: &Report) -> Result<String>;
}

/// The value an operation produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    /// A single path or string.
    Path(String),
    /// A path split into directory and file parts.
    Split {
        /// Directory part.
        dir: String,
        /// File part.
        file: String,
    },
    /// A yes/no answer such as `is_abs` or a pattern match.
    Flag(bool),
    /// A list of paths, such as glob matches.
    Paths(Vec<String>),
    /// The volume and components of a path.
    Components {
        /// Volume name, empty under POSIX semantics.
        volume: String,
        /// Components after the volume, in order.
        parts: Vec<String>,
    },
}

/// An operation together with its inputs and result.
///
/// # Examples
///
/// ```
/// use vpath::config::OutputFormat;
/// use vpath::output::{Outcome, Report};
/// use vpath::OsKind;
///
/// let report = Report::new("clean", OsKind::Linux, ["a//b/"], Outcome::Path("a/b".into()));
/// let text = OutputFormat::Text.create_formatter().format(&report).unwrap();
/// assert_eq!(text, "a/b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Operation name, e.g. `clean`.
    pub operation: String,
    /// Semantics the operation ran under.
    pub os: OsKind,
    /// Arguments, in order.
    pub input: Vec<String>,
    /// What the operation produced.
    pub result: Outcome,
}

impl Report {
    /// Creates a report.
    pub fn new<I, S>(operation: &str, os: OsKind, input: I, result: Outcome) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            operation: operation.to_string(),
            os,
            input: input.into_iter().map(Into::into).collect(),
            result,
        }
    }
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}
