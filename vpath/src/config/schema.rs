//! Configuration schema definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::os::{OsKind, PathContext};

/// Complete configuration structure.
///
/// Every field is optional so that several sources can be layered on top of
/// each other; unset fields fall back to the next source down.
///
/// # Examples
///
/// ```
/// use vpath::config::{Config, OutputFormat};
/// use vpath::OsKind;
///
/// let config: Config = serde_yaml::from_str("os: windows\noutput_format: json\n").unwrap();
/// assert_eq!(config.os, Some(OsKind::Windows));
/// assert_eq!(config.output_format, Some(OutputFormat::Json));
/// assert!(config.context().is_windows());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path semantics to emulate. Defaults to the host.
    pub os: Option<OsKind>,

    /// How the command-line tool prints results.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// The path context selected by this configuration.
    #[must_use]
    pub fn context(&self) -> PathContext {
        self.os.map_or_else(PathContext::host, PathContext::new)
    }

    /// The output format, defaulting to text.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

/// Output format for command results.
///
/// # Examples
///
/// ```
/// use vpath::config::OutputFormat;
///
/// let format: OutputFormat = "JSON".parse().unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One value per line.
    #[default]
    Text,
    /// A JSON document.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid output format: {s} (expected text or json)")),
        }
    }
}
