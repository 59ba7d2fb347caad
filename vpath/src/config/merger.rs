//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use vpath::config::{Config, ConfigMerger};
/// use vpath::OsKind;
///
/// let low = Config { os: Some(OsKind::Linux), ..Default::default() };
/// let high = Config { os: Some(OsKind::Windows), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.os, Some(OsKind::Windows));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge configuration sources, given lowest precedence first.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge `source` into `target`; set fields in `source` win.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.os.is_some() {
            target.os = source.os;
        }
        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
