//! Environment variable handling for configuration overrides.

use std::env;

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::os::OsKind;

/// Environment variable selecting the emulated operating system.
pub const OS_ENV: &str = "VPATH_OS";

/// Environment variable selecting the output format.
pub const OUTPUT_FORMAT_ENV: &str = "VPATH_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use vpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply `VPATH_*` environment variable overrides to `config`.
    ///
    /// Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if a variable holds an unrecognized
    /// value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(val) = Self::var(OS_ENV) {
            config.os = Some(Self::parse::<OsKind>(OS_ENV, &val)?);
        }

        if let Some(val) = Self::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(Self::parse::<OutputFormat>(OUTPUT_FORMAT_ENV, &val)?);
        }

        Ok(())
    }

    fn var(name: &str) -> Option<String> {
        env::var(name).ok().filter(|v| !v.trim().is_empty())
    }

    fn parse<T: std::str::FromStr<Err = String>>(field: &str, value: &str) -> Result<T> {
        value.trim().parse().map_err(|message| Error::Validation {
            field: field.into(),
            message,
        })
    }
}
