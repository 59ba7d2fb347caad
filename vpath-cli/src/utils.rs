//! Utility functions for CLI operations.
//!
//! This module provides the pieces every command shares: global options,
//! configuration loading, and printing a [`Report`] in the selected format.

use crate::error::CliError;
use log::debug;
use vpath::config::OutputFormat;
use vpath::output::{Outcome, Report};
use vpath::{Config, ConfigBuilder, Error as LibError, OsKind, PathContext};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Path semantics to emulate.
    pub os: Option<OsKind>,

    /// Output format override.
    pub format: Option<OutputFormat>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let overrides = Config {
        os: global.os,
        output_format: global.format,
    };

    ConfigBuilder::new()
        .with_config(overrides)
        .build()
        .map_err(|e| match e {
            LibError::Io(io) => CliError::Io(io),
            other => CliError::Config(other.to_string()),
        })
}

/// Resolved settings for one command invocation.
#[derive(Debug, Clone, Copy)]
pub struct Session {
    /// Path semantics in effect.
    pub ctx: PathContext,
    format: OutputFormat,
}

impl Session {
    /// Load configuration and settle the path semantics and output format.
    pub fn load(global: &GlobalOptions) -> Result<Self, CliError> {
        let config = load_configuration(global)?;
        let session = Self::from_config(&config);
        debug!(
            "using {} semantics, {} output",
            session.ctx.os(),
            session.format
        );
        Ok(session)
    }

    /// Build a session straight from a configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            ctx: config.context(),
            format: config.output_format(),
        }
    }

    /// Format the result of `operation` over `input`.
    pub fn render<I, S>(&self, operation: &str, input: I, result: Outcome) -> Result<String, CliError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let report = Report::new(operation, self.ctx.os(), input, result);
        Ok(self.format.create_formatter().format(&report)?)
    }

    /// Print the result of `operation` over `input` to stdout.
    pub fn emit<I, S>(&self, operation: &str, input: I, result: Outcome) -> Result<(), CliError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let output = self.render(operation, input, result)?;
        if !output.is_empty() {
            println!("{output}");
        }
        Ok(())
    }
}
