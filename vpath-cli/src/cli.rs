//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BaseCommand, CleanCommand, CompletionsCommand, ComponentsCommand, DirCommand, ExtCommand,
    GlobCommand, IsAbsCommand, JoinCommand, MatchCommand, RelCommand, SplitCommand,
    VolumeCommand,
};
use crate::utils::GlobalOptions;
use clap::{Parser, Subcommand};
use vpath::config::OutputFormat;
use vpath::OsKind;

/// Lexical path manipulation and globbing under POSIX or Windows semantics.
#[derive(Parser)]
#[command(name = "vpath")]
#[command(
    version,
    about = "Lexical path manipulation under POSIX or Windows semantics",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path semantics to emulate: linux, darwin, windows or unknown
    #[arg(long, value_name = "KIND", global = true, env = "VPATH_OS")]
    pub os: Option<OsKind>,

    /// Output format: text or json
    #[arg(long, value_name = "FORMAT", global = true, env = "VPATH_OUTPUT_FORMAT")]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Options shared by every subcommand.
    pub fn global_options(&self) -> GlobalOptions {
        GlobalOptions {
            verbose: self.verbose,
            quiet: self.quiet,
            os: self.os,
            format: self.format,
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Clean a path lexically
    Clean(CleanCommand),

    /// Join path elements and clean the result
    Join(JoinCommand),

    /// Split a path into directory and file
    Split(SplitCommand),

    /// Print all but the last element of a path
    Dir(DirCommand),

    /// Print the last element of a path
    Base(BaseCommand),

    /// Print the extension of a path
    Ext(ExtCommand),

    /// Express a target path relative to a base path
    Rel(RelCommand),

    /// Print the volume name of a path
    Volume(VolumeCommand),

    /// Report whether a path is absolute
    IsAbs(IsAbsCommand),

    /// Match a name against a shell pattern
    Match(MatchCommand),

    /// Expand a glob pattern against the filesystem
    Glob(GlobCommand),

    /// List the volume and components of an absolute path
    Components(ComponentsCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

impl Command {
    /// Run the selected subcommand.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), crate::error::CliError> {
        match self {
            Command::Clean(cmd) => cmd.execute(global),
            Command::Join(cmd) => cmd.execute(global),
            Command::Split(cmd) => cmd.execute(global),
            Command::Dir(cmd) => cmd.execute(global),
            Command::Base(cmd) => cmd.execute(global),
            Command::Ext(cmd) => cmd.execute(global),
            Command::Rel(cmd) => cmd.execute(global),
            Command::Volume(cmd) => cmd.execute(global),
            Command::IsAbs(cmd) => cmd.execute(global),
            Command::Match(cmd) => cmd.execute(global),
            Command::Glob(cmd) => cmd.execute(global),
            Command::Components(cmd) => cmd.execute(global),
            Command::Completions(cmd) => cmd.execute(global),
        }
    }
}
