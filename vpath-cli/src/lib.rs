//! Library exports for vpath-cli.
//!
//! The binary in `main.rs` is a thin wrapper over these modules; they are
//! exported so integration tests and benchmarks can reach the CLI definition.

pub mod cli;
pub mod commands;
pub mod error;
pub mod host_fs;
pub mod utils;

pub use cli::Cli;
pub use error::CliError;
