//! Configuration system for vpath front ends.
//!
//! The library itself is configured by passing a
//! [`PathContext`](crate::PathContext) around. This module decides which
//! context (and which output format) a front end such as the `vpath` CLI
//! should use.
//!
//! # Configuration Precedence
//!
//! Sources are merged from lowest to highest precedence:
//!
//! 1. Built-in defaults (host semantics, text output)
//! 2. User config (`~/.vpath/config.yaml`)
//! 3. Project config (the nearest `vpath.yaml`)
//! 4. Environment variables (`VPATH_OS`, `VPATH_OUTPUT_FORMAT`)
//! 5. Programmatic overrides (via `ConfigBuilder::with_config`)
//!
//! # Examples
//!
//! ```
//! use vpath::config::{Config, ConfigBuilder};
//! use vpath::OsKind;
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config { os: Some(OsKind::Windows), ..Default::default() })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.context().clean("a/b"), "a\\b");
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat};
