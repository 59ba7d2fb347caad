#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # vpath
//!
//! Lexical path manipulation and glob matching for a virtual filesystem,
//! with the operating system's path syntax chosen at runtime.
//!
//! A [`PathContext`] names the emulated system. Its methods clean, join,
//! split and relativize paths, match shell patterns and expand globs, all
//! without touching the host filesystem. The same binary can therefore
//! manipulate POSIX paths and Windows paths (drive letters, UNC shares,
//! `\` separators) side by side.
//!
//! ## Core Types
//!
//! - [`PathContext`] and [`OsKind`]: the path semantics in effect
//! - [`PathIterator`]: component cursor used by symlink resolvers
//! - [`GlobFs`]: the filesystem queries glob expansion needs
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use vpath::{OsKind, PathContext};
//!
//! let linux = PathContext::new(OsKind::Linux);
//! assert_eq!(linux.clean("/a/b/../../c"), "/c");
//! assert_eq!(linux.rel("/a/b", "/a/b/c").unwrap(), "c");
//! assert!(linux.match_pattern("*.txt", "a.txt").unwrap());
//!
//! let windows = PathContext::new(OsKind::Windows);
//! assert_eq!(windows.volume_name_len("C:\\a"), 2);
//! assert_eq!(windows.join(&["C:", "f"]), "C:f");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod os;
pub mod output;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use os::{OsKind, PathContext};
pub use path::{GlobFs, PathIterator, MAX_GLOB_DEPTH};
