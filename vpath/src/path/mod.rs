//! Lexical path algebra with runtime-selected semantics.
//!
//! Every operation in this module is a method on
//! [`PathContext`](crate::PathContext) and works on the text of a path
//! alone. Nothing here touches the filesystem except [`glob`], which goes
//! through a caller-supplied [`GlobFs`].
//!
//! # Operations
//!
//! - **Volumes**: `volume_name`, `volume_name_len`, `is_unc`,
//!   `is_reserved_name`
//! - **Cleaning**: `clean`
//! - **Splitting and joining**: `split`, `split_abs`, `dir`, `base`, `ext`,
//!   `join`, `split_list`
//! - **Absoluteness**: `is_abs`, `abs`
//! - **Relative paths**: `rel`
//! - **Patterns**: `match_pattern`, `has_meta`, `glob`
//! - **Traversal**: [`PathIterator`]
//!
//! # Semantics
//!
//! Under POSIX semantics (`Linux`, `Darwin`, `Unknown`) the only separator
//! is `/`, there are no volumes and `\` escapes pattern meta-characters.
//!
//! Under Windows semantics both `/` and `\` are accepted as separators on
//! input while `\` is produced on output, a path may start with a drive
//! letter (`C:`) or a UNC share (`\\host\share`), and `\` is never an escape.
//!
//! ```
//! use vpath::{OsKind, PathContext};
//!
//! let linux = PathContext::new(OsKind::Linux);
//! let windows = PathContext::new(OsKind::Windows);
//!
//! assert_eq!(linux.join(&["a", "b/../c"]), "a/c");
//! assert_eq!(windows.join(&["C:", "f"]), "C:f");
//! assert_eq!(windows.dir("//host/share/file"), "\\\\host\\share\\");
//! ```

mod clean;
mod glob;
mod iter;
mod lazybuf;
mod pattern;
mod rel;
mod split;
mod volume;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use glob::{GlobFs, MAX_GLOB_DEPTH};
pub use iter::PathIterator;
