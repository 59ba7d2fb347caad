//! Error types for the vpath library.
//!
//! The lexical core only ever fails in two ways: a glob pattern is malformed,
//! or two paths cannot be related to each other without consulting a real
//! filesystem. The remaining variants belong to the configuration layer.

use thiserror::Error;

/// Result type alias for operations that may fail with a vpath error.
///
/// # Examples
///
/// ```
/// use vpath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/a/b".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the vpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A glob pattern is syntactically invalid.
    ///
    /// Raised for unbalanced character classes, empty or inverted range
    /// syntax, a trailing escape, and patterns whose directory part would
    /// expand forever.
    #[error("syntax error in pattern: {pattern:?}")]
    MalformedPattern {
        /// The offending pattern.
        pattern: String,
    },

    /// A target path cannot be made relative to a base path.
    #[error("can't make {target} relative to {base}")]
    UnrelatablePath {
        /// The base path.
        base: String,
        /// The target path.
        target: String,
    },

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn malformed(pattern: &str) -> Self {
        Self::MalformedPattern {
            pattern: pattern.to_string(),
        }
    }

    pub(crate) fn unrelatable(base: &str, target: &str) -> Self {
        Self::UnrelatablePath {
            base: base.to_string(),
            target: target.to_string(),
        }
    }

    /// Check if error reports a malformed glob pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{OsKind, PathContext};
    ///
    /// let ctx = PathContext::new(OsKind::Linux);
    /// let err = ctx.match_pattern("[", "x").unwrap_err();
    /// assert!(err.is_malformed_pattern());
    /// ```
    #[must_use]
    pub fn is_malformed_pattern(&self) -> bool {
        matches!(self, Self::MalformedPattern { .. })
    }

    /// Check if error reports two paths that cannot be related.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{OsKind, PathContext};
    ///
    /// let ctx = PathContext::new(OsKind::Linux);
    /// let err = ctx.rel("/a", "b").unwrap_err();
    /// assert!(err.is_unrelatable());
    /// ```
    #[must_use]
    pub fn is_unrelatable(&self) -> bool {
        matches!(self, Self::UnrelatablePath { .. })
    }
}
