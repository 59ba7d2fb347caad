//! Operating-system semantics selected at runtime.
//!
//! Every lexical operation in this crate is a method on [`PathContext`], an
//! immutable value naming the operating system whose path syntax is being
//! emulated. Nothing reads the host platform implicitly: a process running
//! on Linux can manipulate Windows paths by constructing a Windows context.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The operating system whose path syntax is emulated.
///
/// `Linux` and `Darwin` share POSIX semantics. `Unknown` behaves like POSIX.
///
/// # Examples
///
/// ```
/// use vpath::OsKind;
///
/// let os: OsKind = "Windows".parse().unwrap();
/// assert_eq!(os, OsKind::Windows);
/// assert_eq!(os.to_string(), "windows");
/// assert!(!OsKind::Darwin.is_windows());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OsKind {
    /// Unrecognized system; treated as POSIX.
    #[default]
    Unknown,
    /// Linux.
    Linux,
    /// macOS and other Darwin derivatives.
    Darwin,
    /// Windows: `\` separators, drive letters and UNC shares.
    Windows,
}

impl OsKind {
    /// The kind matching the platform this crate was compiled for.
    #[must_use]
    pub const fn host() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::Darwin
        } else {
            Self::Linux
        }
    }

    /// Whether this kind uses Windows path syntax.
    #[must_use]
    pub const fn is_windows(self) -> bool {
        matches!(self, Self::Windows)
    }
}

impl fmt::Display for OsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Linux => write!(f, "linux"),
            Self::Darwin => write!(f, "darwin"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

impl FromStr for OsKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unknown" => Ok(Self::Unknown),
            "linux" => Ok(Self::Linux),
            "darwin" | "macos" => Ok(Self::Darwin),
            "windows" => Ok(Self::Windows),
            _ => Err(format!("unknown operating system: {s}")),
        }
    }
}

/// Immutable path semantics threaded through every lexical operation.
///
/// The context is `Copy`; construct it once per emulated filesystem and pass
/// it around freely. All methods are pure and may be called concurrently.
///
/// # Examples
///
/// ```
/// use vpath::{OsKind, PathContext};
///
/// let posix = PathContext::new(OsKind::Linux);
/// let windows = PathContext::new(OsKind::Windows);
///
/// assert_eq!(posix.separator(), '/');
/// assert_eq!(windows.separator(), '\\');
/// assert_eq!(windows.clean("c:/a//b/../c"), "c:\\a\\c");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathContext {
    os: OsKind,
    separator: u8,
}

impl Default for PathContext {
    fn default() -> Self {
        Self::host()
    }
}

impl PathContext {
    /// Creates a context for the given operating system.
    #[must_use]
    pub const fn new(os: OsKind) -> Self {
        let separator = if os.is_windows() { b'\\' } else { b'/' };
        Self { os, separator }
    }

    /// Creates a context matching the compilation target.
    #[must_use]
    pub const fn host() -> Self {
        Self::new(OsKind::host())
    }

    /// The emulated operating system.
    #[must_use]
    pub const fn os(&self) -> OsKind {
        self.os
    }

    /// Whether Windows path syntax is in effect.
    #[must_use]
    pub const fn is_windows(&self) -> bool {
        self.os.is_windows()
    }

    /// The native path separator.
    #[must_use]
    pub const fn separator(&self) -> char {
        self.separator as char
    }

    pub(crate) const fn separator_byte(&self) -> u8 {
        self.separator
    }

    /// The separator used in `PATH`-style lists.
    #[must_use]
    pub const fn list_separator(&self) -> char {
        if self.is_windows() {
            ';'
        } else {
            ':'
        }
    }

    /// Whether `\` escapes the next character in glob patterns.
    pub(crate) const fn escapes(&self) -> bool {
        !self.is_windows()
    }

    /// Reports whether `c` is a path separator.
    ///
    /// Under Windows semantics both `/` and `\` separate path elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{OsKind, PathContext};
    ///
    /// assert!(!PathContext::new(OsKind::Linux).is_path_separator(b'\\'));
    /// assert!(PathContext::new(OsKind::Windows).is_path_separator(b'/'));
    /// ```
    #[must_use]
    pub const fn is_path_separator(&self, c: u8) -> bool {
        c == b'/' || (self.is_windows() && c == b'\\')
    }

    /// Replaces each `/` in `path` with the native separator.
    ///
    /// Borrows the input when nothing needs replacing.
    #[must_use]
    pub fn from_slash<'a>(&self, path: &'a str) -> Cow<'a, str> {
        if self.separator == b'/' || !path.contains('/') {
            return Cow::Borrowed(path);
        }
        Cow::Owned(path.replace('/', &self.separator().to_string()))
    }

    pub(crate) fn from_slash_owned(&self, path: String) -> String {
        match self.from_slash(&path) {
            Cow::Borrowed(_) => path,
            Cow::Owned(converted) => converted,
        }
    }

    /// Replaces each native separator in `path` with `/`.
    #[must_use]
    pub fn to_slash<'a>(&self, path: &'a str) -> Cow<'a, str> {
        if self.separator == b'/' || !path.contains(self.separator()) {
            return Cow::Borrowed(path);
        }
        Cow::Owned(path.replace(self.separator(), "/"))
    }
}
