//! Volume and UNC prefix detection.
//!
//! Volumes only exist under Windows semantics: a drive letter (`C:`) or a
//! UNC share (`\\host\share`). Under POSIX semantics every path has an
//! empty volume.

use std::borrow::Cow;

use crate::os::PathContext;

const RESERVED_NAMES: [&str; 22] = [
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

impl PathContext {
    /// Length of the leading volume name.
    ///
    /// Recomputed from the text on every call.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{OsKind, PathContext};
    ///
    /// let windows = PathContext::new(OsKind::Windows);
    /// assert_eq!(windows.volume_name_len("C:\\a"), 2);
    /// assert_eq!(windows.volume_name_len("\\\\host\\share\\a"), 12);
    /// assert_eq!(windows.volume_name_len("\\\\host"), 0);
    ///
    /// let linux = PathContext::new(OsKind::Linux);
    /// assert_eq!(linux.volume_name_len("C:\\a"), 0);
    /// ```
    #[must_use]
    pub fn volume_name_len(&self, path: &str) -> usize {
        if !self.is_windows() {
            return 0;
        }
        let b = path.as_bytes();
        let l = b.len();
        if l < 2 {
            return 0;
        }

        if b[1] == b':' && b[0].is_ascii_alphabetic() {
            return 2;
        }

        let is_slash = |c: u8| self.is_path_separator(c);
        if l >= 5 && is_slash(b[0]) && is_slash(b[1]) && !is_slash(b[2]) && b[2] != b'.' {
            // \\host\share: the host runs to the next separator, which must
            // not be doubled and must not introduce a "." share.
            let mut n = 3;
            while n < l - 1 {
                if is_slash(b[n]) {
                    n += 1;
                    if is_slash(b[n]) || b[n] == b'.' {
                        break;
                    }
                    while n < l && !is_slash(b[n]) {
                        n += 1;
                    }
                    return n;
                }
                n += 1;
            }
        }
        0
    }

    /// The leading volume name, separator-normalized.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{OsKind, PathContext};
    ///
    /// let windows = PathContext::new(OsKind::Windows);
    /// assert_eq!(windows.volume_name("c:/foo"), "c:");
    /// assert_eq!(windows.volume_name("//host/share/foo"), "\\\\host\\share");
    /// ```
    #[must_use]
    pub fn volume_name<'a>(&self, path: &'a str) -> Cow<'a, str> {
        self.from_slash(&path[..self.volume_name_len(path)])
    }

    /// Whether `path` starts with a UNC share.
    #[must_use]
    pub fn is_unc(&self, path: &str) -> bool {
        self.volume_name_len(path) > 2
    }

    /// Whether `path` is a reserved Windows device name such as `NUL`.
    ///
    /// Always `false` under POSIX semantics.
    #[must_use]
    pub fn is_reserved_name(&self, path: &str) -> bool {
        self.is_windows() && RESERVED_NAMES.iter().any(|r| path.eq_ignore_ascii_case(r))
    }
}
