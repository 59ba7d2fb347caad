//! Lexical path cleaning.

use super::lazybuf::LazyBuf;
use crate::os::PathContext;

impl PathContext {
    /// Returns the shortest path lexically equivalent to `path`.
    ///
    /// Applies, until nothing changes:
    ///
    /// 1. Replace runs of separators with a single separator.
    /// 2. Drop each `.` element.
    /// 3. Drop each inner `..` together with the real element preceding it.
    /// 4. Drop `..` elements that begin a rooted path.
    ///
    /// The result ends in a separator only when it is a root. An empty
    /// result becomes `"."`. The volume prefix is kept verbatim and every
    /// `/` in the output is replaced by the native separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{OsKind, PathContext};
    ///
    /// let linux = PathContext::new(OsKind::Linux);
    /// assert_eq!(linux.clean("/a/b/../../c"), "/c");
    /// assert_eq!(linux.clean("a/../../b"), "../b");
    /// assert_eq!(linux.clean(""), ".");
    ///
    /// let windows = PathContext::new(OsKind::Windows);
    /// assert_eq!(windows.clean("C:"), "C:.");
    /// assert_eq!(windows.clean("//host/share"), "\\\\host\\share");
    /// ```
    #[must_use]
    pub fn clean(&self, path: &str) -> String {
        let vol_len = self.volume_name_len(path);
        let rest = &path.as_bytes()[vol_len..];
        if rest.is_empty() {
            if vol_len > 1 && path.as_bytes()[1] != b':' {
                // UNC root
                return self.from_slash(path).into_owned();
            }
            return format!("{path}.");
        }

        let sep = self.separator_byte();
        let is_sep = |c: u8| self.is_path_separator(c);
        let rooted = is_sep(rest[0]);
        let n = rest.len();

        // r is the next byte to read, dotdot the point where `..` stops
        // backtracking.
        let mut out = LazyBuf::new(path, vol_len);
        let (mut r, mut dotdot) = (0, 0);
        if rooted {
            out.append(sep);
            r = 1;
            dotdot = 1;
        }

        while r < n {
            let ends_at = |i: usize| i == n || is_sep(rest[i]);
            if is_sep(rest[r]) {
                r += 1;
            } else if rest[r] == b'.' && ends_at(r + 1) {
                r += 1;
            } else if rest[r] == b'.' && rest.get(r + 1) == Some(&b'.') && ends_at(r + 2) {
                r += 2;
                if out.len() > dotdot {
                    let mut w = out.len() - 1;
                    while w > dotdot && !is_sep(out.index(w)) {
                        w -= 1;
                    }
                    out.truncate(w);
                } else if !rooted {
                    if out.len() > 0 {
                        out.append(sep);
                    }
                    out.append(b'.');
                    out.append(b'.');
                    dotdot = out.len();
                }
            } else {
                if (rooted && out.len() != 1) || (!rooted && out.len() != 0) {
                    out.append(sep);
                }
                while r < n && !is_sep(rest[r]) {
                    out.append(rest[r]);
                    r += 1;
                }
            }
        }

        if out.len() == 0 {
            out.append(b'.');
        }

        self.from_slash_owned(out.into_string())
    }
}
