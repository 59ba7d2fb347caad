//! Splitting and joining paths.

use crate::os::PathContext;

impl PathContext {
    /// Splits `path` immediately after the final separator.
    ///
    /// The volume is never split, and `dir + file == path` always holds.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{OsKind, PathContext};
    ///
    /// let linux = PathContext::new(OsKind::Linux);
    /// assert_eq!(linux.split("static/myfile.css"), ("static/", "myfile.css"));
    /// assert_eq!(linux.split("myfile.css"), ("", "myfile.css"));
    ///
    /// let windows = PathContext::new(OsKind::Windows);
    /// assert_eq!(windows.split("c:foo"), ("c:", "foo"));
    /// ```
    #[must_use]
    pub fn split<'a>(&self, path: &'a str) -> (&'a str, &'a str) {
        let i = self.after_last_separator(path);
        (&path[..i], &path[i..])
    }

    /// Splits an absolute path around its final separator, dropping it.
    ///
    /// Unlike [`split`](Self::split) the separator belongs to neither half,
    /// so `split_abs("/a/b") == ("/a", "b")` and `split_abs("/a") == ("", "a")`.
    /// A path without any separator past its volume yields the volume and
    /// the remainder.
    #[must_use]
    pub fn split_abs<'a>(&self, path: &'a str) -> (&'a str, &'a str) {
        let vol_len = self.volume_name_len(path);
        let i = self.after_last_separator(path);
        if i == vol_len {
            return (&path[..vol_len], &path[vol_len..]);
        }
        (&path[..i - 1], &path[i..])
    }

    // Offset just past the last separator outside the volume, or the
    // volume length when there is none.
    fn after_last_separator(&self, path: &str) -> usize {
        let vol_len = self.volume_name_len(path);
        path.as_bytes()[vol_len..]
            .iter()
            .rposition(|&c| self.is_path_separator(c))
            .map_or(vol_len, |i| vol_len + i + 1)
    }

    /// Returns the last element of `path`.
    ///
    /// Trailing separators are removed first. An empty path yields `"."`
    /// and a path of only separators yields a single separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{OsKind, PathContext};
    ///
    /// let linux = PathContext::new(OsKind::Linux);
    /// assert_eq!(linux.base("/a/b/"), "b");
    /// assert_eq!(linux.base("////"), "/");
    /// assert_eq!(linux.base(""), ".");
    /// ```
    #[must_use]
    pub fn base(&self, path: &str) -> String {
        if path.is_empty() {
            return ".".to_string();
        }
        let trimmed = path.trim_end_matches(|c: char| c.is_ascii() && self.is_path_separator(c as u8));
        let rest = &trimmed[self.volume_name_len(trimmed)..];
        let name = match rest.as_bytes().iter().rposition(|&c| self.is_path_separator(c)) {
            Some(i) => &rest[i + 1..],
            None => rest,
        };
        if name.is_empty() {
            return self.separator().to_string();
        }
        name.to_string()
    }

    /// Returns all but the last element of `path`, cleaned.
    ///
    /// A UNC share whose directory part cleans to `"."` is returned as the
    /// bare volume, so `\\host\share` is not mistaken for a relative path.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{OsKind, PathContext};
    ///
    /// let linux = PathContext::new(OsKind::Linux);
    /// assert_eq!(linux.dir("/a/b/c"), "/a/b");
    /// assert_eq!(linux.dir("abc"), ".");
    ///
    /// let windows = PathContext::new(OsKind::Windows);
    /// assert_eq!(windows.dir("\\\\host\\share"), "\\\\host\\share");
    /// assert_eq!(windows.dir("c:foo"), "c:.");
    /// ```
    #[must_use]
    pub fn dir(&self, path: &str) -> String {
        let vol_len = self.volume_name_len(path);
        let volume = self.from_slash(&path[..vol_len]);
        let i = self.after_last_separator(path);
        let dir = self.clean(&path[vol_len..i]);
        if dir == "." && vol_len > 2 {
            return volume.into_owned();
        }
        format!("{volume}{dir}")
    }

    /// Returns the file name extension, including the dot.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{OsKind, PathContext};
    ///
    /// let linux = PathContext::new(OsKind::Linux);
    /// assert_eq!(linux.ext("a/b.tar.gz"), ".gz");
    /// assert_eq!(linux.ext("a.b/c"), "");
    /// ```
    #[must_use]
    pub fn ext<'a>(&self, path: &'a str) -> &'a str {
        for (i, &c) in path.as_bytes().iter().enumerate().rev() {
            if self.is_path_separator(c) {
                break;
            }
            if c == b'.' {
                return &path[i..];
            }
        }
        ""
    }

    /// Joins the non-empty elements with the separator and cleans the result.
    ///
    /// Returns `""` when every element is empty. Under Windows semantics the
    /// join never manufactures a UNC path from non-UNC elements, and an
    /// element ending in `:` keeps the next element drive-relative.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{OsKind, PathContext};
    ///
    /// let linux = PathContext::new(OsKind::Linux);
    /// assert_eq!(linux.join(&["a", "b/../c"]), "a/c");
    /// assert_eq!(linux.join(&["", "", "b"]), "b");
    ///
    /// let windows = PathContext::new(OsKind::Windows);
    /// assert_eq!(windows.join(&["C:", "f"]), "C:f");
    /// assert_eq!(windows.join(&["C:", "\\f"]), "C:\\f");
    /// assert_eq!(windows.join(&["\\", "\\", "host"]), "\\host");
    /// ```
    #[must_use]
    pub fn join<S: AsRef<str>>(&self, elems: &[S]) -> String {
        if self.is_windows() {
            return self.join_windows(elems);
        }

        let mut joined = String::new();
        for elem in elems.iter().map(AsRef::as_ref).filter(|e| !e.is_empty()) {
            if !joined.is_empty() {
                joined.push('/');
            }
            joined.push_str(elem);
        }
        if joined.is_empty() {
            return joined;
        }
        self.clean(&joined)
    }

    fn join_windows<S: AsRef<str>>(&self, elems: &[S]) -> String {
        let mut joined = String::new();
        let mut last = 0u8;
        for elem in elems.iter().map(AsRef::as_ref) {
            let mut elem = elem;
            if joined.is_empty() {
                // first non-empty element goes in unchanged
            } else if self.is_path_separator(last) {
                // "\" followed by "\x" must not become "\\x"
                elem = elem.trim_start_matches(['\\', '/']);
            } else if last == b':' {
                // drive-relative: no separator, keep the element's own root
            } else {
                joined.push('\\');
                last = b'\\';
            }
            if let Some(&tail) = elem.as_bytes().last() {
                joined.push_str(elem);
                last = tail;
            }
        }
        if joined.is_empty() {
            return joined;
        }
        self.clean(&joined)
    }

    /// Reports whether `path` is absolute.
    ///
    /// Under Windows semantics a path is absolute when it names a reserved
    /// device, starts with a UNC share, or has a drive letter followed by a
    /// separator. `\a` and `c:a` are relative.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{OsKind, PathContext};
    ///
    /// let windows = PathContext::new(OsKind::Windows);
    /// assert!(windows.is_abs("C:\\a"));
    /// assert!(!windows.is_abs("\\a"));
    /// assert!(windows.is_abs("NUL"));
    /// assert!(PathContext::new(OsKind::Linux).is_abs("/a"));
    /// ```
    #[must_use]
    pub fn is_abs(&self, path: &str) -> bool {
        if !self.is_windows() {
            return path.starts_with('/');
        }
        if self.is_reserved_name(path) {
            return true;
        }
        match self.volume_name_len(path) {
            0 => false,
            l if l > 2 => true,
            l => path
                .as_bytes()
                .get(l)
                .is_some_and(|&c| self.is_path_separator(c)),
        }
    }

    /// Makes `path` absolute against `cwd` without touching a filesystem.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{OsKind, PathContext};
    ///
    /// let linux = PathContext::new(OsKind::Linux);
    /// assert_eq!(linux.abs("../c", "/a/b"), "/a/c");
    /// assert_eq!(linux.abs("/x/./y", "/a"), "/x/y");
    /// ```
    #[must_use]
    pub fn abs(&self, path: &str, cwd: &str) -> String {
        if self.is_abs(path) {
            return self.clean(path);
        }
        self.join(&[cwd, path])
    }

    /// Splits a `PATH`-style list on the list separator.
    ///
    /// An empty list yields no entries. Under Windows semantics separators
    /// inside double quotes do not split, and the quotes are removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{OsKind, PathContext};
    ///
    /// let linux = PathContext::new(OsKind::Linux);
    /// assert_eq!(linux.split_list("/a:/b"), vec!["/a", "/b"]);
    ///
    /// let windows = PathContext::new(OsKind::Windows);
    /// assert_eq!(windows.split_list("\"c:\\a;b\";d"), vec!["c:\\a;b", "d"]);
    /// ```
    #[must_use]
    pub fn split_list(&self, list: &str) -> Vec<String> {
        if list.is_empty() {
            return Vec::new();
        }
        if !self.is_windows() {
            return list.split(self.list_separator()).map(str::to_string).collect();
        }

        let mut entries = Vec::new();
        let mut start = 0;
        let mut quoted = false;
        for (i, c) in list.char_indices() {
            match c {
                '"' => quoted = !quoted,
                ';' if !quoted => {
                    entries.push(list[start..i].replace('"', ""));
                    start = i + 1;
                }
                _ => {}
            }
        }
        entries.push(list[start..].replace('"', ""));
        entries
    }
}
