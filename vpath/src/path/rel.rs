//! Relative path computation.

use crate::error::{Error, Result};
use crate::os::PathContext;

impl PathContext {
    /// Returns a path that is lexically equivalent to `target` when joined
    /// to `base`.
    ///
    /// Both paths are cleaned first. On success, `join(base, rel(base,
    /// target))` cleans to `clean(target)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrelatablePath`] when the answer would depend on the
    /// current working directory: the paths sit on different volumes, only
    /// one of them is rooted, or `base` climbs out through a `..` that
    /// `target` does not share.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{OsKind, PathContext};
    ///
    /// let linux = PathContext::new(OsKind::Linux);
    /// assert_eq!(linux.rel("/a/b", "/a/b/c").unwrap(), "c");
    /// assert_eq!(linux.rel("/a/b", "/x/y").unwrap(), "../../x/y");
    /// assert!(linux.rel("/a", "a").is_err());
    ///
    /// let windows = PathContext::new(OsKind::Windows);
    /// assert_eq!(windows.rel("C:\\a", "c:\\A\\b").unwrap(), "b");
    /// assert!(windows.rel("C:\\a", "D:\\a").is_err());
    /// ```
    pub fn rel(&self, base_path: &str, target_path: &str) -> Result<String> {
        let base_vol_len = self.volume_name_len(base_path);
        let target_vol_len = self.volume_name_len(target_path);
        let base_vol = self.from_slash(&base_path[..base_vol_len]);
        let target_vol = self.from_slash(&target_path[..target_vol_len]);

        let base_clean = self.clean(base_path);
        let target_clean = self.clean(target_path);
        if self.same_word(&target_clean, &base_clean) {
            return Ok(".".to_string());
        }

        let mut base = &base_clean[base_vol_len..];
        let target = &target_clean[target_vol_len..];
        let root = self.separator().to_string();
        if base == "." {
            base = "";
        } else if base.is_empty() && base_vol_len > 2 {
            // a bare \\host\share base behaves like its root
            base = &root;
        }

        let sep = self.separator_byte();
        let base_rooted = base.as_bytes().first() == Some(&sep);
        let target_rooted = target.as_bytes().first() == Some(&sep);
        if base_rooted != target_rooted || !self.same_word(&base_vol, &target_vol) {
            return Err(Error::unrelatable(base_path, target_path));
        }

        // Position base[b0..bi] and target[t0..ti] at the first differing
        // elements.
        let (bb, tb) = (base.as_bytes(), target.as_bytes());
        let (bl, tl) = (bb.len(), tb.len());
        let (mut b0, mut bi, mut t0, mut ti) = (0, 0, 0, 0);
        loop {
            while bi < bl && bb[bi] != sep {
                bi += 1;
            }
            while ti < tl && tb[ti] != sep {
                ti += 1;
            }
            if !self.same_word(&target[t0..ti], &base[b0..bi]) {
                break;
            }
            if bi < bl {
                bi += 1;
            }
            if ti < tl {
                ti += 1;
            }
            b0 = bi;
            t0 = ti;
            if b0 == bl && t0 == tl {
                break;
            }
        }

        if &base[b0..bi] == ".." {
            return Err(Error::unrelatable(base_path, target_path));
        }

        if b0 == bl {
            return Ok(target[t0..].to_string());
        }

        // Base elements left: climb out of each before descending.
        let ups = bb[b0..].iter().filter(|&&c| c == sep).count() + 1;
        let mut rel = String::with_capacity(ups * 3 + (tl - t0));
        for i in 0..ups {
            if i > 0 {
                rel.push(self.separator());
            }
            rel.push_str("..");
        }
        if t0 != tl {
            rel.push(self.separator());
            rel.push_str(&target[t0..]);
        }
        Ok(rel)
    }

    // Path element equality: case-insensitive under Windows semantics.
    fn same_word(&self, a: &str, b: &str) -> bool {
        if self.is_windows() {
            a.eq_ignore_ascii_case(b) || a.to_lowercase() == b.to_lowercase()
        } else {
            a == b
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{OsKind, PathContext};

    const WINDOWS: PathContext = PathContext::new(OsKind::Windows);
    const LINUX: PathContext = PathContext::new(OsKind::Linux);

    #[test]
    fn test_rel_posix() {
        let cases = [
            ("a/b", "a/b", "."),
            ("a/b/.", "a/b", "."),
            ("a/b", "a/b/.", "."),
            ("./a/b", "a/b", "."),
            ("a/b", "./a/b", "."),
            ("ab/cd", "ab/cde", "../cde"),
            ("ab/cd", "ab/c", "../c"),
            ("a/b", "a/b/c/d", "c/d"),
            ("a/b", "a/b/../c", "../c"),
            ("a/b/../c", "a/b", "../b"),
            ("a/b/c", "a/c/d", "../../c/d"),
            ("a/b", "c/d", "../../c/d"),
            ("a/b/c/d", "a/b", "../.."),
            ("a/b/c/d", "a/b/", "../.."),
            ("a/b/c/d/", "a/b", "../.."),
            ("a/b/c/d/", "a/b/", "../.."),
            ("../../a/b", "../../a/b/c/d", "c/d"),
            ("/a/b", "/a/b", "."),
            ("/a/b/.", "/a/b", "."),
            ("/a/b", "/a/b/.", "."),
            ("/ab/cd", "/ab/cde", "../cde"),
            ("/ab/cd", "/ab/c", "../c"),
            ("/a/b", "/a/b/c/d", "c/d"),
            ("/a/b", "/a/b/../c", "../c"),
            ("/a/b/../c", "/a/b", "../b"),
            ("/a/b/c", "/a/c/d", "../../c/d"),
            ("/a/b", "/c/d", "../../c/d"),
            ("/a/b/c/d", "/a/b", "../.."),
            ("/a/b/c/d", "/a/b/", "../.."),
            ("/a/b/c/d/", "/a/b", "../.."),
            ("/a/b/c/d/", "/a/b/", "../.."),
            ("/../../a/b", "/../../a/b/c/d", "c/d"),
            (".", "a/b", "a/b"),
            (".", "..", ".."),
            ("/", "/a", "a"),
        ];
        for (base, target, want) in cases {
            assert_eq!(LINUX.rel(base, target).unwrap(), want, "rel({base:?}, {target:?})");
        }
    }

    #[test]
    fn test_rel_posix_errors() {
        let cases = [
            ("..", "."),
            ("..", "a"),
            ("../..", ".."),
            ("a", "/a"),
            ("/a", "a"),
        ];
        for (base, target) in cases {
            let err = LINUX.rel(base, target).unwrap_err();
            assert!(err.is_unrelatable(), "rel({base:?}, {target:?})");
        }
    }

    #[test]
    fn test_rel_windows() {
        let cases = [
            ("C:a\\b\\c", "C:a/b/d", "..\\d"),
            ("C:\\", "D:\\", ""),
            ("C:", "D:", ""),
            ("C:\\Projects", "c:\\projects\\src", "src"),
            ("C:\\Projects", "c:\\projects", "."),
            ("C:\\Projects\\a\\..", "c:\\projects", "."),
            ("\\\\host\\share", "\\\\host\\share\\file.txt", "file.txt"),
        ];
        for (base, target, want) in cases {
            match WINDOWS.rel(base, target) {
                Ok(got) => assert_eq!(got, want, "rel({base:?}, {target:?})"),
                Err(err) => {
                    assert!(want.is_empty(), "rel({base:?}, {target:?}) failed: {err}");
                    assert!(err.is_unrelatable());
                }
            }
        }
    }

    #[test]
    fn test_rel_join_round_trip() {
        let pairs = [("/a/b/c", "/a/x/y"), ("/", "/p/q"), ("/a/b", "/a")];
        for (base, target) in pairs {
            let rel = LINUX.rel(base, target).unwrap();
            assert_eq!(LINUX.join(&[base, &rel]), LINUX.clean(target));
        }
    }
}
