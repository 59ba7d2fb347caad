//! Pattern expansion against a filesystem.
//!
//! The globber never touches the disk itself. Directory listings and
//! existence checks go through a [`GlobFs`] collaborator, so the same code
//! expands patterns over the host filesystem, an in-memory tree or a mock.

use std::io;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::os::PathContext;

/// Nesting limit for patterns whose directory part holds meta-characters.
pub const MAX_GLOB_DEPTH: usize = 10_000;

/// Filesystem queries needed to expand a glob pattern.
#[cfg_attr(test, mockall::automock)]
pub trait GlobFs {
    /// Whether `path` exists, without following a final symlink.
    ///
    /// Any error counts as "does not exist".
    fn lstat_exists(&self, path: &str) -> bool;

    /// Names of the entries of directory `dir`, in any order.
    ///
    /// # Errors
    ///
    /// Fails when `dir` cannot be listed, for example because it does not
    /// exist or is not a directory. The globber treats a failure as an empty
    /// listing.
    fn read_dir_names(&self, dir: &str) -> io::Result<Vec<String>>;
}

impl<T: GlobFs + ?Sized> GlobFs for &T {
    fn lstat_exists(&self, path: &str) -> bool {
        (**self).lstat_exists(path)
    }

    fn read_dir_names(&self, dir: &str) -> io::Result<Vec<String>> {
        (**self).read_dir_names(dir)
    }
}

impl PathContext {
    /// Returns the names of all files matching `pattern`, or an empty list
    /// if there are none.
    ///
    /// The pattern syntax is that of [`match_pattern`](Self::match_pattern).
    /// Results within one directory are sorted; directories produced by a
    /// wildcard are expanded in the order they were found.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPattern`] when the pattern is invalid or
    /// nests wildcard directories deeper than [`MAX_GLOB_DEPTH`]. I/O
    /// failures are not errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    /// use vpath::{GlobFs, OsKind, PathContext};
    ///
    /// struct Flat;
    ///
    /// impl GlobFs for Flat {
    ///     fn lstat_exists(&self, path: &str) -> bool {
    ///         path == "/a.txt"
    ///     }
    ///     fn read_dir_names(&self, dir: &str) -> io::Result<Vec<String>> {
    ///         match dir {
    ///             "/" => Ok(vec!["b.txt".into(), "a.txt".into(), "c.md".into()]),
    ///             _ => Err(io::ErrorKind::NotFound.into()),
    ///         }
    ///     }
    /// }
    ///
    /// let linux = PathContext::new(OsKind::Linux);
    /// assert_eq!(linux.glob(&Flat, "/*.txt").unwrap(), ["/a.txt", "/b.txt"]);
    /// assert_eq!(linux.glob(&Flat, "/a.txt").unwrap(), ["/a.txt"]);
    /// assert!(linux.glob(&Flat, "/missing").unwrap().is_empty());
    /// ```
    pub fn glob<F: GlobFs + ?Sized>(&self, fs: &F, pattern: &str) -> Result<Vec<String>> {
        // File patterns of each wildcard directory level, outermost first.
        let mut levels: Vec<String> = Vec::new();
        let mut current = pattern.to_string();

        let mut matches = loop {
            if levels.len() == MAX_GLOB_DEPTH {
                return Err(Error::malformed(&current));
            }
            self.match_pattern(&current, "")?;

            if !self.has_meta(&current) {
                if fs.lstat_exists(&current) {
                    break vec![current];
                }
                break Vec::new();
            }

            let (dir, file) = self.split(&current);
            let (vol_len, dir) = self.clean_glob_path(dir);

            if !self.has_meta(&dir[vol_len..]) {
                let mut found = Vec::new();
                self.glob_dir(fs, &dir, file, &mut found)?;
                break found;
            }

            // Guards against a pattern that cleans back to itself.
            if dir == current {
                return Err(Error::malformed(&current));
            }

            trace!("expanding wildcard directory {dir:?}");
            levels.push(file.to_string());
            current = dir;
        };

        for file in levels.iter().rev() {
            let mut next = Vec::new();
            for d in &matches {
                self.glob_dir(fs, d, file, &mut next)?;
            }
            matches = next;
        }
        Ok(matches)
    }

    /// Prepares the directory half of a split pattern for listing.
    ///
    /// Returns the length of the prefix that is never searched for
    /// meta-characters together with the cleaned directory.
    fn clean_glob_path(&self, path: &str) -> (usize, String) {
        let vol_len = self.volume_name_len(path);
        let b = path.as_bytes();
        let len = b.len();

        if path.is_empty() {
            return (0, ".".to_string());
        }
        if vol_len + 1 == len && self.is_path_separator(b[len - 1]) {
            // "/", "\", "C:\" and "C:/"
            return (vol_len + 1, path.to_string());
        }
        if self.is_windows() && vol_len == len && len == 2 {
            // "C:" lists the current directory of the drive
            return (vol_len, format!("{path}."));
        }

        let mut chopped = path.chars();
        chopped.next_back();
        let chopped = chopped.as_str();
        (vol_len.min(chopped.len()), chopped.to_string())
    }

    /// Appends the entries of `dir` that match `pattern` to `matches`.
    fn glob_dir<F: GlobFs + ?Sized>(
        &self,
        fs: &F,
        dir: &str,
        pattern: &str,
        matches: &mut Vec<String>,
    ) -> Result<()> {
        let mut names = match fs.read_dir_names(dir) {
            Ok(names) => names,
            Err(err) => {
                debug!("skipping unreadable directory {dir:?}: {err}");
                return Ok(());
            }
        };
        names.sort();

        for name in names {
            if self.match_pattern(pattern, &name)? {
                matches.push(self.join(&[dir, name.as_str()]));
            }
        }
        Ok(())
    }
}
