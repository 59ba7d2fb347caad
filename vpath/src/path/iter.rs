//! Component-by-component traversal of an absolute path.
//!
//! [`PathIterator`] walks the components of a path after its volume and lets
//! the caller splice a replacement in place of the current component. That
//! is the primitive a symlink resolver needs: walk the path, and whenever a
//! component turns out to be a link, replace it by the link target and keep
//! going from the right place.

use log::trace;

use crate::os::PathContext;

/// Cursor over the components of an absolute path.
///
/// The current component is `path[start..end]`. Before the first call to
/// [`next`](Self::next) and after [`reset`](Self::reset) the cursor sits on
/// the volume; once exhausted both bounds equal the path length. Components
/// are delimited by the native separator only, so pass a cleaned path.
///
/// # Examples
///
/// ```
/// use vpath::{OsKind, PathContext};
///
/// let linux = PathContext::new(OsKind::Linux);
/// let mut it = linux.path_iterator("/usr/lib/libc.so");
///
/// let mut parts = Vec::new();
/// while it.next() {
///     parts.push(it.part().to_string());
/// }
/// assert_eq!(parts, ["usr", "lib", "libc.so"]);
/// ```
///
/// Resolving a relative symlink `/usr/lib -> lib64`:
///
/// ```
/// use vpath::{OsKind, PathContext};
///
/// let linux = PathContext::new(OsKind::Linux);
/// let mut it = linux.path_iterator("/usr/lib/libc.so");
/// it.next();
/// it.next();
/// assert_eq!(it.left_part(), "/usr/lib");
///
/// // The prefix "/usr/" is unchanged, so iteration resumes at "lib64".
/// assert!(!it.replace_part("lib64"));
/// assert!(it.next());
/// assert_eq!(it.part(), "lib64");
/// assert_eq!(it.path(), "/usr/lib64/libc.so");
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct PathIterator {
    ctx: PathContext,
    path: String,
    vol_len: usize,
    start: usize,
    end: usize,
}

impl PathIterator {
    /// Creates an iterator positioned before the first component of `path`.
    #[must_use]
    pub fn new(ctx: PathContext, path: impl Into<String>) -> Self {
        let path = path.into();
        let vol_len = ctx.volume_name_len(&path);
        Self {
            ctx,
            path,
            vol_len,
            start: vol_len,
            end: vol_len,
        }
    }

    /// Advances to the next component.
    ///
    /// Returns `false` once every component has been visited.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        let len = self.path.len();
        let sep = self.ctx.separator_byte();
        // A relative path has no separator before its first component.
        self.start = if self.end == self.vol_len
            && self.path.as_bytes().get(self.vol_len).is_some_and(|&c| c != sep)
        {
            self.vol_len
        } else {
            self.end + 1
        };
        if self.start >= len {
            self.start = len;
            self.end = len;
            return false;
        }

        self.end = self.path.as_bytes()[self.start..]
            .iter()
            .position(|&c| c == sep)
            .map_or(len, |pos| self.start + pos);
        true
    }

    /// Moves the cursor back before the first component.
    pub fn reset(&mut self) {
        self.start = self.vol_len;
        self.end = self.vol_len;
    }

    /// Replaces the current component with `new_part`.
    ///
    /// An absolute `new_part` replaces everything up to and including the
    /// current component; a relative one is spliced between the left and
    /// right remainders. The result is cleaned.
    ///
    /// Returns `true` when the part of the path before the current
    /// component changed: the cursor has been reset and iteration restarts
    /// from the first component. Returns `false` when only the current
    /// component and what follows changed: the next call to
    /// [`next`](Self::next) yields the first component of the substitution.
    pub fn replace_part(&mut self, new_part: &str) -> bool {
        let old = std::mem::take(&mut self.path);
        self.path = if self.ctx.is_abs(new_part) {
            self.ctx.join(&[new_part, &old[self.end..]])
        } else {
            self.ctx
                .join(&[&old[..self.start], new_part, &old[self.end..]])
        };

        let start = self.start;
        if self.path.len() < start || old.as_bytes()[..start] != self.path.as_bytes()[..start] {
            trace!("path prefix changed, restarting at {:?}", self.path);
            self.vol_len = self.ctx.volume_name_len(&self.path);
            self.reset();
            return true;
        }

        self.end = if start > self.vol_len { start - 1 } else { self.vol_len };
        self.start = self.end;
        false
    }

    /// The current component.
    #[must_use]
    pub fn part(&self) -> &str {
        &self.path[self.start..self.end]
    }

    /// Everything before the current component, trailing separator included.
    #[must_use]
    pub fn left(&self) -> &str {
        &self.path[..self.start]
    }

    /// Everything up to and including the current component.
    #[must_use]
    pub fn left_part(&self) -> &str {
        &self.path[..self.end]
    }

    /// Everything after the current component, leading separator included.
    #[must_use]
    pub fn right(&self) -> &str {
        &self.path[self.end..]
    }

    /// The current component and everything after it.
    #[must_use]
    pub fn right_part(&self) -> &str {
        &self.path[self.start..]
    }

    /// Whether the current component is the last one.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.end == self.path.len()
    }

    /// The volume name of the path.
    #[must_use]
    pub fn volume_name(&self) -> &str {
        &self.path[..self.vol_len]
    }

    /// Length of the volume name of the path.
    #[must_use]
    pub fn volume_name_len(&self) -> usize {
        self.vol_len
    }

    /// The whole path, including any replacements made so far.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Consumes the iterator, returning the path.
    #[must_use]
    pub fn into_path(self) -> String {
        self.path
    }
}

impl PathContext {
    /// Creates a [`PathIterator`] over `path` with these semantics.
    #[must_use]
    pub fn path_iterator(&self, path: impl Into<String>) -> PathIterator {
        PathIterator::new(*self, path)
    }
}
