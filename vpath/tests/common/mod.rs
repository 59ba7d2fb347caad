//! Common test utilities for integration tests.
//!
//! Provides an in-memory filesystem implementing [`GlobFs`], with symlinks,
//! and a thin [`GlobFs`] adapter over the host filesystem.

use std::collections::BTreeMap;
use std::fs;
use std::io;

use vpath::{GlobFs, PathContext};

/// Entry kinds of the in-memory filesystem.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Dir,
    File,
    Symlink(String),
}

/// Maximum symlinks followed while resolving one path.
#[allow(dead_code)]
pub const MAX_LINK_HOPS: usize = 40;

/// In-memory tree keyed by cleaned absolute path.
///
/// # Examples
///
/// ```no_run
/// # use common::MemFs;
/// let fs = MemFs::new(PathContext::new(OsKind::Linux))
///     .file("/etc/hosts")
///     .symlink("/etc/alias", "hosts");
/// ```
#[allow(dead_code)]
pub struct MemFs {
    ctx: PathContext,
    entries: BTreeMap<String, Node>,
}

#[allow(dead_code)]
impl MemFs {
    /// Creates a filesystem holding only the root directory.
    pub fn new(ctx: PathContext) -> Self {
        let root = if ctx.is_windows() { "C:\\" } else { "/" };
        let mut entries = BTreeMap::new();
        entries.insert(root.to_string(), Node::Dir);
        Self { ctx, entries }
    }

    /// The semantics this tree uses.
    pub fn context(&self) -> PathContext {
        self.ctx
    }

    /// Adds a directory and its missing parents.
    pub fn dir(self, path: &str) -> Self {
        self.insert(path, Node::Dir)
    }

    /// Adds a regular file and its missing parents.
    pub fn file(self, path: &str) -> Self {
        self.insert(path, Node::File)
    }

    /// Adds a symlink pointing at `target`, which may be relative.
    pub fn symlink(self, path: &str, target: &str) -> Self {
        self.insert(path, Node::Symlink(target.to_string()))
    }

    fn insert(mut self, path: &str, node: Node) -> Self {
        let path = self.ctx.clean(path);
        let mut parent = self.ctx.dir(&path);
        while !self.entries.contains_key(&parent) {
            self.entries.insert(parent.clone(), Node::Dir);
            parent = self.ctx.dir(&parent);
        }
        self.entries.insert(path, node);
        self
    }

    /// The entry at `path`, without following a final symlink.
    pub fn lstat(&self, path: &str) -> Option<&Node> {
        self.entries.get(&self.ctx.clean(path))
    }

    /// Resolves every symlink in `path`, the way `realpath` does.
    pub fn resolve(&self, path: &str) -> io::Result<String> {
        let mut it = self.ctx.path_iterator(self.ctx.clean(path));
        let mut hops = 0;
        while it.next() {
            match self.entries.get(it.left_part()) {
                None => return Err(io::ErrorKind::NotFound.into()),
                Some(Node::Symlink(target)) => {
                    hops += 1;
                    if hops > MAX_LINK_HOPS {
                        return Err(io::Error::new(io::ErrorKind::Other, "too many links"));
                    }
                    let target = target.clone();
                    it.replace_part(&target);
                }
                Some(Node::Dir) => {}
                Some(Node::File) if it.is_last() => {}
                Some(Node::File) => {
                    return Err(io::Error::new(io::ErrorKind::Other, "not a directory"));
                }
            }
        }
        Ok(it.into_path())
    }
}

impl GlobFs for MemFs {
    fn lstat_exists(&self, path: &str) -> bool {
        self.lstat(path).is_some()
    }

    fn read_dir_names(&self, dir: &str) -> io::Result<Vec<String>> {
        let dir = self.ctx.clean(dir);
        match self.entries.get(&dir) {
            Some(Node::Dir) => {}
            Some(_) => return Err(io::Error::new(io::ErrorKind::Other, "not a directory")),
            None => return Err(io::ErrorKind::NotFound.into()),
        }
        Ok(self
            .entries
            .keys()
            .filter(|k| **k != dir && self.ctx.dir(k) == dir)
            .map(|k| self.ctx.base(k))
            .collect())
    }
}

/// [`GlobFs`] over the host filesystem.
#[allow(dead_code)]
pub struct HostFs;

impl GlobFs for HostFs {
    fn lstat_exists(&self, path: &str) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn read_dir_names(&self, dir: &str) -> io::Result<Vec<String>> {
        fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect()
    }
}
