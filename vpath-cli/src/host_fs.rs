//! The host filesystem as seen by the globber.

use std::fs;
use std::io;

use log::trace;
use vpath::GlobFs;

/// [`GlobFs`] backed by `std::fs`.
///
/// Existence checks use `symlink_metadata`, so a dangling symlink still
/// matches a literal pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFs;

impl GlobFs for HostFs {
    fn lstat_exists(&self, path: &str) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn read_dir_names(&self, dir: &str) -> io::Result<Vec<String>> {
        trace!("listing {dir}");
        fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect()
    }
}
