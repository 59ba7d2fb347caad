//! Command to print the volume name of a path.

use crate::error::CliError;
use crate::utils::{GlobalOptions, Session};
use clap::Args;
use log::debug;
use vpath::output::Outcome;

/// Print the leading volume name of PATH.
///
/// Under Windows semantics this is a drive letter such as "C:" or a UNC
/// prefix such as "\\host\share". Under POSIX semantics it is always empty.
#[derive(Args)]
pub struct VolumeCommand {
    /// Path to inspect
    pub path: String,
}

impl VolumeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::load(global)?;
        let volume = session.ctx.volume_name(&self.path).into_owned();
        if session.ctx.is_unc(&self.path) {
            debug!("{} starts with a UNC volume", self.path);
        }
        session.emit("volume", [self.path], Outcome::Path(volume))
    }
}
