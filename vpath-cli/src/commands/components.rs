//! Command to walk an absolute path component by component.

use crate::error::CliError;
use crate::utils::{GlobalOptions, Session};
use clap::Args;
use vpath::output::Outcome;

/// Print the volume and each component of an absolute PATH.
///
/// The path is cleaned first, so "/a/./b/../c" yields "a" and "c".
#[derive(Args)]
pub struct ComponentsCommand {
    /// Absolute path to walk
    pub path: String,
}

impl ComponentsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::load(global)?;
        if !session.ctx.is_abs(&self.path) {
            return Err(CliError::InvalidArguments(format!(
                "{} is not an absolute {} path",
                self.path,
                session.ctx.os()
            )));
        }

        let mut it = session.ctx.path_iterator(session.ctx.clean(&self.path));
        let mut parts = Vec::new();
        while it.next() {
            parts.push(it.part().to_string());
        }
        let outcome = Outcome::Components {
            volume: it.volume_name().to_string(),
            parts,
        };
        session.emit("components", [self.path], outcome)
    }
}
