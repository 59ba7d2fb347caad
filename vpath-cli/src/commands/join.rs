//! Command to join path elements.

use crate::error::CliError;
use crate::utils::{GlobalOptions, Session};
use clap::Args;
use vpath::output::Outcome;

/// Join path elements with the separator and clean the result.
///
/// Empty elements are ignored; when every element is empty the result is
/// empty too.
#[derive(Args)]
pub struct JoinCommand {
    /// Elements to join
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub elements: Vec<String>,
}

impl JoinCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::load(global)?;
        let joined = session.ctx.join(&self.elements);
        session.emit("join", self.elements, Outcome::Path(joined))
    }
}
