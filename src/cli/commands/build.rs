use std::io;

use anyhow::Result;

use super::CommandResult;
use crate::{cli::args::BuildCommand, core::BuildContext, pipeline};

pub fn build(cmd: BuildCommand) -> Result<CommandResult> {
    let ctx = BuildContext::from_args(&cmd.args)?;
    let outcome = pipeline::run(&ctx, &mut io::stdout().lock())?;
    Ok(outcome.into())
}
