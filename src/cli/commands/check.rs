use std::io;

use anyhow::Result;

use super::CommandResult;
use crate::{
    cli::args::CheckCommand,
    core::BuildContext,
    pipeline::{self, Stage},
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = BuildContext::from_args(&cmd.args)?;
    let outcome = pipeline::run_until(&ctx, Stage::AuditFiles, &mut io::stdout().lock())?;
    Ok(outcome.into())
}
