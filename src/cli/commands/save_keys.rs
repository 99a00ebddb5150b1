use std::io;

use anyhow::Result;

use super::CommandResult;
use crate::{cli::args::SaveKeysCommand, core::BuildContext, pipeline};

pub fn save_keys(cmd: SaveKeysCommand) -> Result<CommandResult> {
    let ctx = BuildContext::from_args(&cmd.args)?;
    pipeline::save_keys(&ctx, &mut io::stdout().lock())?;
    Ok(CommandResult::default())
}
