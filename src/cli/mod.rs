use anyhow::Result;

use crate::cli::exit_code::exit_status_from_result;

pub mod args;
mod commands;
mod exit_code;
mod exit_status;
mod run;

pub use args::{Arguments, Command, CommonArgs};
pub use commands::CommandResult;
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let result = run::run(args)?;
    Ok(exit_status_from_result(&result))
}
