use super::{
    args::{Arguments, Command},
    commands::{CommandResult, build::build, check::check, init::init, save_keys::save_keys},
};
use anyhow::Result;

/// Main entry point for the langc CLI.
///
/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with the issues that halted the pipeline, if any
/// - `Err` if the command fails (e.g., unreadable locale file, missing registry)
pub fn run(args: Arguments) -> Result<CommandResult> {
    match args.into_command() {
        Command::Build(cmd) => build(cmd),
        Command::Check(cmd) => check(cmd),
        Command::SaveKeys(cmd) => save_keys(cmd),
        Command::Init => init(),
    }
}
