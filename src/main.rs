use std::{io, process::ExitCode};

use clap::Parser;
use langc::{
    cli::{Arguments, ExitStatus},
    report::print_error,
};

fn main() -> ExitCode {
    let args = Arguments::parse();

    match langc::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            print_error(&err, &mut io::stdout().lock()).ok();
            ExitStatus::Error.into()
        }
    }
}
