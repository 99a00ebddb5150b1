//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - (none) / `build`: audit the registry and locale files, then merge them
//! - `check`: run both audits without writing output
//! - `save-keys`: regenerate the key registry from the reference locale
//! - `init`: write a default configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// The command to run; a bare invocation runs the full build.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or_else(|| {
            Command::Build(BuildCommand {
                args: CommonArgs::default(),
            })
        })
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Key registry file (overrides config file)
    #[arg(long)]
    pub registry: Option<PathBuf>,

    /// Reference locale file (overrides config file)
    #[arg(long)]
    pub reference: Option<PathBuf>,

    /// Directory of locale files to audit and merge (overrides config file)
    #[arg(long)]
    pub files_dir: Option<PathBuf>,

    /// Merged output file (overrides config file)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct BuildCommand {
    #[command(flatten)]
    pub args: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CommonArgs,
}

#[derive(Debug, Args)]
pub struct SaveKeysCommand {
    #[command(flatten)]
    pub args: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Audit keys, then merge all locale files into the output file (default)
    Build(BuildCommand),
    /// Audit the key registry and locale files without writing output
    Check(CheckCommand),
    /// Regenerate the key registry from the reference locale
    SaveKeys(SaveKeysCommand),
    /// Initialize a new .langcrc.json configuration file
    Init,
}
