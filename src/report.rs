//! Console output for the build stages.
//!
//! Every function writes to a caller-supplied writer so the pipeline can be
//! run against a buffer in tests. All output, including failures, goes to
//! standard output.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use crate::{
    core::MergeStep,
    issues::{MissingKeyIssue, UnregisteredKeyIssue},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

fn print_keys<W: Write>(keys: impl Iterator<Item = String>, writer: &mut W) -> io::Result<()> {
    for key in keys {
        writeln!(writer, "  {}", key)?;
    }
    Ok(())
}

pub fn print_registry_audit<W: Write>(
    registry: &Path,
    issues: &[UnregisteredKeyIssue],
    writer: &mut W,
) -> io::Result<()> {
    let name = display_name(registry);
    if issues.is_empty() {
        return writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("{} is up to date.", name).green()
        );
    }

    writeln!(
        writer,
        "{} Failed to find the following {} in {}:",
        FAILURE_MARK.red(),
        plural(issues.len(), "language key"),
        name.bold()
    )?;
    print_keys(issues.iter().map(|i| i.key.clone()), writer)?;
    writeln!(
        writer,
        "{} run {} to regenerate the registry",
        "hint:".bold().cyan(),
        "langc save-keys".cyan()
    )
}

pub fn print_registry_size<W: Write>(
    registry: &Path,
    count: usize,
    writer: &mut W,
) -> io::Result<()> {
    writeln!(
        writer,
        "{} had {}.",
        display_name(registry),
        plural(count, "key")
    )
}

pub fn print_file_scanned<W: Write>(path: &Path, keys: usize, writer: &mut W) -> io::Result<()> {
    writeln!(
        writer,
        "  {} {}",
        path.display().to_string().dimmed(),
        format!("({})", plural(keys, "key")).dimmed()
    )
}

pub fn print_files_audit<W: Write>(
    file_count: usize,
    issues: &[MissingKeyIssue],
    writer: &mut W,
) -> io::Result<()> {
    if issues.is_empty() {
        return writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Files are up to date ({} checked).",
                plural(file_count, "locale file")
            )
            .green()
        );
    }

    writeln!(
        writer,
        "{} Failed to find the following {} in files:",
        FAILURE_MARK.red(),
        plural(issues.len(), "language key")
    )?;
    print_keys(issues.iter().map(|i| i.key.clone()), writer)
}

pub fn print_merge_step<W: Write>(step: &MergeStep, writer: &mut W) -> io::Result<()> {
    writeln!(
        writer,
        "Read '{}', strings is now {}",
        step.file.display(),
        step.total
    )
}

pub fn print_saved<W: Write>(output: &Path, writer: &mut W) -> io::Result<()> {
    writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Saved files to {}", output.display()).green()
    )
}

pub fn print_keys_saved<W: Write>(registry: &Path, count: usize, writer: &mut W) -> io::Result<()> {
    writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Saved {} to {}", plural(count, "key"), registry.display()).green()
    )
}

pub fn print_config_created<W: Write>(path: &Path, writer: &mut W) -> io::Result<()> {
    writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", path.display()).green()
    )
}

/// Print a fatal error and its cause chain.
pub fn print_error<W: Write>(err: &anyhow::Error, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{} {:#}", "error:".bold().red(), err)
}
