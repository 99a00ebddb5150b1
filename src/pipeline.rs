//! The build pipeline: registry audit, file audit, merge.
//!
//! Stages run strictly in order and the first failing stage halts the run.
//! Output is only written by the merge, which runs after both audits pass.
//! Unreadable inputs are returned as errors; this module never exits the
//! process.

use std::io::Write;

use anyhow::{Context, Result};

use crate::{
    core::{BuildContext, LocaleDocument, list_locale_files, merge_locale_files, save_registry},
    issues::Issue,
    report,
    rules::{missing::check_missing_keys_issues, unregistered::check_unregistered_keys_issues},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    AuditRegistry,
    AuditFiles,
    Merge,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::AuditRegistry, Stage::AuditFiles, Stage::Merge];
}

/// What a pipeline run ended with.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every requested stage passed.
    Done { merged_keys: Option<usize> },
    /// `stage` found the listed issues and nothing after it ran.
    Halted { stage: Stage, issues: Vec<Issue> },
}

/// Run every stage up to and including `last`.
pub fn run_until<W: Write>(ctx: &BuildContext, last: Stage, writer: &mut W) -> Result<Outcome> {
    let mut merged_keys = None;

    for stage in Stage::ALL.into_iter().filter(|stage| *stage <= last) {
        let issues = match stage {
            Stage::AuditRegistry => audit_registry(ctx, writer)?,
            Stage::AuditFiles => audit_files(ctx, writer)?,
            Stage::Merge => {
                merged_keys = Some(merge(ctx, writer)?);
                Vec::new()
            }
        };
        if !issues.is_empty() {
            return Ok(Outcome::Halted { stage, issues });
        }
    }

    Ok(Outcome::Done { merged_keys })
}

/// Run the full pipeline.
pub fn run<W: Write>(ctx: &BuildContext, writer: &mut W) -> Result<Outcome> {
    run_until(ctx, Stage::Merge, writer)
}

pub fn audit_registry<W: Write>(ctx: &BuildContext, writer: &mut W) -> Result<Vec<Issue>> {
    let issues = check_unregistered_keys_issues(ctx)?;
    report::print_registry_audit(&ctx.paths.registry, &issues, writer)?;
    Ok(issues.into_iter().map(Issue::UnregisteredKey).collect())
}

pub fn audit_files<W: Write>(ctx: &BuildContext, writer: &mut W) -> Result<Vec<Issue>> {
    let registry = ctx.load_registry()?;
    report::print_registry_size(&ctx.paths.registry, registry.len(), writer)?;
    let audit = check_missing_keys_issues(ctx, &registry)?;
    if ctx.verbose {
        for file in &audit.files {
            report::print_file_scanned(&file.path, file.len(), writer)?;
        }
    }
    report::print_files_audit(audit.files.len(), &audit.issues, writer)?;
    Ok(audit.issues.into_iter().map(Issue::MissingKey).collect())
}

/// Merge the locale directory into the output file; returns the key count.
pub fn merge<W: Write>(ctx: &BuildContext, writer: &mut W) -> Result<usize> {
    let files = list_locale_files(&ctx.paths.files_dir)?;

    let mut write_result = Ok(());
    let merged = merge_locale_files(&files, ctx.strings_field(), |step| {
        if write_result.is_ok() {
            write_result = report::print_merge_step(step, writer);
        }
    })?;
    write_result?;

    merged.save(&ctx.paths.output, ctx.strings_field(), ctx.config.write_bom)?;
    report::print_saved(&ctx.paths.output, writer)?;

    Ok(merged.len())
}

/// Rewrite the registry from the reference locale's keys.
///
/// Not part of [`run`]; maintainers call it after adding reference strings.
pub fn save_keys<W: Write>(ctx: &BuildContext, writer: &mut W) -> Result<usize> {
    let reference =
        LocaleDocument::load(&ctx.paths.reference, ctx.strings_field()).with_context(|| {
            format!(
                "Failed to load reference locale: {}",
                ctx.paths.reference.display()
            )
        })?;

    let count = save_registry(&ctx.paths.registry, ctx.keys_field(), reference.keys())?;
    report::print_keys_saved(&ctx.paths.registry, count, writer)?;

    Ok(count)
}
