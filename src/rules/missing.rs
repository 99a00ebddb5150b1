//! Missing key detection rule.
//!
//! Detects registry keys that no file in the locale directory supplies.

use std::collections::BTreeSet;

use anyhow::Result;

use crate::{
    core::{BuildContext, KeyRegistry, LocaleDocument, list_locale_files, load_locale_documents},
    issues::MissingKeyIssue,
};

/// Outcome of auditing the locale directory against the registry.
#[derive(Debug)]
pub struct FilesAudit {
    pub files: Vec<LocaleDocument>,
    pub issues: Vec<MissingKeyIssue>,
}

/// Load every locale file, then check that together they cover `registry`.
///
/// The first locale file that cannot be decoded aborts the audit with a
/// [`LocaleFileError`](crate::core::LocaleFileError).
pub fn check_missing_keys_issues(
    ctx: &BuildContext,
    registry: &KeyRegistry,
) -> Result<FilesAudit> {
    let paths = list_locale_files(&ctx.paths.files_dir)?;
    let files = load_locale_documents(&paths, ctx.strings_field())?;
    let issues = check_missing_keys(registry, &files);

    Ok(FilesAudit { files, issues })
}

/// Registry keys that none of `files` contain, sorted.
pub fn check_missing_keys(
    registry: &KeyRegistry,
    files: &[LocaleDocument],
) -> Vec<MissingKeyIssue> {
    let mut remaining: BTreeSet<&str> = registry.keys.iter().map(String::as_str).collect();

    for file in files {
        for key in file.keys() {
            remaining.remove(key.as_str());
        }
        if remaining.is_empty() {
            break;
        }
    }

    remaining
        .into_iter()
        .map(|key| MissingKeyIssue {
            key: key.to_string(),
        })
        .collect()
}
