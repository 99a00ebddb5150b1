use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use walkdir::WalkDir;

use super::document::{LocaleDocument, LocaleFileError};

/// List the regular files directly inside `dir`, sorted by file name.
///
/// Subdirectories are not descended into. Symlinks are followed, so a link
/// to a regular file counts as one.
pub fn list_locale_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("Locale directory not found: {}", dir.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry
            .with_context(|| format!("Failed to read locale directory: {}", dir.display()))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Decode each file in order, stopping at the first one that fails.
pub fn load_locale_documents(
    files: &[PathBuf],
    field: &str,
) -> Result<Vec<LocaleDocument>, LocaleFileError> {
    files
        .iter()
        .map(|path| LocaleDocument::load_locale_file(path, field))
        .collect()
}
