//! Union of locale files into one output document.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde_json::{Map, Value};

use super::document::{LocaleDocument, LocaleFileError, write_json};

/// Progress after one file has been merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeStep {
    pub file: PathBuf,
    /// Number of distinct keys merged so far.
    pub total: usize,
}

/// All strings from every locale file.
///
/// Keys keep the position of their first insertion; a later file replaces
/// the value only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedOutput {
    pub strings: Map<String, Value>,
}

impl MergedOutput {
    /// Merge `document` into the output, last write wins.
    pub fn absorb(&mut self, document: LocaleDocument) {
        self.strings.extend(document.strings);
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn to_value(&self, field: &str) -> Value {
        let mut root = Map::new();
        root.insert(field.to_string(), Value::Object(self.strings.clone()));
        Value::Object(root)
    }

    /// Write `{"<field>": {...}}` to `path`, replacing any existing file.
    pub fn save(&self, path: &Path, field: &str, with_bom: bool) -> Result<()> {
        write_json(path, &self.to_value(field), with_bom)
    }
}

/// Merge `files` in the given order, calling `on_step` after each one.
pub fn merge_locale_files(
    files: &[PathBuf],
    field: &str,
    mut on_step: impl FnMut(&MergeStep),
) -> Result<MergedOutput, LocaleFileError> {
    let mut output = MergedOutput::default();

    for path in files {
        let document = LocaleDocument::load_locale_file(path, field)?;
        output.absorb(document);
        on_step(&MergeStep {
            file: path.clone(),
            total: output.len(),
        });
    }

    Ok(output)
}
