//! JSON documents read and written by the build: the key registry and locale files.
//!
//! Every text read goes through [`read_text`], which tolerates a leading UTF-8
//! byte-order mark the same way for all inputs.

use std::{
    collections::BTreeSet,
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use thiserror::Error;

/// UTF-8 byte-order mark, as written by `utf-8-sig` encoders.
pub const UTF8_BOM: char = '\u{feff}';

/// Why a JSON document could not be decoded.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("file not found")]
    NotFound,
    #[error("I/O error: {0}")]
    Io(#[source] io::Error),
    #[error("invalid UTF-8 text")]
    InvalidEncoding,
    #[error("invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),
    #[error("expected {expected} under \"{field}\"")]
    InvalidStructure {
        field: String,
        expected: &'static str,
    },
}

/// A locale file that could not be decoded.
///
/// Raised while scanning the locale directory. Skipping such a file would
/// make the audit incomplete, so the whole run stops.
#[derive(Debug, Error)]
#[error("Failed to read '{}'", path.display())]
pub struct LocaleFileError {
    pub path: PathBuf,
    #[source]
    pub source: DocumentError,
}

/// Read a file as UTF-8 text, dropping a leading byte-order mark.
pub fn read_text(path: &Path) -> Result<String, DocumentError> {
    let bytes = fs::read(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => DocumentError::NotFound,
        _ => DocumentError::Io(err),
    })?;
    let mut text = String::from_utf8(bytes).map_err(|_| DocumentError::InvalidEncoding)?;
    if text.starts_with(UTF8_BOM) {
        text.replace_range(..UTF8_BOM.len_utf8(), "");
    }
    Ok(text)
}

fn read_json(path: &Path) -> Result<Value, DocumentError> {
    let text = read_text(path)?;
    serde_json::from_str(&text).map_err(DocumentError::InvalidJson)
}

fn take_field(value: Value, field: &str, expected: &'static str) -> Result<Value, DocumentError> {
    let invalid = || DocumentError::InvalidStructure {
        field: field.to_string(),
        expected,
    };
    match value {
        Value::Object(mut map) => map.remove(field).ok_or_else(invalid),
        _ => Err(invalid()),
    }
}

/// Canonical set of keys every locale is expected to provide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyRegistry {
    pub keys: BTreeSet<String>,
}

impl KeyRegistry {
    pub fn load(path: &Path, field: &str) -> Result<Self, DocumentError> {
        const EXPECTED: &str = "an array of strings";

        let Value::Array(items) = take_field(read_json(path)?, field, EXPECTED)? else {
            return Err(DocumentError::InvalidStructure {
                field: field.to_string(),
                expected: EXPECTED,
            });
        };

        let keys = items
            .into_iter()
            .map(|item| match item {
                Value::String(key) => Ok(key),
                _ => Err(DocumentError::InvalidStructure {
                    field: field.to_string(),
                    expected: EXPECTED,
                }),
            })
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(Self { keys })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }
}

/// Overwrite the registry file with `keys`, keeping their order.
///
/// Repeated keys are written once.
pub fn save_registry<'a>(
    path: &Path,
    field: &str,
    keys: impl IntoIterator<Item = &'a String>,
) -> Result<usize> {
    let mut seen = BTreeSet::new();
    let unique: Vec<Value> = keys
        .into_iter()
        .filter(|key| seen.insert(key.as_str()))
        .map(|key| Value::String(key.clone()))
        .collect();
    let count = unique.len();

    let mut root = Map::new();
    root.insert(field.to_string(), Value::Array(unique));
    write_json(path, &Value::Object(root), false)?;

    Ok(count)
}

/// One `{"<field>": {key: value, ...}}` document.
#[derive(Debug, Clone)]
pub struct LocaleDocument {
    pub path: PathBuf,
    pub strings: Map<String, Value>,
}

impl LocaleDocument {
    pub fn load(path: &Path, field: &str) -> Result<Self, DocumentError> {
        match take_field(read_json(path)?, field, "a mapping")? {
            Value::Object(strings) => Ok(Self {
                path: path.to_path_buf(),
                strings,
            }),
            _ => Err(DocumentError::InvalidStructure {
                field: field.to_string(),
                expected: "a mapping",
            }),
        }
    }

    /// Load a file from the locale directory, naming it in the error.
    pub fn load_locale_file(path: &Path, field: &str) -> Result<Self, LocaleFileError> {
        Self::load(path, field).map_err(|source| LocaleFileError {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.strings.keys()
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

/// Write `value` pretty-printed (2-space indent) with a trailing newline.
///
/// Parent directories are created as needed. An existing file is replaced.
pub fn write_json(path: &Path, value: &Value, with_bom: bool) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
    let content = if with_bom {
        format!("{}{}\n", UTF8_BOM, content)
    } else {
        format!("{}\n", content)
    };

    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}
