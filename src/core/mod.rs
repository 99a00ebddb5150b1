//! Core of the build: documents, the locale directory, and the merge.
//!
//! - `document`: key registry and locale document loading/saving
//! - `locale_dir`: enumeration of the locale directory
//! - `merge`: last-write-wins union of locale files
//! - `context`: resolved configuration for one run

pub mod context;
pub mod document;
pub mod locale_dir;
pub mod merge;

pub use context::{BuildContext, BuildPaths};
pub use document::{
    DocumentError, KeyRegistry, LocaleDocument, LocaleFileError, UTF8_BOM, read_text,
    save_registry, write_json,
};
pub use locale_dir::{list_locale_files, load_locale_documents};
pub use merge::{MergeStep, MergedOutput, merge_locale_files};
