//! langc - locale string build tool
//!
//! langc audits a directory of locale string files against a canonical key
//! registry and merges them into a single output file. The build is a strict
//! pipeline: the registry audit gates the file audit, which gates the merge.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing and commands)
//! - `config`: Configuration file loading and parsing
//! - `core`: Documents, locale directory scanning, and the merge
//! - `issues`: Issue types reported by the audits
//! - `pipeline`: The staged build driver
//! - `report`: Console output
//! - `rules`: The registry and file audits

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod pipeline;
pub mod report;
pub mod rules;
