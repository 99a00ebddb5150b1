use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".langcrc.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_registry_path")]
    pub registry_path: String,
    #[serde(default = "default_reference_path")]
    pub reference_path: String,
    #[serde(default = "default_files_dir")]
    pub files_dir: String,
    #[serde(default = "default_output_path")]
    pub output_path: String,
    #[serde(default = "default_keys_field")]
    pub keys_field: String,
    #[serde(default = "default_strings_field")]
    pub strings_field: String,
    #[serde(default = "default_write_bom")]
    pub write_bom: bool,
}

fn default_registry_path() -> String {
    "keys.json".to_string()
}

fn default_reference_path() -> String {
    "en/output.json".to_string()
}

fn default_files_dir() -> String {
    "files".to_string()
}

fn default_output_path() -> String {
    "output.json".to_string()
}

fn default_keys_field() -> String {
    "keys".to_string()
}

fn default_strings_field() -> String {
    "strings".to_string()
}

fn default_write_bom() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry_path: default_registry_path(),
            reference_path: default_reference_path(),
            files_dir: default_files_dir(),
            output_path: default_output_path(),
            keys_field: default_keys_field(),
            strings_field: default_strings_field(),
            write_bom: default_write_bom(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if a field name or path is empty.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("keysField", &self.keys_field),
            ("stringsField", &self.strings_field),
            ("registryPath", &self.registry_path),
            ("referencePath", &self.reference_path),
            ("filesDir", &self.files_dir),
            ("outputPath", &self.output_path),
        ] {
            if value.trim().is_empty() {
                bail!("'{}' must not be empty", name);
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory that relative paths in the config resolve against.
    pub root: PathBuf,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult { config, root })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            root: start_dir.to_path_buf(),
        }),
    }
}
