use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::KeyRegistry,
};

/// Concrete file locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPaths {
    pub registry: PathBuf,
    pub reference: PathBuf,
    pub files_dir: PathBuf,
    pub output: PathBuf,
}

impl BuildPaths {
    /// Resolve the config's relative paths against `root`.
    pub fn from_config(config: &Config, root: &Path) -> Self {
        Self {
            registry: root.join(&config.registry_path),
            reference: root.join(&config.reference_path),
            files_dir: root.join(&config.files_dir),
            output: root.join(&config.output_path),
        }
    }
}

/// Everything a command needs: configuration plus resolved paths.
///
/// Built fresh for every run; nothing read from disk is cached here.
pub struct BuildContext {
    pub config: Config,
    pub paths: BuildPaths,
    pub verbose: bool,
}

impl BuildContext {
    pub fn new(config: Config, paths: BuildPaths, verbose: bool) -> Self {
        Self {
            config,
            paths,
            verbose,
        }
    }

    /// Load config from the working directory, then apply CLI overrides.
    ///
    /// Override paths are relative to the working directory; config paths are
    /// relative to the config file.
    pub fn from_args(args: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to get current directory")?;
        Self::from_args_in(args, &cwd)
    }

    pub fn from_args_in(args: &CommonArgs, cwd: &Path) -> Result<Self> {
        let loaded = load_config(cwd)?;
        let mut paths = BuildPaths::from_config(&loaded.config, &loaded.root);

        let overrides = [
            (&args.registry, &mut paths.registry),
            (&args.reference, &mut paths.reference),
            (&args.files_dir, &mut paths.files_dir),
            (&args.output, &mut paths.output),
        ];
        for (arg, path) in overrides {
            if let Some(arg) = arg {
                *path = cwd.join(arg);
            }
        }

        Ok(Self::new(loaded.config, paths, args.verbose))
    }

    pub fn load_registry(&self) -> Result<KeyRegistry> {
        KeyRegistry::load(&self.paths.registry, self.keys_field()).with_context(|| {
            format!(
                "Failed to load key registry: {}",
                self.paths.registry.display()
            )
        })
    }

    pub fn keys_field(&self) -> &str {
        &self.config.keys_field
    }

    pub fn strings_field(&self) -> &str {
        &self.config.strings_field
    }
}
