use std::{fs, io, path::Path};

use anyhow::{Result, bail};

use super::CommandResult;
use crate::{
    config::{CONFIG_FILE_NAME, default_config_json},
    report::print_config_created,
};

pub fn init() -> Result<CommandResult> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()? + "\n")?;
    print_config_created(config_path, &mut io::stdout().lock())?;

    Ok(CommandResult::default())
}
