use std::path::PathBuf;

use anyhow::Result;
use person_probe_core::load_config;

/// Print the effective configuration after every layer is applied.
pub fn run(path: Option<PathBuf>) -> Result<()> {
    let config = load_config(path.as_deref())?;
    print!("{}", config.to_toml()?);
    Ok(())
}
