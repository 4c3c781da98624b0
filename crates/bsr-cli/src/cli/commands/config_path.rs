//! `bsr config-path` – where the config file lives.

use anyhow::Result;
use bsr_core::config;

pub fn run_config_path() -> Result<()> {
    println!("{}", config::config_path()?.display());
    Ok(())
}
