//! Config command handlers.

use anyhow::{Context, Result};
use byline_core::config::{Config, paths};

pub fn path() -> Result<()> {
    println!("{}", paths::config_path().display());
    Ok(())
}

pub fn init() -> Result<()> {
    let path = paths::config_path();
    if Config::init_at(&path).context("write default config")? {
        println!("Wrote default config to {}", path.display());
    } else {
        println!("Config already exists at {}", path.display());
    }
    Ok(())
}

pub fn set_url(url: &str) -> Result<()> {
    Config::save_api_base_url(url).context("save api_base_url")?;
    println!("api_base_url = {url}");
    Ok(())
}
