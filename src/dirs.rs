use std::{
    fs::create_dir_all,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

pub fn home_dir() -> Result<PathBuf> {
    ::dirs::home_dir().context("failed to locate the home directory")
}

pub fn parkinglot_dir() -> Result<PathBuf> {
    let dir = home_dir()?.join(".parkinglot");
    create_dir(&dir)?;
    Ok(dir)
}

pub fn log_file_path(name: &str) -> Result<PathBuf> {
    let log_dir = parkinglot_dir()?.join("log");
    create_dir(&log_dir)?;
    Ok(log_dir.join(&format!("{}.log", name)))
}

/// Config file locations, in the order they are tried.
pub fn config_file_candidates() -> Result<Vec<PathBuf>> {
    let home = home_dir()?;
    Ok(vec![
        home.join(".parkinglot.toml"),
        home.join(".config/parkinglot/config.toml"),
    ])
}

fn create_dir(dir: &Path) -> Result<()> {
    create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))
}
