use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;
use serde::Deserialize;

use crate::{dirs::config_file_candidates, logger::default_level};

pub const DEFAULT_ADDRESS: &str = "Marina Bay Sands";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> LevelFilter {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the lot is. Recorded when the lot is created.
    pub address: String,
    pub log_level: Option<LogLevel>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            address: DEFAULT_ADDRESS.to_owned(),
            log_level: None,
        }
    }
}

impl Config {
    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level.map(LevelFilter::from).unwrap_or_else(default_level)
    }
}

pub fn parse_config(text: &str) -> Result<Config> {
    Ok(toml::from_str(text)?)
}

fn read_config(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_config(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// Loads `path` if given. Otherwise the first existing file in the
/// default locations is used, falling back to the defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return read_config(path);
    }

    for path in config_file_candidates()? {
        if path.exists() {
            return read_config(&path);
        }
    }

    Ok(Config::default())
}
