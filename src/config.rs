//! On-disk configuration.
//!
//! scoretab reads an optional TOML file:
//!
//! ```toml
//! [table]
//! goal_difference = true
//!
//! [input]
//! on_invalid = "abort"   # or "skip"
//! ```
//!
//! Search order: the `--config` flag (or `SCORETAB_CONFIG`), then
//! `<user config dir>/scoretab/config.toml`. An absent default file means
//! built-in defaults; an explicitly named file must exist, and any file that
//! exists but does not parse is an error.

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{eyre, Result, WrapErr};
use serde::Deserialize;

use crate::constants::{APP_NAME, CONFIG_FILE_NAME};

/// What to do with a line that fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidLinePolicy {
    /// Stop the run and report the offending line.
    #[default]
    Abort,
    /// Log the line at warn level and keep going.
    Skip,
}

/// Table-shaping options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Rank and render goal difference.
    pub goal_difference: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            goal_difference: true,
        }
    }
}

/// Input-handling options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Policy for unparseable lines.
    pub on_invalid: InvalidLinePolicy,
}

/// Everything configurable from the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub table: TableConfig,
    pub input: InputConfig,
}

impl Config {
    /// Load configuration, preferring an explicit path over the default
    /// location.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => {
                    log::debug!("no user config directory, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        if !path.is_file() {
            if explicit.is_some() {
                return Err(eyre!("config file not found: {}", path.display()));
            }
            log::debug!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path)
            .wrap_err_with(|| format!("cannot read config file {}", path.display()))?;
        let config = toml::from_str(&raw)
            .wrap_err_with(|| format!("invalid config file {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Default config file location under the user's config directory.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE_NAME))
    }
}
