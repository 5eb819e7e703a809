//! Path utilities for the configuration directory and the cache file.
//!
//! The configuration directory follows the XDG Base Directory convention;
//! the cache file lives directly in the user's home directory.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// File name of the translation cache inside the home directory.
pub const CACHE_FILE_NAME: &str = "translate.json";

/// Returns the configuration directory for fy.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/fy` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/fy` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join("fy")),
        _ => Ok(home_dir()?.join(".config").join("fy")),
    }
}

/// Returns the default cache file location, `~/translate.json`.
pub fn default_cache_file() -> Result<PathBuf> {
    Ok(home_dir()?.join(CACHE_FILE_NAME))
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}
