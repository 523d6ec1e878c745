//! XDG Base Directory support for termshell.
//!
//! Each directory can be redirected with an environment variable
//! (`TERMSHELL_CONFIG_DIR`, `TERMSHELL_DATA_DIR`, `TERMSHELL_CACHE_DIR`),
//! which is used verbatim without appending the application name.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "termshell";

fn resolve(override_dir: Option<PathBuf>, base: Option<PathBuf>, kind: &str) -> Result<PathBuf> {
    match override_dir {
        Some(dir) if !dir.as_os_str().is_empty() => Ok(dir),
        _ => base
            .map(|p| p.join(APP_NAME))
            .with_context(|| format!("Failed to determine {} directory", kind)),
    }
}

fn env_dir(var: &str) -> Option<PathBuf> {
    std::env::var_os(var).map(PathBuf::from)
}

/// Configuration directory: `$TERMSHELL_CONFIG_DIR`, else
/// `$XDG_CONFIG_HOME/termshell` or `~/.config/termshell`.
pub fn get_config_dir() -> Result<PathBuf> {
    resolve(env_dir("TERMSHELL_CONFIG_DIR"), dirs::config_dir(), "config")
}

/// Data directory: `$TERMSHELL_DATA_DIR`, else
/// `$XDG_DATA_HOME/termshell` or `~/.local/share/termshell`.
pub fn get_data_dir() -> Result<PathBuf> {
    resolve(env_dir("TERMSHELL_DATA_DIR"), dirs::data_dir(), "data")
}

/// Cache directory (log file): `$TERMSHELL_CACHE_DIR`, else
/// `$XDG_CACHE_HOME/termshell` or `~/.cache/termshell`.
pub fn get_cache_dir() -> Result<PathBuf> {
    resolve(env_dir("TERMSHELL_CACHE_DIR"), dirs::cache_dir(), "cache")
}
