use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "STOREFRONT_DATA_DIR";

/// Resolve the directory holding persisted session state
///
/// Precedence: explicit path (the `--data-dir` flag), then `STOREFRONT_DATA_DIR`,
/// then `<platform data dir>/storefront`.
pub fn get_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    resolve_data_dir(explicit, env::var_os(DATA_DIR_ENV).map(PathBuf::from), dirs::data_dir())
}

fn resolve_data_dir(
    explicit: Option<PathBuf>,
    from_env: Option<PathBuf>,
    platform: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    if let Some(dir) = from_env.filter(|d| !d.as_os_str().is_empty()) {
        return Ok(dir);
    }
    let base = platform.context("Failed to get platform data directory")?;
    Ok(base.join("storefront"))
}
