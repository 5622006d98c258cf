use crate::error::{AppError, AppResult};
use std::path::PathBuf;

/// Environment variable to override the default couchsport data directory.
pub const ENV_DATA_DIR: &str = "COUCHSPORT_HOME";

/// Returns the base directory for couchsport settings.
///
/// Checks for `COUCHSPORT_HOME` first. If not set, falls back to
/// `~/.couchsport` (or equivalent on Windows).
///
/// # Returns
/// * `Ok(PathBuf)` - The base directory path
/// * `Err(AppError)` - If the override is relative or no home directory exists
pub fn get_base_dir() -> AppResult<PathBuf> {
    if let Ok(env_path) = std::env::var(ENV_DATA_DIR) {
        return resolve_override(&env_path);
    }

    match dirs::home_dir() {
        Some(home) => Ok(home.join(".couchsport")),
        None => Err(AppError::Config(
            "Cannot determine home directory. Please set COUCHSPORT_HOME environment variable."
                .to_string(),
        )),
    }
}

fn resolve_override(raw: &str) -> AppResult<PathBuf> {
    let path = PathBuf::from(raw);
    if !path.is_absolute() {
        return Err(AppError::Config(format!(
            "Environment variable {} must be an absolute path, got: {:?}",
            ENV_DATA_DIR, path
        )));
    }
    Ok(path)
}
