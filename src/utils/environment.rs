use std::env;
use std::path::PathBuf;

/// Environment variable consulted when no directory is given on the command line
pub const DATA_DIR_ENV: &str = "DATA_LIST_DIR";

/// Resolve the data directory to scan
///
/// An explicit value wins, then `DATA_LIST_DIR`, then the current directory (`.`).
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> PathBuf {
    resolve_data_dir_internal(explicit, env::var_os(DATA_DIR_ENV).map(PathBuf::from))
}

/// Internal helper with the environment value passed in (for testing)
pub(crate) fn resolve_data_dir_internal(
    explicit: Option<PathBuf>,
    from_env: Option<PathBuf>,
) -> PathBuf {
    explicit
        .or(from_env.filter(|p| !p.as_os_str().is_empty()))
        .unwrap_or_else(|| PathBuf::from("."))
}
