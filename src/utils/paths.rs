use std::env;
use std::path::{Path, PathBuf};

/// Formats a path with ~ substitution for the home directory
///
/// Only whole path components are matched, so with `HOME=/home/al` the path
/// `/home/alice/x` is printed unchanged.
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use data_list_indexer::utils::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/site/public/data");
/// // Returns "~/site/public/data" if HOME=/Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    let home = env::var_os("HOME").map(PathBuf::from);
    format_path_with_tilde_internal(path, home.as_deref())
}

/// Internal helper with the home directory passed in (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home: Option<&Path>) -> String {
    let relative = home
        .filter(|home| home.is_absolute())
        .and_then(|home| path.strip_prefix(home).ok());

    match relative {
        Some(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Some(rest) => Path::new("~").join(rest).to_string_lossy().into_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> Option<&'static Path> {
        Some(Path::new("/Users/testuser"))
    }

    #[test]
    fn test_path_under_home() {
        let path = Path::new("/Users/testuser/site/public/data");
        assert_eq!(format_path_with_tilde_internal(path, home()), "~/site/public/data");
    }

    #[test]
    fn test_home_itself() {
        assert_eq!(format_path_with_tilde_internal(Path::new("/Users/testuser"), home()), "~");
    }

    #[test]
    fn test_sibling_with_shared_prefix() {
        let home = Some(Path::new("/home/al"));
        let path = Path::new("/home/alice/x");
        assert_eq!(format_path_with_tilde_internal(path, home), "/home/alice/x");
    }

    #[test]
    fn test_path_outside_home() {
        assert_eq!(format_path_with_tilde_internal(Path::new("/srv/data"), home()), "/srv/data");
        assert_eq!(format_path_with_tilde_internal(Path::new("."), home()), ".");
        assert_eq!(format_path_with_tilde_internal(Path::new("/srv/data"), None), "/srv/data");
    }

    #[test]
    fn test_relative_home_is_ignored() {
        let home = Some(Path::new("relative"));
        let path = Path::new("relative/data");
        assert_eq!(format_path_with_tilde_internal(path, home), "relative/data");
    }
}
