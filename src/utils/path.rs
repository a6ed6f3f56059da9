//! Filesystem path helpers.

use std::path::{Component, Path, PathBuf};

/// Normalize a path to an absolute path.
///
/// Canonicalizes when the path exists, otherwise joins it onto the cwd.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Check that a configured relative path stays inside its parent.
///
/// Rejects absolute paths, `..` segments and empty strings.
pub fn is_plain_relative(path: &str) -> bool {
    if path.trim().is_empty() {
        return false;
    }
    Path::new(path)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_existing_path() {
        let dir = TempDir::new().unwrap();
        let normalized = normalize_path(dir.path());
        assert!(normalized.is_absolute());
        assert_eq!(normalized, dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_normalize_missing_relative_path() {
        let normalized = normalize_path(Path::new("does/not/exist"));
        assert!(normalized.is_absolute());
        assert!(normalized.ends_with("does/not/exist"));
    }

    #[test]
    fn test_is_plain_relative() {
        assert!(is_plain_relative("public"));
        assert!(is_plain_relative("assets/images"));
        assert!(is_plain_relative("./views"));
        assert!(!is_plain_relative(""));
        assert!(!is_plain_relative("   "));
        assert!(!is_plain_relative("../outside"));
        assert!(!is_plain_relative("/etc"));
    }
}
