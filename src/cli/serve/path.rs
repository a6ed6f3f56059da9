//! URL to filesystem path resolution.

use std::path::{Path, PathBuf};

/// Resolve a decoded request path to a file under `public_root`.
///
/// Directories never resolve; they fall through to the front controller.
pub fn resolve_path(path: &str, public_root: &Path) -> Option<PathBuf> {
    let clean = path.trim_matches('/');

    // Reject paths with suspicious patterns early
    if clean.is_empty() || clean.contains("..") {
        return None;
    }

    let local = public_root.join(clean);

    // Canonicalize to resolve symlinks and verify path is under public_root
    let canonical = local.canonicalize().ok()?;
    let root_canonical = public_root.canonicalize().ok()?;

    if !canonical.starts_with(&root_canonical) {
        return None;
    }

    canonical.is_file().then_some(canonical)
}

/// Percent-decode a URL path, dropping the query string.
///
/// `None` when the decoded bytes are not UTF-8.
pub fn decode_path(url: &str) -> Option<String> {
    use percent_encoding::percent_decode_str;
    let path = url.split('?').next().unwrap_or(url);
    percent_decode_str(path)
        .decode_utf8()
        .ok()
        .map(std::borrow::Cow::into_owned)
}

/// Path relative to the mount point, `None` when outside of it.
///
/// `base_path` always starts and ends with `/`.
pub fn strip_base<'a>(path: &'a str, base_path: &str) -> Option<&'a str> {
    if base_path == "/" {
        return Some(path.trim_start_matches('/'));
    }
    if path == base_path.trim_end_matches('/') {
        return Some("");
    }
    path.strip_prefix(base_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_existing_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("stylesheets")).unwrap();
        fs::write(dir.path().join("stylesheets/app.css"), "body{}").unwrap();

        let resolved = resolve_path("/stylesheets/app.css", dir.path()).unwrap();
        assert!(resolved.ends_with("stylesheets/app.css"));
    }

    #[test]
    fn test_directories_and_missing_files_fall_through() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("images")).unwrap();
        assert!(resolve_path("/images", dir.path()).is_none());
        assert!(resolve_path("/", dir.path()).is_none());
        assert!(resolve_path("/contact", dir.path()).is_none());
    }

    #[test]
    fn test_traversal_rejected() {
        let dir = TempDir::new().unwrap();
        let public = dir.path().join("public");
        fs::create_dir_all(&public).unwrap();
        fs::write(dir.path().join("funombi.toml"), "").unwrap();
        assert!(resolve_path("/../funombi.toml", &public).is_none());
    }

    #[test]
    fn test_decode_path() {
        assert_eq!(decode_path("/a%20b/c.css?v=1").as_deref(), Some("/a b/c.css"));
        assert_eq!(decode_path("/contact").as_deref(), Some("/contact"));
        assert_eq!(decode_path("/caf%C3%A9").as_deref(), Some("/caf\u{e9}"));
    }

    #[test]
    fn test_decode_invalid_utf8_path() {
        assert_eq!(decode_path("/%FF"), None);
        assert_eq!(decode_path("/ab%C3?x=1"), None);
    }

    #[test]
    fn test_strip_base() {
        assert_eq!(strip_base("/contact", "/"), Some("contact"));
        assert_eq!(strip_base("/app/contact", "/app/"), Some("contact"));
        assert_eq!(strip_base("/app", "/app/"), Some(""));
        assert_eq!(strip_base("/other", "/app/"), None);
    }
}
