use plugkit_core::paths::PLUGINS_DIR;
use std::path::{Path, PathBuf};

/// Resolve the source checkout that holds `plugins/`.
///
/// Priority:
/// 1. `--source` flag / `PLUGKIT_SOURCE` env var (passed in as `explicit`)
/// 2. Walk upward from the running executable looking for `plugins/`
/// 3. Walk upward from `cwd` looking for `plugins/`
/// 4. Fall back to `cwd`
pub fn resolve_source_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    if let Some(found) = exe_dir.as_deref().and_then(find_upward) {
        return found;
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    find_upward(&cwd).unwrap_or(cwd)
}

/// First ancestor of `start` (inclusive) that contains a `plugins/` directory.
fn find_upward(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(PLUGINS_DIR).is_dir())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_source_wins() {
        let dir = TempDir::new().unwrap();
        let result = resolve_source_root(Some(dir.path()));
        assert_eq!(result, dir.path());
    }

    #[test]
    fn finds_plugins_dir_in_ancestor() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("plugins/health")).unwrap();
        let deep = dir.path().join("target/release/deps");
        std::fs::create_dir_all(&deep).unwrap();

        assert_eq!(find_upward(&deep), Some(dir.path().to_path_buf()));
    }

    #[test]
    fn plugins_file_is_not_a_match() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("plugins"), "not a dir").unwrap();
        let found = find_upward(dir.path());
        assert_ne!(found.as_deref(), Some(dir.path()));
    }
}
