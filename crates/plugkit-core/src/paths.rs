use crate::error::{PluginError, Result};
use std::path::{Component, Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

/// Plugin tree inside the source checkout.
pub const PLUGINS_DIR: &str = "plugins";

/// Install location relative to the user's home directory.
pub const USER_PLUGINS_DIR: &str = ".claude/plugins";

pub const COMMANDS_DIR: &str = "commands";
pub const AGENTS_DIR: &str = "agents";
pub const SKILLS_DIR: &str = "skills";
pub const SKILL_FILE: &str = "SKILL.md";
pub const PLUGIN_MANIFEST: &str = ".claude-plugin/plugin.json";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// `$HOME/.claude/plugins`, where installed plugins live.
pub fn user_plugins_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or(PluginError::HomeNotFound)?;
    Ok(home.join(USER_PLUGINS_DIR))
}

pub fn plugins_root(source_root: &Path) -> PathBuf {
    source_root.join(PLUGINS_DIR)
}

pub fn plugin_source_dir(source_root: &Path, name: &str) -> PathBuf {
    plugins_root(source_root).join(name)
}

pub fn installed_plugin_dir(target_dir: &Path, name: &str) -> PathBuf {
    target_dir.join(name)
}

pub fn plugin_manifest_path(plugin_dir: &Path) -> PathBuf {
    plugin_dir.join(PLUGIN_MANIFEST)
}

// ---------------------------------------------------------------------------
// Name validation
// ---------------------------------------------------------------------------

/// Plugin names double as directory names: a name must be exactly one plain
/// path component so it cannot escape `plugins/` or the target directory.
pub fn validate_plugin_name(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !single_normal || name.contains(['/', '\\']) {
        return Err(PluginError::InvalidPluginName(name.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

/// Render a path under the user's home as `~/...`.
pub fn display_path(path: &Path) -> String {
    if let Some(home) = home::home_dir() {
        if let Ok(rel) = path.strip_prefix(&home) {
            return format!("~/{}", rel.display());
        }
    }
    path.display().to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        for name in [
            "health",
            "design-system",
            "x",
            "My_Plugin",
            "Health",
            "-leading",
            "has space",
            ".hidden",
        ] {
            validate_plugin_name(name).unwrap_or_else(|_| panic!("expected valid: {name}"));
        }
    }

    #[test]
    fn invalid_names() {
        for name in ["", ".", "..", "../etc", "a/b", "a\\b", "/abs", "plugin/"] {
            assert!(validate_plugin_name(name).is_err(), "expected invalid: {name}");
        }
    }

    #[test]
    fn path_helpers() {
        let root = Path::new("/srv/plugkit");
        assert_eq!(
            plugin_source_dir(root, "health"),
            PathBuf::from("/srv/plugkit/plugins/health")
        );
        assert_eq!(
            installed_plugin_dir(Path::new("/home/u/.claude/plugins"), "ddd"),
            PathBuf::from("/home/u/.claude/plugins/ddd")
        );
        assert_eq!(
            plugin_manifest_path(Path::new("/p/health")),
            PathBuf::from("/p/health/.claude-plugin/plugin.json")
        );
    }

    #[test]
    fn display_path_abbreviates_home() {
        let home = home::home_dir().unwrap();
        assert_eq!(
            display_path(&home.join(".claude/plugins")),
            "~/.claude/plugins"
        );
        assert_eq!(display_path(Path::new("/opt/plugins")), "/opt/plugins");
    }
}
