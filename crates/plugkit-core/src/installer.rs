use crate::catalog::{self, AVAILABLE_PLUGINS};
use crate::error::{PluginError, Result};
use crate::{io, paths};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct InstallOutcome {
    pub name: String,
    pub path: PathBuf,
    /// True when an existing install was overwritten.
    pub replaced: bool,
    pub files: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UninstallOutcome {
    Removed,
    NotInstalled,
}

#[derive(Debug, Clone, Serialize)]
pub struct PluginStatus {
    pub name: String,
    pub description: String,
    pub installed: bool,
}

// ---------------------------------------------------------------------------
// Installer
// ---------------------------------------------------------------------------

/// Copies plugin directories from a source checkout into the host's plugin dir.
///
/// The only state is the filesystem: a plugin counts as installed when
/// `target_dir/<name>` exists.
#[derive(Debug, Clone)]
pub struct Installer {
    source_root: PathBuf,
    target_dir: PathBuf,
}

impl Installer {
    pub fn new(source_root: impl Into<PathBuf>, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            target_dir: target_dir.into(),
        }
    }

    /// Installer targeting `$HOME/.claude/plugins`.
    pub fn for_user(source_root: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::new(source_root, paths::user_plugins_dir()?))
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    pub fn is_installed(&self, name: &str) -> bool {
        paths::installed_plugin_dir(&self.target_dir, name).exists()
    }

    /// Install state of every catalog plugin, in catalog order.
    pub fn status(&self) -> Vec<PluginStatus> {
        AVAILABLE_PLUGINS
            .iter()
            .map(|p| PluginStatus {
                name: p.name.to_string(),
                description: p.description.to_string(),
                installed: self.is_installed(p.name),
            })
            .collect()
    }

    /// Source copy of plugin `name`, or `PluginNotFound` when it is missing.
    pub fn plugin_source(&self, name: &str) -> Result<PathBuf> {
        paths::validate_plugin_name(name)?;

        let source = paths::plugin_source_dir(&self.source_root, name);
        if !source.is_dir() {
            return Err(PluginError::PluginNotFound {
                name: name.to_string(),
                source_dir: paths::plugins_root(&self.source_root),
            });
        }
        Ok(source)
    }

    /// Copy `plugins/<name>` into the target dir, replacing any earlier install.
    ///
    /// The copy lands in a staging directory first and is renamed into
    /// place, so the installed tree is always a complete fresh copy.
    pub fn install(&self, name: &str) -> Result<InstallOutcome> {
        let source = self.plugin_source(name)?;

        io::ensure_dir(&self.target_dir)?;

        let staging = tempfile::Builder::new()
            .prefix(".plugkit-staging-")
            .tempdir_in(&self.target_dir)?;
        let staged = staging.path().join(name);
        let files = io::copy_dir_recursive(&source, &staged)?;

        let dest = paths::installed_plugin_dir(&self.target_dir, name);
        let replaced = io::remove_path(&dest)?;
        if replaced {
            debug!(plugin = name, "removed previous install");
        }
        std::fs::rename(&staged, &dest)?;

        debug!(plugin = name, files, dest = %dest.display(), "installed");
        Ok(InstallOutcome {
            name: name.to_string(),
            path: dest,
            replaced,
            files,
        })
    }

    /// Install every catalog plugin in order. Failures do not stop the run.
    pub fn install_all(&self) -> Vec<(&'static str, Result<InstallOutcome>)> {
        catalog::names()
            .map(|name| {
                let result = self.install(name);
                if let Err(e) = &result {
                    warn!(plugin = name, error = %e, "install failed");
                }
                (name, result)
            })
            .collect()
    }

    pub fn uninstall(&self, name: &str) -> Result<UninstallOutcome> {
        paths::validate_plugin_name(name)?;

        let dest = paths::installed_plugin_dir(&self.target_dir, name);
        if io::remove_path(&dest)? {
            Ok(UninstallOutcome::Removed)
        } else {
            Ok(UninstallOutcome::NotInstalled)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_plugin(source: &Path, name: &str, files: &[(&str, &str)]) {
        let dir = paths::plugin_source_dir(source, name);
        for (rel, content) in files {
            let path = dir.join(rel);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, content).unwrap();
        }
    }

    fn setup() -> (TempDir, Installer) {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("src");
        for name in catalog::names() {
            let command = format!("commands/{name}.md");
            write_plugin(&source, name, &[(command.as_str(), "# command\n")]);
        }
        let installer = Installer::new(&source, dir.path().join("home/.claude/plugins"));
        (dir, installer)
    }

    #[test]
    fn install_creates_target_and_copies() {
        let (_dir, installer) = setup();
        assert!(!installer.target_dir().exists());

        let outcome = installer.install("health").unwrap();

        assert!(!outcome.replaced);
        assert_eq!(outcome.files, 1);
        assert!(installer.is_installed("health"));
        assert!(outcome.path.join("commands/health.md").exists());
    }

    #[test]
    fn install_missing_plugin_is_not_found() {
        let (_dir, installer) = setup();
        let err = installer.install("nonexistent-plugin").unwrap_err();
        assert!(matches!(err, PluginError::PluginNotFound { .. }));
        assert!(err.to_string().contains("not found"));
        assert!(!installer.is_installed("nonexistent-plugin"));
    }

    #[test]
    fn install_rejects_traversal() {
        let (_dir, installer) = setup();
        let err = installer.install("../src").unwrap_err();
        assert!(matches!(err, PluginError::InvalidPluginName(_)));
    }

    #[test]
    fn install_accepts_mixed_case_directory_names() {
        let (_dir, installer) = setup();
        write_plugin(installer.source_root(), "My_Plugin", &[("commands/x.md", "x")]);

        let outcome = installer.install("My_Plugin").unwrap();

        assert!(outcome.path.join("commands/x.md").exists());
        assert!(installer.is_installed("My_Plugin"));
    }

    #[test]
    fn plugin_source_checks_name_before_existence() {
        let (_dir, installer) = setup();
        assert!(installer.plugin_source("health").unwrap().is_dir());
        assert!(matches!(
            installer.plugin_source(".."),
            Err(PluginError::InvalidPluginName(_))
        ));
        assert!(matches!(
            installer.plugin_source("ghost"),
            Err(PluginError::PluginNotFound { .. })
        ));
    }

    #[test]
    fn reinstall_replaces_with_fresh_copy() {
        let (_dir, installer) = setup();
        installer.install("ddd").unwrap();

        let installed = paths::installed_plugin_dir(installer.target_dir(), "ddd");
        std::fs::write(installed.join("stale.md"), "left over").unwrap();
        write_plugin(installer.source_root(), "ddd", &[("agents/arch-scanner.md", "new")]);

        let outcome = installer.install("ddd").unwrap();

        assert!(outcome.replaced);
        assert_eq!(outcome.files, 2);
        assert!(!installed.join("stale.md").exists());
        assert_eq!(
            std::fs::read_to_string(installed.join("agents/arch-scanner.md")).unwrap(),
            "new"
        );
    }

    #[test]
    fn install_leaves_no_staging_dirs() {
        let (_dir, installer) = setup();
        installer.install("e2e").unwrap();
        installer.install("e2e").unwrap();

        let entries: Vec<String> = std::fs::read_dir(installer.target_dir())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(entries, vec!["e2e".to_string()]);
    }

    #[test]
    fn install_all_installs_catalog_and_continues_past_failures() {
        let (_dir, installer) = setup();
        std::fs::remove_dir_all(paths::plugin_source_dir(installer.source_root(), "twophone"))
            .unwrap();

        let results = installer.install_all();

        assert_eq!(results.len(), AVAILABLE_PLUGINS.len());
        for (name, result) in &results {
            if *name == "twophone" {
                assert!(result.is_err());
            } else {
                assert!(result.is_ok(), "{name} should install");
                assert!(installer.is_installed(name));
            }
        }
    }

    #[test]
    fn status_follows_catalog_order() {
        let (_dir, installer) = setup();
        installer.install("twophone").unwrap();

        let status = installer.status();
        let names: Vec<&str> = status.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, catalog::names().collect::<Vec<_>>());
        for s in &status {
            assert_eq!(s.installed, s.name == "twophone");
        }
    }

    #[test]
    fn uninstall_removes_then_reports_not_installed() {
        let (_dir, installer) = setup();
        installer.install("health").unwrap();

        assert_eq!(installer.uninstall("health").unwrap(), UninstallOutcome::Removed);
        assert!(!installer.is_installed("health"));
        assert_eq!(
            installer.uninstall("health").unwrap(),
            UninstallOutcome::NotInstalled
        );
    }

    #[test]
    fn uninstall_unknown_mixed_case_name_is_not_installed() {
        let (_dir, installer) = setup();
        assert_eq!(
            installer.uninstall("Foo").unwrap(),
            UninstallOutcome::NotInstalled
        );
    }
}
