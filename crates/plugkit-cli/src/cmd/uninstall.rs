use crate::output::print_json;
use anyhow::Context;
use plugkit_core::{
    paths::{self, display_path},
    Installer, UninstallOutcome,
};

/// `plugkit uninstall <name>`
///
/// A plugin that is not installed is reported, not treated as an error.
pub fn run(installer: &Installer, name: Option<&str>, json: bool) -> anyhow::Result<()> {
    let Some(name) = name else {
        anyhow::bail!("plugin name required for uninstall\nUsage: plugkit uninstall <plugin-name>");
    };

    let outcome = installer
        .uninstall(name)
        .with_context(|| format!("failed to uninstall '{name}'"))?;

    if json {
        return print_json(&serde_json::json!({
            "name": name,
            "outcome": outcome,
        }));
    }

    match outcome {
        UninstallOutcome::Removed => {
            let path = paths::installed_plugin_dir(installer.target_dir(), name);
            println!("Uninstalled '{name}' from {}", display_path(&path));
        }
        UninstallOutcome::NotInstalled => {
            println!("'{name}' is not installed.");
        }
    }
    Ok(())
}
