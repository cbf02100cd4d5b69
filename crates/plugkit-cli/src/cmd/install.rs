use crate::output::print_json;
use anyhow::Context;
use plugkit_core::{paths::display_path, InstallOutcome, Installer};

/// `plugkit <name>` / `plugkit install <name>...`
pub fn run(installer: &Installer, names: &[String], json: bool) -> anyhow::Result<()> {
    let mut outcomes = Vec::with_capacity(names.len());
    for name in names {
        outcomes.push(install_one(installer, name, json)?);
    }

    if json {
        print_json(&outcomes)?;
    } else {
        print_restart_hint();
    }
    Ok(())
}

/// `plugkit all` — install every catalog plugin, reporting failures at the end.
pub fn run_all(installer: &Installer, json: bool) -> anyhow::Result<()> {
    if !json {
        println!("Installing all plugins into {}", display_path(installer.target_dir()));
    }

    let mut outcomes = Vec::new();
    let mut failures = Vec::new();
    for (name, result) in installer.install_all() {
        match result {
            Ok(outcome) => {
                if !json {
                    print_outcome(&outcome);
                }
                outcomes.push(outcome);
            }
            Err(e) => {
                println!("error: {name}: {e}");
                failures.push(name);
            }
        }
    }

    if json {
        print_json(&outcomes)?;
    }

    if !failures.is_empty() {
        anyhow::bail!(
            "{} plugin(s) failed to install: {}",
            failures.len(),
            failures.join(", ")
        );
    }

    if !json {
        println!("\nAll plugins installed.");
        print_restart_hint();
    }
    Ok(())
}

fn install_one(installer: &Installer, name: &str, json: bool) -> anyhow::Result<InstallOutcome> {
    installer
        .plugin_source(name)
        .with_context(|| format!("failed to install '{name}'"))?;

    if !json {
        if installer.is_installed(name) {
            println!("warning: '{name}' already exists. Updating...");
        }
        println!("Installing '{name}'...");
    }

    let outcome = installer
        .install(name)
        .with_context(|| format!("failed to install '{name}'"))?;

    if !json {
        print_outcome(&outcome);
    }
    Ok(outcome)
}

fn print_outcome(outcome: &InstallOutcome) {
    let verb = if outcome.replaced { "updated:" } else { "installed:" };
    println!(
        "  {verb} {} ({} files)",
        display_path(&outcome.path),
        outcome.files
    );
}

fn print_restart_hint() {
    println!("Restart Claude Code to load new plugins.");
}
