use crate::output::print_json;
use plugkit_core::{paths::display_path, Installer};

const INSTALLED: &str = "●";
const NOT_INSTALLED: &str = "○";

pub fn run(installer: &Installer, json: bool) -> anyhow::Result<()> {
    let status = installer.status();

    if json {
        return print_json(&status);
    }

    println!("Plugins ({}):", display_path(installer.target_dir()));
    let width = status.iter().map(|s| s.name.len()).max().unwrap_or(0);
    for s in &status {
        let marker = if s.installed { INSTALLED } else { NOT_INSTALLED };
        println!("  {marker} {:width$}  {}", s.name, s.description, width = width);
    }
    println!("\n{INSTALLED} installed  {NOT_INSTALLED} not installed");
    Ok(())
}
