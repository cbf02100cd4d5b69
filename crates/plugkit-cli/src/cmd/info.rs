use crate::output::{print_json, print_table};
use anyhow::Context;
use plugkit_core::{catalog, inventory::InventoryItem, inventory::PluginInventory, Installer};

/// `plugkit info <name>` — describe what a source plugin ships.
pub fn run(installer: &Installer, name: &str, json: bool) -> anyhow::Result<()> {
    let inventory = PluginInventory::load(installer.source_root(), name)
        .with_context(|| format!("failed to read plugin '{name}'"))?;

    if json {
        let value = serde_json::json!({
            "installed": installer.is_installed(name),
            "inventory": inventory,
        });
        return print_json(&value);
    }

    let description = inventory
        .manifest
        .as_ref()
        .and_then(|m| m.description.as_deref())
        .or_else(|| catalog::find(name).map(|p| p.description));
    let version = inventory.manifest.as_ref().and_then(|m| m.version.as_deref());

    match version {
        Some(v) => println!("{name} v{v}"),
        None => println!("{name}"),
    }
    if let Some(d) = description {
        println!("{d}");
    }
    if catalog::find(name).is_none() {
        println!("(not in the built-in catalog; 'all' and 'list' skip it)");
    }
    let state = if installer.is_installed(name) {
        "installed"
    } else {
        "not installed"
    };
    println!("Status: {state}");

    if inventory.is_empty() {
        println!("\nNo commands, agents, or skills found.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = inventory
        .commands
        .iter()
        .chain(&inventory.agents)
        .chain(&inventory.skills)
        .map(row)
        .collect();
    println!();
    print_table(&["KIND", "NAME", "TOOLS", "DESCRIPTION"], rows);
    Ok(())
}

fn row(item: &InventoryItem) -> Vec<String> {
    vec![
        item.kind.as_str().to_string(),
        item.name.clone(),
        item.tools.join(","),
        item.description.clone().unwrap_or_default(),
    ]
}
