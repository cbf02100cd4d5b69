use serde::Serialize;

/// A plugin shipped in this repository's `plugins/` tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PluginSpec {
    pub name: &'static str,
    pub description: &'static str,
}

/// Known plugins, in install order for `all` and display order for `list`.
pub const AVAILABLE_PLUGINS: &[PluginSpec] = &[
    PluginSpec {
        name: "health",
        description: "Codebase health scanning, fixing, monitoring and refactor advice",
    },
    PluginSpec {
        name: "ddd",
        description: "Domain-driven design architecture scanning and fixing",
    },
    PluginSpec {
        name: "twophone",
        description: "Keep two platform apps in sync with review and auto-sync agents",
    },
    PluginSpec {
        name: "e2e",
        description: "Discover user paths and write end-to-end tests for them",
    },
    PluginSpec {
        name: "design-system",
        description: "Design tokens and component consistency checks",
    },
];

pub fn names() -> impl Iterator<Item = &'static str> {
    AVAILABLE_PLUGINS.iter().map(|p| p.name)
}

pub fn find(name: &str) -> Option<&'static PluginSpec> {
    AVAILABLE_PLUGINS.iter().find(|p| p.name == name)
}

/// The "Available plugins" block printed by usage output.
pub fn help_listing() -> String {
    let width = names().map(str::len).max().unwrap_or(0);
    let mut out = String::from("Available plugins:\n");
    for plugin in AVAILABLE_PLUGINS {
        out.push_str(&format!(
            "  {:width$}  {}\n",
            plugin.name,
            plugin.description,
            width = width
        ));
    }
    out
}
