//! Read-only view of what a plugin directory contains.
//!
//! Commands and agents are markdown files under `commands/` and `agents/`.
//! Skills are either `skills/<name>/SKILL.md` or loose `skills/*.md` files.
//! Each file may open with YAML frontmatter carrying `name`, `description`
//! and `tools`; anything else in the frontmatter is ignored.

use crate::error::{PluginError, Result};
use crate::{io, paths};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Command,
    Agent,
    Skill,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Command => "command",
            ItemKind::Agent => "agent",
            ItemKind::Skill => "skill",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InventoryItem {
    pub kind: ItemKind,
    pub name: String,
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<String>,
    pub path: PathBuf,
}

/// `.claude-plugin/plugin.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PluginManifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PluginInventory {
    pub name: String,
    pub manifest: Option<PluginManifest>,
    pub commands: Vec<InventoryItem>,
    pub agents: Vec<InventoryItem>,
    pub skills: Vec<InventoryItem>,
}

impl PluginInventory {
    /// Scan the source copy of plugin `name` under `source_root/plugins/`.
    pub fn load(source_root: &Path, name: &str) -> Result<Self> {
        paths::validate_plugin_name(name)?;
        let dir = paths::plugin_source_dir(source_root, name);
        if !dir.is_dir() {
            return Err(PluginError::PluginNotFound {
                name: name.to_string(),
                source_dir: paths::plugins_root(source_root),
            });
        }
        Self::scan(name, &dir)
    }

    pub fn scan(name: &str, dir: &Path) -> Result<Self> {
        let manifest_path = paths::plugin_manifest_path(dir);
        let manifest = if manifest_path.is_file() {
            let data = std::fs::read_to_string(&manifest_path)?;
            Some(serde_json::from_str::<PluginManifest>(&data)?)
        } else {
            None
        };

        let commands = scan_markdown(&dir.join(paths::COMMANDS_DIR), ItemKind::Command)?;
        let agents = scan_markdown(&dir.join(paths::AGENTS_DIR), ItemKind::Agent)?;
        let skills = scan_skills(&dir.join(paths::SKILLS_DIR))?;

        Ok(Self {
            name: name.to_string(),
            manifest,
            commands,
            agents,
            skills,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.agents.is_empty() && self.skills.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Frontmatter
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
struct Frontmatter {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    tools: Option<Tools>,
}

/// Agents list tools either as a YAML sequence or a comma-separated string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Tools {
    List(Vec<String>),
    Csv(String),
}

impl Tools {
    fn into_vec(self) -> Vec<String> {
        match self {
            Tools::List(v) => v,
            Tools::Csv(s) => s
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

fn parse_frontmatter(path: &Path, content: &str) -> Frontmatter {
    let (Some(raw), _) = io::split_frontmatter(content) else {
        return Frontmatter::default();
    };
    match serde_yaml::from_str::<Frontmatter>(raw) {
        Ok(fm) => fm,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "ignoring malformed frontmatter");
            Frontmatter::default()
        }
    }
}

fn read_item(path: &Path, fallback_name: &str, kind: ItemKind) -> Result<InventoryItem> {
    let content = std::fs::read_to_string(path)?;
    let fm = parse_frontmatter(path, &content);
    Ok(InventoryItem {
        kind,
        name: fm.name.unwrap_or_else(|| fallback_name.to_string()),
        description: fm.description,
        tools: fm.tools.map(Tools::into_vec).unwrap_or_default(),
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Directory scanning
// ---------------------------------------------------------------------------

fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "md")
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut entries = std::fs::read_dir(dir)?
        .map(|e| e.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort();
    Ok(entries)
}

fn scan_markdown(dir: &Path, kind: ItemKind) -> Result<Vec<InventoryItem>> {
    let mut items = Vec::new();
    for path in sorted_entries(dir)? {
        if path.is_file() && is_markdown(&path) {
            items.push(read_item(&path, &file_stem(&path), kind)?);
        }
    }
    Ok(items)
}

fn scan_skills(dir: &Path) -> Result<Vec<InventoryItem>> {
    let mut items = Vec::new();
    for path in sorted_entries(dir)? {
        if path.is_dir() {
            let skill_file = path.join(paths::SKILL_FILE);
            if skill_file.is_file() {
                items.push(read_item(&skill_file, &file_stem(&path), ItemKind::Skill)?);
            }
        } else if is_markdown(&path) {
            items.push(read_item(&path, &file_stem(&path), ItemKind::Skill)?);
        }
    }
    Ok(items)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
