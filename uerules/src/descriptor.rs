//! `.uproject` / `.uplugin` descriptor parsing.
//!
//! Descriptors are JSON files enumerating the modules a project or plugin
//! brings into the build. Only the fields rules evaluation cares about are
//! modeled; everything else in the file is ignored.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RulesError;
use crate::target::TargetPlatform;

/// Descriptor format version current engine tooling writes.
const EXPECTED_FILE_VERSION: i32 = 3;

/// Where a module is allowed to load, the `Type` field of a module entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModuleHostType {
    Runtime,
    RuntimeNoCommandlet,
    Developer,
    Editor,
    EditorNoCommandlet,
    Program,
}

impl ModuleHostType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleHostType::Runtime => "Runtime",
            ModuleHostType::RuntimeNoCommandlet => "RuntimeNoCommandlet",
            ModuleHostType::Developer => "Developer",
            ModuleHostType::Editor => "Editor",
            ModuleHostType::EditorNoCommandlet => "EditorNoCommandlet",
            ModuleHostType::Program => "Program",
        }
    }
}

impl fmt::Display for ModuleHostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One module declared by a project or plugin descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModuleDescriptor {
    pub name: String,

    #[serde(rename = "Type")]
    pub host_type: ModuleHostType,

    /// Loading phases form an open set across engine versions, so the raw
    /// string is kept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loading_phase: Option<String>,

    /// Platform allowlist. Raw names, so descriptors mentioning platforms
    /// this crate does not model still parse.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub whitelist_platforms: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_dependencies: Vec<String>,
}

impl ModuleDescriptor {
    /// True when the module builds for `platform` (an empty allowlist allows
    /// every platform).
    pub fn supports_platform(&self, platform: TargetPlatform) -> bool {
        self.whitelist_platforms.is_empty()
            || self
                .whitelist_platforms
                .iter()
                .any(|name| name.eq_ignore_ascii_case(platform.as_str()))
    }
}

/// Reference from a project to a plugin it enables or disables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PluginReference {
    pub name: String,
    pub enabled: bool,
}

/// Parsed `.uproject` descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectDescriptor {
    pub file_version: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_association: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub modules: Vec<ModuleDescriptor>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<PluginReference>,
}

impl ProjectDescriptor {
    /// Reads and parses a `.uproject` file.
    pub fn load(path: &Path) -> Result<Self, RulesError> {
        let text = fs::read_to_string(path)?;
        let descriptor: Self = serde_json::from_str(&text)?;
        check_file_version(descriptor.file_version, path);
        ensure_unique_modules(&descriptor.modules)?;
        Ok(descriptor)
    }
}

/// Parsed `.uplugin` descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PluginDescriptor {
    pub file_version: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_name: Option<String>,

    pub friendly_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(default)]
    pub can_contain_content: bool,

    #[serde(default)]
    pub modules: Vec<ModuleDescriptor>,
}

impl PluginDescriptor {
    /// Reads and parses a `.uplugin` file.
    pub fn load(path: &Path) -> Result<Self, RulesError> {
        let text = fs::read_to_string(path)?;
        let descriptor: Self = serde_json::from_str(&text)?;
        check_file_version(descriptor.file_version, path);
        ensure_unique_modules(&descriptor.modules)?;
        Ok(descriptor)
    }
}

fn check_file_version(version: i32, path: &Path) {
    if version != EXPECTED_FILE_VERSION {
        log::warn!(
            "{}: descriptor FileVersion is {}, expected {}",
            path.display(),
            version,
            EXPECTED_FILE_VERSION
        );
    }
}

fn ensure_unique_modules(modules: &[ModuleDescriptor]) -> Result<(), RulesError> {
    for (i, module) in modules.iter().enumerate() {
        if module.name.is_empty() {
            return Err(RulesError::InvalidDescriptor(
                "module with empty name".to_string(),
            ));
        }
        if modules[..i].iter().any(|m| m.name == module.name) {
            return Err(RulesError::InvalidDescriptor(format!(
                "duplicate module '{}'",
                module.name
            )));
        }
    }
    Ok(())
}
