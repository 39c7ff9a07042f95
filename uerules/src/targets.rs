//! Target declarations: the buildable products of a project.

use serde::Serialize;

use crate::target::TargetType;

/// Engine build-settings compatibility version a target opts into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BuildSettingsVersion {
    V1,
    V2,
}

/// One buildable product of the project: a named target plus the modules it
/// pulls in beyond the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetRules {
    pub name: String,
    pub target_type: TargetType,
    pub default_build_settings: BuildSettingsVersion,
    pub extra_modules: Vec<String>,
}

impl TargetRules {
    /// The packaged game target for `project`.
    pub fn game(project: &str) -> Self {
        Self {
            name: project.to_string(),
            target_type: TargetType::Game,
            default_build_settings: BuildSettingsVersion::V2,
            extra_modules: vec![project.to_string()],
        }
    }

    /// The editor target for `project`, named `<project>Editor`.
    pub fn editor(project: &str) -> Self {
        Self {
            name: format!("{}Editor", project),
            target_type: TargetType::Editor,
            default_build_settings: BuildSettingsVersion::V2,
            extra_modules: vec![project.to_string()],
        }
    }
}
