//! Target platforms, target types, and the evaluation context build rules
//! run against.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RulesError;

/// Platforms a build description knows how to talk about.
///
/// The four desktop platforms carry the embedded browser runtime; `Android`
/// and `Ios` are recognized names that receive none of its binaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetPlatform {
    Win64,
    Win32,
    Mac,
    Linux,
    Android,
    #[serde(rename = "IOS")]
    Ios,
}

impl TargetPlatform {
    pub const ALL: [TargetPlatform; 6] = [
        TargetPlatform::Win64,
        TargetPlatform::Win32,
        TargetPlatform::Mac,
        TargetPlatform::Linux,
        TargetPlatform::Android,
        TargetPlatform::Ios,
    ];

    /// Canonical engine spelling, as used in `Binaries/<Platform>` paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetPlatform::Win64 => "Win64",
            TargetPlatform::Win32 => "Win32",
            TargetPlatform::Mac => "Mac",
            TargetPlatform::Linux => "Linux",
            TargetPlatform::Android => "Android",
            TargetPlatform::Ios => "IOS",
        }
    }

    /// True for the desktop platforms that ship CEF, the embedded browser
    /// framework.
    pub fn supports_cef(&self) -> bool {
        matches!(
            self,
            TargetPlatform::Win64
                | TargetPlatform::Win32
                | TargetPlatform::Mac
                | TargetPlatform::Linux
        )
    }

    /// The per-platform binaries directory under an engine root.
    pub fn binaries_dir(&self, engine_dir: &Path) -> PathBuf {
        engine_dir.join("Binaries").join(self.as_str())
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetPlatform {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetPlatform::ALL
            .iter()
            .copied()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| RulesError::UnknownPlatform(s.to_string()))
    }
}

/// What kind of product a target builds.
///
/// Server targets are headless: nothing that exists for the player's screen,
/// the embedded browser included, is staged for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetType {
    Game,
    Editor,
    Client,
    Server,
    Program,
}

impl TargetType {
    pub const ALL: [TargetType; 5] = [
        TargetType::Game,
        TargetType::Editor,
        TargetType::Client,
        TargetType::Server,
        TargetType::Program,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetType::Game => "Game",
            TargetType::Editor => "Editor",
            TargetType::Client => "Client",
            TargetType::Server => "Server",
            TargetType::Program => "Program",
        }
    }

    pub fn is_server(&self) -> bool {
        matches!(self, TargetType::Server)
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetType {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| RulesError::UnknownTargetType(s.to_string()))
    }
}

/// Read-only context a build description is evaluated against: the platform
/// and product being built, and the engine installation paths are joined to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTarget {
    pub platform: TargetPlatform,
    pub target_type: TargetType,
    pub engine_dir: PathBuf,
}

impl BuildTarget {
    pub fn new(
        platform: TargetPlatform,
        target_type: TargetType,
        engine_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            platform,
            target_type,
            engine_dir: engine_dir.into(),
        }
    }
}
