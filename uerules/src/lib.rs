//! Build-description evaluation for an Unreal Engine project carrying an
//! embedded browser plugin.
//!
//! The engine's build orchestrator evaluates per-module rules to learn what
//! each module links against and which files must be staged alongside the
//! build output. This crate models those declarations as plain data and
//! implements the one piece with real branching logic: resolving the embedded
//! browser subprocess's runtime dependencies per target platform and target
//! type.

pub mod browser;
pub mod descriptor;
pub mod engine;
pub mod error;
pub mod module;
pub mod scan;
pub mod subprocess;
pub mod target;
pub mod targets;

// Re-export the working set for flat access
pub use browser::browser_module_rules;
pub use error::RulesError;
pub use module::ModuleRules;
pub use scan::{DirectoryLister, DiskLister};
pub use subprocess::subprocess_dependencies;
pub use target::{BuildTarget, TargetPlatform, TargetType};
pub use targets::{BuildSettingsVersion, TargetRules};
