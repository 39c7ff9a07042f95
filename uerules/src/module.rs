use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::Serialize;

/// A module's build declaration: which engine modules it links against and
/// which files must be staged next to the build output at package time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModuleRules {
    pub name: String,

    /// Modules whose interfaces are part of this module's public surface.
    pub public_dependency_modules: Vec<String>,

    /// Modules used internally only.
    pub private_dependency_modules: Vec<String>,

    /// Engine third-party libraries linked statically.
    pub third_party_static_dependencies: Vec<String>,

    /// Files the build orchestrator copies alongside the compiled module.
    pub runtime_dependencies: BTreeSet<PathBuf>,
}

impl ModuleRules {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn add_public_dependency_modules<I, S>(&mut self, modules: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.public_dependency_modules
            .extend(modules.into_iter().map(Into::into));
    }

    pub fn add_private_dependency_modules<I, S>(&mut self, modules: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.private_dependency_modules
            .extend(modules.into_iter().map(Into::into));
    }

    pub fn add_third_party_static_dependencies<I, S>(&mut self, libraries: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.third_party_static_dependencies
            .extend(libraries.into_iter().map(Into::into));
    }

    /// Registers one file to be staged with the build output.
    pub fn add_runtime_dependency(&mut self, path: impl Into<PathBuf>) {
        self.runtime_dependencies.insert(path.into());
    }

    pub fn add_runtime_dependencies<I, P>(&mut self, paths: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.runtime_dependencies
            .extend(paths.into_iter().map(Into::into));
    }
}
