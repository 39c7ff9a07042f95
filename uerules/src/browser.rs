//! Build rules for the embedded browser module.

use crate::error::RulesError;
use crate::module::ModuleRules;
use crate::scan::DirectoryLister;
use crate::subprocess;
use crate::target::BuildTarget;

/// Name of the embedded browser module.
pub const BROWSER_MODULE: &str = "WebBrowserUI";

/// Engine modules the browser module uses internally on every platform.
const PRIVATE_DEPENDENCY_MODULES: [&str; 7] = [
    "Core",
    "CoreUObject",
    "ApplicationCore",
    "RHI",
    "InputCore",
    "Serialization",
    "HTTP",
];

/// Engine modules exposed through the browser module's public interface.
const PUBLIC_DEPENDENCY_MODULES: [&str; 2] = ["Slate", "SlateCore"];

/// Helper module required wherever CEF itself is linked.
const CEF_UTILS_MODULE: &str = "CEF3Utils";

/// The engine's bundled Chromium Embedded Framework third-party library.
const CEF_LIBRARY: &str = "CEF3";

/// Evaluates the browser module's build rules against a concrete target.
///
/// Every target gets the core/Slate dependency lists. Desktop targets also
/// link CEF, and non-server desktop targets stage the subprocess helper
/// files resolved by [`subprocess::subprocess_dependencies`].
pub fn browser_module_rules(
    target: &BuildTarget,
    lister: &impl DirectoryLister,
) -> Result<ModuleRules, RulesError> {
    let mut rules = ModuleRules::new(BROWSER_MODULE);
    rules.add_private_dependency_modules(PRIVATE_DEPENDENCY_MODULES);
    rules.add_public_dependency_modules(PUBLIC_DEPENDENCY_MODULES);

    if target.platform.supports_cef() {
        rules.add_private_dependency_modules([CEF_UTILS_MODULE]);
        rules.add_third_party_static_dependencies([CEF_LIBRARY]);

        let staged = subprocess::subprocess_dependencies(target, lister)?;
        log::debug!(
            "{}: staging {} subprocess files for {} {}",
            BROWSER_MODULE,
            staged.len(),
            target.platform,
            target.target_type
        );
        rules.add_runtime_dependencies(staged);
    }

    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::DiskLister;
    use crate::target::{TargetPlatform, TargetType};
    use std::path::PathBuf;

    fn rules_for(platform: TargetPlatform, target_type: TargetType) -> ModuleRules {
        // DiskLister is safe here: only the Mac branch enumerates, and these
        // tests stay off Mac.
        browser_module_rules(&BuildTarget::new(platform, target_type, "/Engine"), &DiskLister)
            .unwrap()
    }

    #[test]
    fn test_base_dependency_lists_are_always_present() {
        let rules = rules_for(TargetPlatform::Android, TargetType::Game);

        assert_eq!(
            rules.private_dependency_modules,
            vec![
                "Core",
                "CoreUObject",
                "ApplicationCore",
                "RHI",
                "InputCore",
                "Serialization",
                "HTTP"
            ]
        );
        assert_eq!(rules.public_dependency_modules, vec!["Slate", "SlateCore"]);
    }

    #[test]
    fn test_desktop_targets_link_cef() {
        let rules = rules_for(TargetPlatform::Win64, TargetType::Game);

        assert!(rules.private_dependency_modules.contains(&"CEF3Utils".to_string()));
        assert_eq!(rules.third_party_static_dependencies, vec!["CEF3"]);
    }

    #[test]
    fn test_mobile_targets_do_not_link_cef() {
        for platform in [TargetPlatform::Android, TargetPlatform::Ios] {
            let rules = rules_for(platform, TargetType::Game);
            assert!(!rules.private_dependency_modules.contains(&"CEF3Utils".to_string()));
            assert!(rules.third_party_static_dependencies.is_empty());
            assert!(rules.runtime_dependencies.is_empty());
        }
    }

    #[test]
    fn test_game_target_stages_subprocess() {
        let rules = rules_for(TargetPlatform::Win64, TargetType::Game);

        assert!(rules
            .runtime_dependencies
            .contains(&PathBuf::from("/Engine/Binaries/Win64/UnrealCEFSubProcess.exe")));
    }

    #[test]
    fn test_server_target_stages_nothing_but_still_links_cef() {
        let rules = rules_for(TargetPlatform::Linux, TargetType::Server);

        assert!(rules.third_party_static_dependencies.contains(&"CEF3".to_string()));
        assert!(rules.runtime_dependencies.is_empty());
    }
}
