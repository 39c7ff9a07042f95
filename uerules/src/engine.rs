use std::fs;
use std::path::{Path, PathBuf};

/// Detects an Unreal Engine installation's `Engine` directory.
///
/// Probes the conventional Epic Games install roots on Windows, macOS, and
/// Linux, preferring a source checkout's `Engine` directory when one sits
/// directly under a root.
pub fn detect_engine_dir() -> Option<PathBuf> {
    for root in candidate_roots() {
        // Source checkouts keep Engine/ directly under the root.
        let direct = root.join("Engine");
        if direct.is_dir() {
            log::info!("Found engine at {}", direct.display());
            return Some(direct);
        }

        if let Some(found) = newest_install(&root) {
            log::info!("Found engine at {}", found.display());
            return Some(found);
        }
    }

    None
}

fn candidate_roots() -> Vec<PathBuf> {
    let mut roots = vec![
        // Windows launcher installs
        PathBuf::from(r"C:\Program Files\Epic Games"),
        // macOS launcher installs
        PathBuf::from("/Users/Shared/Epic Games"),
    ];

    if let Some(home) = dirs::home_dir() {
        roots.push(home.join("UnrealEngine"));
    }

    roots
}

/// Launcher installs sit side by side as `UE_<version>`; the lexically last
/// name wins between versions.
fn newest_install(root: &Path) -> Option<PathBuf> {
    let entries = fs::read_dir(root).ok()?;

    let mut installs: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("UE_"))
                && p.join("Engine").is_dir()
        })
        .collect();

    installs.sort();
    installs.pop().map(|p| p.join("Engine"))
}
