//! End-to-end resolution against fabricated engine directories on disk.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;
use uerules::{
    BuildTarget, DiskLister, RulesError, TargetPlatform, TargetType, subprocess_dependencies,
};

fn write_mac_bundle(engine_dir: &Path) -> PathBuf {
    let bundle = engine_dir.join("Binaries/Mac/UnrealCEFSubProcess.app");
    let framework = bundle.join("Contents/Frameworks/Chromium Embedded Framework.framework");
    fs::create_dir_all(bundle.join("Contents/MacOS")).unwrap();
    fs::create_dir_all(framework.join("Resources")).unwrap();

    fs::write(bundle.join("Contents/Info.plist"), "<plist/>").unwrap();
    fs::write(bundle.join("Contents/MacOS/UnrealCEFSubProcess"), "bin").unwrap();
    fs::write(framework.join("Chromium Embedded Framework"), "lib").unwrap();
    fs::write(framework.join("Resources/icudtl.dat"), "icu").unwrap();
    bundle
}

#[test]
fn mac_bundle_expands_to_every_file() {
    let dir = tempdir().unwrap();
    let bundle = write_mac_bundle(dir.path());

    let target = BuildTarget::new(TargetPlatform::Mac, TargetType::Game, dir.path());
    let deps = subprocess_dependencies(&target, &DiskLister).unwrap();

    let framework = bundle.join("Contents/Frameworks/Chromium Embedded Framework.framework");
    let expected = BTreeSet::from([
        bundle.join("Contents/Info.plist"),
        bundle.join("Contents/MacOS/UnrealCEFSubProcess"),
        framework.join("Chromium Embedded Framework"),
        framework.join("Resources/icudtl.dat"),
    ]);
    assert_eq!(deps, expected);
    assert!(deps.iter().all(|p| p.is_file()));
}

#[test]
fn mac_missing_bundle_fails_loudly() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("Binaries/Mac")).unwrap();

    let target = BuildTarget::new(TargetPlatform::Mac, TargetType::Game, dir.path());
    let err = subprocess_dependencies(&target, &DiskLister).unwrap_err();

    let bundle = dir.path().join("Binaries/Mac/UnrealCEFSubProcess.app");
    assert!(matches!(err, RulesError::DirectoryNotFound(p) if p == bundle));
}

#[test]
fn mac_empty_bundle_stages_nothing() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("Binaries/Mac/UnrealCEFSubProcess.app")).unwrap();

    let target = BuildTarget::new(TargetPlatform::Mac, TargetType::Game, dir.path());
    assert!(subprocess_dependencies(&target, &DiskLister).unwrap().is_empty());
}

#[test]
fn server_resolution_never_reads_the_engine_dir() {
    // The directory does not exist; server resolution must not care.
    let missing = PathBuf::from("/definitely/not/an/engine");
    for platform in TargetPlatform::ALL {
        let target = BuildTarget::new(platform, TargetType::Server, &missing);
        assert!(subprocess_dependencies(&target, &DiskLister).unwrap().is_empty());
    }
}

#[test]
fn windows_and_linux_paths_are_constructed_not_probed() {
    // No engine exists at this path; single-file platforms still resolve.
    let missing = Path::new("/definitely/not/an/engine");

    let target = BuildTarget::new(TargetPlatform::Win64, TargetType::Game, missing);
    assert_eq!(
        subprocess_dependencies(&target, &DiskLister).unwrap(),
        BTreeSet::from([missing.join("Binaries/Win64/UnrealCEFSubProcess.exe")])
    );

    let target = BuildTarget::new(TargetPlatform::Linux, TargetType::Client, missing);
    assert_eq!(
        subprocess_dependencies(&target, &DiskLister).unwrap(),
        BTreeSet::from([missing.join("Binaries/Linux/UnrealCEFSubProcess")])
    );
}

#[test]
fn repeated_resolution_is_identical() {
    let dir = tempdir().unwrap();
    write_mac_bundle(dir.path());

    let target = BuildTarget::new(TargetPlatform::Mac, TargetType::Editor, dir.path());
    let first = subprocess_dependencies(&target, &DiskLister).unwrap();
    let second = subprocess_dependencies(&target, &DiskLister).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), 4);
}
