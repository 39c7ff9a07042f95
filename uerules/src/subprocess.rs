//! Runtime-dependency staging for the embedded browser subprocess.
//!
//! The engine ships a helper binary the embedded browser spawns at runtime.
//! Packaged builds must carry it next to the game binary, so rules evaluation
//! has to know, per platform and target type, exactly which files to stage.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::error::RulesError;
use crate::scan::DirectoryLister;
use crate::target::{BuildTarget, TargetPlatform};

/// Base name of the browser helper binary under `Binaries/<Platform>`.
pub const SUBPROCESS_EXECUTABLE: &str = "UnrealCEFSubProcess";

/// On macOS the helper ships as an app bundle, staged file-by-file.
pub const SUBPROCESS_BUNDLE: &str = "UnrealCEFSubProcess.app";

/// Resolves the runtime files the browser subprocess needs staged.
///
/// Server targets stage nothing on any platform. Windows and Linux stage the
/// single helper executable; macOS expands the helper app bundle into one
/// dependency per contained file. Platforms without embedded-browser support
/// stage nothing. Only the macOS branch consults the lister; every other
/// branch is pure path construction.
///
/// # Errors
///
/// Fails when the macOS bundle cannot be enumerated. A missing bundle means a
/// broken engine installation, and the build must stop there instead of
/// packaging without the helper.
pub fn subprocess_dependencies(
    target: &BuildTarget,
    lister: &impl DirectoryLister,
) -> Result<BTreeSet<PathBuf>, RulesError> {
    if target.target_type.is_server() {
        return Ok(BTreeSet::new());
    }

    let binaries = target.platform.binaries_dir(&target.engine_dir);
    match target.platform {
        TargetPlatform::Mac => {
            let bundle = binaries.join(SUBPROCESS_BUNDLE);
            let files = lister.list_files(&bundle)?;
            Ok(files.into_iter().collect())
        }
        TargetPlatform::Linux => Ok(BTreeSet::from([binaries.join(SUBPROCESS_EXECUTABLE)])),
        TargetPlatform::Win64 | TargetPlatform::Win32 => Ok(BTreeSet::from([
            binaries.join(format!("{}.exe", SUBPROCESS_EXECUTABLE)),
        ])),
        TargetPlatform::Android | TargetPlatform::Ios => Ok(BTreeSet::new()),
    }
}
