//! Directory-tree expansion for bundle staging.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::RulesError;

/// Expands a directory tree into the regular files beneath it.
///
/// This is the one seam staging logic needs: implementations may serve the
/// real filesystem or an in-memory stand-in, so resolution can be tested
/// without touching disk.
pub trait DirectoryLister {
    /// Every regular file under `root`, recursively, in sorted order.
    ///
    /// A missing or non-directory `root` is an error. An existing directory
    /// with nothing in it yields an empty list.
    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>, RulesError>;
}

/// [`DirectoryLister`] backed by the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskLister;

impl DirectoryLister for DiskLister {
    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>, RulesError> {
        if !root.is_dir() {
            return Err(RulesError::DirectoryNotFound(root.to_path_buf()));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(root) {
            let entry = entry.map_err(io::Error::from)?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_lists_nested_files_sorted() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("bundle");
        fs::create_dir_all(root.join("b/inner")).unwrap();
        fs::write(root.join("z.txt"), "z").unwrap();
        fs::write(root.join("a.txt"), "a").unwrap();
        fs::write(root.join("b/inner/c.bin"), "c").unwrap();

        let files = DiskLister.list_files(&root).unwrap();

        assert_eq!(
            files,
            vec![
                root.join("a.txt"),
                root.join("b/inner/c.bin"),
                root.join("z.txt"),
            ]
        );
    }

    #[test]
    fn test_directories_are_not_listed() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("bundle");
        fs::create_dir_all(root.join("only/dirs/here")).unwrap();
        fs::write(root.join("only/file"), "x").unwrap();

        let files = DiskLister.list_files(&root).unwrap();

        assert_eq!(files, vec![root.join("only/file")]);
    }

    #[test]
    fn test_empty_directory_yields_empty_list() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("empty");
        fs::create_dir_all(&root).unwrap();

        assert!(DiskLister.list_files(&root).unwrap().is_empty());
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("nope");

        let err = DiskLister.list_files(&root).unwrap_err();
        assert!(matches!(err, RulesError::DirectoryNotFound(p) if p == root));
    }

    #[test]
    fn test_file_root_is_an_error() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("file");
        fs::write(&root, "not a dir").unwrap();

        assert!(matches!(
            DiskLister.list_files(&root),
            Err(RulesError::DirectoryNotFound(_))
        ));
    }
}
