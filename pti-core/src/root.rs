use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Find the version-control root that anchors all project-relative paths.
///
/// Walks from `start` towards the filesystem root and returns the first
/// directory containing a `.git` entry (a directory, or a file for worktrees
/// and submodules).
pub fn find_repo_root(start: &Path) -> Result<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
        .ok_or_else(|| Error::RootNotFound {
            start: start.to_path_buf(),
        })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_finds_root_from_nested_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();
        let nested = temp.path().join("packages").join("a");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_repo_root(&nested).unwrap(), temp.path());
    }

    #[test]
    fn test_git_file_counts_as_root() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".git"), "gitdir: ../.git/worktrees/x").unwrap();

        assert_eq!(find_repo_root(temp.path()).unwrap(), temp.path());
    }

    #[test]
    fn test_nearest_root_wins() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();
        let inner = temp.path().join("vendor").join("lib");
        fs::create_dir_all(inner.join(".git")).unwrap();

        assert_eq!(find_repo_root(&inner).unwrap(), inner);
    }
}
