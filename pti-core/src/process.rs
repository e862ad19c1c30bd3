use std::path::{Path, PathBuf};

use tokio::process::Command;

use crate::{Error, Result};

/// Run `program args..` in `cwd`, inheriting stdio, and fail on a non-zero exit.
pub async fn run(program: &str, args: &[&str], cwd: &Path) -> Result<()> {
    let command = std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ");
    // Resolves `yarn.cmd` and friends on Windows.
    let resolved = which::which(program).unwrap_or_else(|_| PathBuf::from(program));

    tracing::debug!(%command, cwd = %cwd.display(), "running");

    let status = Command::new(&resolved)
        .args(args)
        .current_dir(cwd)
        .status()
        .await
        .map_err(|source| Error::Spawn {
            program: program.to_string(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::Process { command, status })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_missing_program_is_spawn_error() {
        let temp = TempDir::new().unwrap();
        let err = run("pti-definitely-not-installed", &["install"], temp.path())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Spawn { ref program, .. } if program == "pti-definitely-not-installed"));
    }
}
