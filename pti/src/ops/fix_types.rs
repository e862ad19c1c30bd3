//! Module-specific declaration files.
//!
//! `tsc` always emits `.d.ts`. Consumers resolving the `import` or `require`
//! condition expect `.d.mts` or `.d.cts` with matching relative imports, so
//! each emitted declaration is rewritten and renamed after the build.

use std::path::{Path, PathBuf};

use eyre::Result;
use futures::future::try_join_all;
use pti_config::{ModuleFormat, Project};
use pti_core::{Error, write_file};
use tracing::{debug, info};

use super::Workspace;
use crate::reports::FixTypesReport;

/// Point relative imports at `extension` and make named imports type-only.
pub fn rewrite_declaration(content: &str, extension: &str) -> String {
    content
        .replace(".ts';", &format!("{extension}';"))
        .replace(".js';", &format!("{extension}';"))
        .replace("import {", "import type {")
}

async fn declaration_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(Error::io(dir, e).into()),
    };

    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(|e| Error::io(dir, e))? {
        let path = entry.path();
        let is_declaration = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(".d.ts"));
        if is_declaration && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

async fn fix_file(path: PathBuf, extension: &str) -> Result<(PathBuf, PathBuf)> {
    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| Error::io(&path, e))?;

    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    let stem = name.strip_suffix(".d.ts").unwrap_or(name);
    let renamed = path.with_file_name(format!("{stem}{extension}"));

    write_file(&renamed, &rewrite_declaration(&content, extension)).await?;
    tokio::fs::remove_file(&path)
        .await
        .map_err(|e| Error::io(&path, e))?;

    debug!(from = %path.display(), to = %renamed.display(), "renamed declaration");
    Ok((path, renamed))
}

/// Rewrite and rename `<library>/<kind>/types/*.d.ts`.
///
/// Only `cjs` and `es` have module-specific declarations.
pub async fn fix_types(ws: &Workspace, project: &Project, kind: &str) -> Result<FixTypesReport> {
    let format: ModuleFormat = kind.parse()?;
    let extension = format!(".d.{}", format.declaration_extension()?);

    let dir = ws.root.join(project.types_dir(format));
    let files = declaration_files(&dir).await?;
    let renamed = try_join_all(files.into_iter().map(|path| fix_file(path, &extension))).await?;

    info!(format = format.name(), files = renamed.len(), "fixed declaration files");
    Ok(FixTypesReport {
        format: format.name(),
        renamed: renamed
            .into_iter()
            .map(|(from, to)| (ws.relative(&from), ws.relative(&to)))
            .collect(),
    })
}
