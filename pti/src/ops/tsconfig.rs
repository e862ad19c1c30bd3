//! Root `tsconfig.json` plus the runtime and declaration configs of every
//! built format.

use eyre::Result;
use indexmap::IndexMap;
use pti_codegen::{
    files::{JsonFile, SourceIndex},
    write_configs,
};
use pti_config::{
    Merge, Project, TsConfigOverrides, create_standard_config,
    tsconfig::{format_overrides, root_overrides},
};
use pti_core::{GeneratedFile, WriteResult};
use tracing::info;

use super::Workspace;
use crate::reports::GenerateReport;

/// Whether the source folder has to be created with a placeholder entry.
pub async fn source_missing(ws: &Workspace, project: &Project) -> bool {
    let source = ws.root.join(&project.source);
    !tokio::fs::try_exists(&source).await.unwrap_or(false)
}

pub async fn tsconfig(ws: &Workspace, project: &Project) -> Result<GenerateReport> {
    let create_source = source_missing(ws, project).await;
    write_tsconfigs(ws, project, create_source).await
}

/// Write every tsconfig, plus `<source>/index.ts` when `create_source` is set.
pub async fn write_tsconfigs(
    ws: &Workspace,
    project: &Project,
    create_source: bool,
) -> Result<GenerateReport> {
    let user = ws.compiler_overrides();

    let root = create_standard_config(root_overrides(project).merge(user.clone()));
    let mut files = vec![JsonFile::new("tsconfig.json", &root)?.to_file(&ws.root)];
    if create_source {
        files.push(SourceIndex::new(project.source.as_str()).to_file(&ws.root));
    }
    let mut report = ws.write("tsconfig", files).await?;

    let folder = ws.root.join(&project.config).join("types");
    let overrides: IndexMap<String, TsConfigOverrides> = project
        .formats()
        .into_iter()
        .map(|format| {
            let overrides = format_overrides(project, format).merge(user.clone());
            (format.name().to_string(), overrides)
        })
        .collect();

    let derived = write_configs(&folder, overrides, &ws.formatter).await?;
    for name in derived.keys() {
        for file in [format!("{name}.json"), format!("{name}.declaration.json")] {
            report.push(ws.relative(&folder.join(file)), WriteResult::Written);
        }
    }

    info!(formats = derived.len(), "wrote per-format compiler configs");
    Ok(report)
}
