use eyre::Result;
use pti_codegen::files::JsonFile;
use pti_config::{Project, package_json::stitch_package_json};
use pti_core::{GeneratedFile, run};
use pti_manifest::{PACKAGE_JSON, PackageJson, Toolchain};
use serde_json::Value;
use tracing::info;

use super::{IntoReport, Workspace};
use crate::reports::GenerateReport;

/// Rewrite package.json with build fields, scripts and pinned
/// devDependencies, then install unless told not to.
pub async fn package_json(
    ws: &Workspace,
    project: &Project,
    skip_install: bool,
) -> Result<GenerateReport> {
    let package = PackageJson::open(&ws.root).into_report()?;
    let toolchain = Toolchain::bundled().into_report()?;
    let fields = stitch_package_json(&package, project, &toolchain, &ws.runner()).into_report()?;

    let file = JsonFile::new(PACKAGE_JSON, &Value::Object(fields))?.to_file(&ws.root);
    let mut report = ws.write("package.json", vec![file]).await?;

    if skip_install || !ws.install {
        return Ok(report);
    }

    info!(program = %ws.package_manager, "installing dependencies");
    run(&ws.package_manager, &["install"], &ws.root).await?;
    report.commands.push(format!("{} install", ws.package_manager));

    Ok(report)
}
