//! Literal template files.

use eyre::Result;
use pti_codegen::files::{GitIgnore, License, PrettierRc, ReleaseChannel, ReleaseItConfig, YarnRc};
use pti_config::Project;
use pti_core::GeneratedFile;
use pti_manifest::PackageJson;
use serde_json::Value;

use super::Workspace;
use crate::reports::GenerateReport;

const FALLBACK_HOLDER: &str = "the authors";

/// Copyright holder for the LICENSE: package.json `author`, then `name`.
fn license_holder(ws: &Workspace) -> String {
    let Ok(package) = PackageJson::open(&ws.root) else {
        return FALLBACK_HOLDER.to_string();
    };

    let author = match package.fields().get("author") {
        Some(Value::String(author)) => Some(author.as_str()),
        Some(Value::Object(author)) => author.get("name").and_then(Value::as_str),
        _ => None,
    };

    author
        .or(package.name())
        .unwrap_or(FALLBACK_HOLDER)
        .to_string()
}

pub async fn git(ws: &Workspace, project: &Project) -> Result<GenerateReport> {
    let files = vec![
        GitIgnore::new(project.library.as_str()).to_file(&ws.root),
        License::new(license_holder(ws)).to_file(&ws.root),
    ];
    ws.write("git", files).await
}

pub async fn prettier(ws: &Workspace) -> Result<GenerateReport> {
    ws.write("prettier", vec![PrettierRc.to_file(&ws.root)]).await
}

pub async fn yarn(ws: &Workspace) -> Result<GenerateReport> {
    ws.write("yarn", vec![YarnRc.to_file(&ws.root)]).await
}

/// One release-it config per channel.
pub async fn release_it(ws: &Workspace, project: &Project) -> Result<GenerateReport> {
    let runner = ws.runner();
    let files = ReleaseChannel::ALL
        .into_iter()
        .map(|channel| {
            ReleaseItConfig::new(project.config.as_str(), channel, runner.as_str()).to_file(&ws.root)
        })
        .collect();
    ws.write("release-it", files).await
}
