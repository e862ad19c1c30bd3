//! Generators for tool configs that need nothing but the project layout.

use eyre::Result;
use pti_codegen::files::{
    AppTsx, DevEntry, EslintConfigJs, IndexHtml, PlaceholderTest, ReactEntry, RollupConfigJs,
    RootEslintConfig, ViteConfigTs, VitestConfigTs,
};
use pti_config::{
    Project,
    eslint::{EslintOverrides, create_eslint_config},
    rollup::create_rollup_configs,
    vite::{ViteConfig, create_vite_config},
    vitest::{VitestConfig, create_vitest_config},
};
use pti_core::GeneratedFile;
use pti_manifest::PackageJson;

use super::{IntoReport, Workspace};
use crate::reports::GenerateReport;

/// `<config>/eslint.config.js` and the root re-export.
pub async fn eslint(ws: &Workspace, project: &Project) -> Result<GenerateReport> {
    let config = create_eslint_config(project, EslintOverrides::default());

    let files = vec![
        EslintConfigJs::new(project.config.as_str(), &config)?.to_file(&ws.root),
        RootEslintConfig::new(project.config.as_str()).to_file(&ws.root),
    ];
    ws.write("eslint", files).await
}

/// One Rollup config per built format, read from package.json.
pub async fn rollup(ws: &Workspace, project: &Project) -> Result<GenerateReport> {
    let package = PackageJson::open(&ws.root).into_report()?;
    let configs = create_rollup_configs(&package, project).into_report()?;

    let files = configs
        .iter()
        .map(|config| {
            RollupConfigJs::new(project.config.as_str(), config).map(|file| file.to_file(&ws.root))
        })
        .collect::<pti_core::Result<Vec<_>>>()?;
    ws.write("rollup", files).await
}

pub async fn vite(ws: &Workspace, project: &Project) -> Result<GenerateReport> {
    let config = create_vite_config(&project.development, ViteConfig::default());

    let mut files = vec![
        ViteConfigTs::new(project.config.as_str(), &config)?.to_file(&ws.root),
        IndexHtml::new(project).to_file(&ws.root),
    ];
    if project.react {
        files.push(ReactEntry::new(project).to_file(&ws.root));
        files.push(AppTsx::new(project).to_file(&ws.root));
    } else {
        files.push(DevEntry::new(project).to_file(&ws.root));
    }
    ws.write("vite", files).await
}

pub async fn vitest(ws: &Workspace, project: &Project) -> Result<GenerateReport> {
    let config = create_vitest_config(project, VitestConfig::default());

    let files = vec![
        VitestConfigTs::new(project.config.as_str(), &config)?.to_file(&ws.root),
        PlaceholderTest::new(project.source.as_str()).to_file(&ws.root),
    ];
    ws.write("vitest", files).await
}
