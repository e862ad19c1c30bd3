//! Core operations.
//!
//! This module contains the business logic for pti commands,
//! separated from CLI argument parsing and output rendering.

mod fix_types;
mod generators;
mod init;
mod package_json;
mod templates;
mod tsconfig;

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use futures::future::try_join_all;
use pti_config::{CompilerOptions, TsConfigOverrides};
use pti_core::{File, Formatter};
use pti_manifest::{SETTINGS_FILE, Settings};
use tracing::info;

pub use fix_types::fix_types;
pub use generators::{eslint, rollup, vite, vitest};
pub use init::init;
pub use package_json::package_json;
pub use templates::{git, prettier, release_it, yarn};
pub use tsconfig::{source_missing, tsconfig, write_tsconfigs};

use crate::reports::GenerateReport;

const DEFAULT_PACKAGE_MANAGER: &str = "yarn";

/// Converts boxed manifest errors so they can be downcast when rendered.
pub(crate) trait IntoReport<T> {
    fn into_report(self) -> Result<T>;
}

impl<T> IntoReport<T> for pti_manifest::Result<T> {
    fn into_report(self) -> Result<T> {
        self.map_err(|e| eyre::Report::new(*e))
    }
}

/// The repository every operation works against.
#[derive(Debug)]
pub struct Workspace {
    pub root: PathBuf,
    pub settings: Settings,
    pub formatter: Formatter,
    pub package_manager: String,
    /// Whether `package-json` installs dependencies afterwards
    pub install: bool,
    compiler_options: CompilerOptions,
}

impl Workspace {
    pub fn new(root: PathBuf, settings: Settings) -> Result<Self> {
        let formatter = match (settings.formatter.enabled, &settings.formatter.program) {
            (Some(false), _) => Formatter::Disabled,
            (_, Some(program)) => Formatter::prettier(root.join(program)),
            _ => Formatter::detect(&root),
        };

        let compiler_options = CompilerOptions::from_raw(&settings.tsconfig.compiler_options)
            .wrap_err_with(|| format!("invalid [tsconfig.compilerOptions] in {SETTINGS_FILE}"))?;

        let package_manager = settings
            .package_manager
            .program
            .clone()
            .unwrap_or_else(|| DEFAULT_PACKAGE_MANAGER.to_string());
        let install = settings.package_manager.install.unwrap_or(true);

        Ok(Self {
            root,
            settings,
            formatter,
            package_manager,
            install,
            compiler_options,
        })
    }

    /// Prefix for package.json scripts that call other scripts.
    pub fn runner(&self) -> String {
        format!("{} run", self.package_manager)
    }

    /// Compiler options from `pti.toml`, applied last to every tsconfig.
    pub fn compiler_overrides(&self) -> TsConfigOverrides {
        TsConfigOverrides::compiler_options(self.compiler_options.clone())
    }

    pub fn relative(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }

    /// Write every file of one step concurrently.
    pub async fn write(&self, step: &'static str, files: Vec<File>) -> Result<GenerateReport> {
        let results = try_join_all(files.iter().map(|file| file.write(&self.formatter))).await?;

        let mut report = GenerateReport::new(step);
        for (file, result) in files.iter().zip(results) {
            report.push(self.relative(file.path()), result);
        }

        info!(step, written = report.written(), "generated files");
        Ok(report)
    }
}
