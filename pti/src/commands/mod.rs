mod completions;
mod eslint;
mod fix_types;
mod init;
mod package_json;
mod rollup;
mod templates;
mod tsconfig;
mod vite;
mod vitest;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eslint::EslintCommand;
use eyre::Result;
use fix_types::FixTypesCommand;
use init::InitCommand;
use package_json::PackageJsonCommand;
use pti_config::Project;
use pti_core::find_repo_root;
use pti_manifest::{Settings, invalid_directory};
use rollup::RollupCommand;
use templates::{GitCommand, PrettierCommand, ReleaseItCommand, YarnCommand};
use tsconfig::TsconfigCommand;
use vite::ViteCommand;
use vitest::VitestCommand;

use crate::ops::Workspace;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for pti_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "pti")]
#[command(version)]
#[command(about = "Generate build tooling configuration for TypeScript libraries")]
pub(crate) struct Cli {
    /// Repository root (defaults to the nearest directory containing .git)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Show debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only show errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        if let Commands::Completions(cmd) = &self.command {
            return cmd.run();
        }

        let root = match self.root {
            Some(root) if root.is_dir() => root,
            Some(root) => {
                return Err(pti_core::Error::invalid_argument(format!(
                    "root directory '{}' does not exist",
                    root.display()
                ))
                .into());
            }
            None => find_repo_root(&std::env::current_dir()?)?,
        };
        let settings = Settings::load(&root).unwrap_or_exit();
        let ws = Workspace::new(root, settings)?;

        match &self.command {
            Commands::Eslint(cmd) => cmd.run(&ws).await,
            Commands::FixTypes(cmd) => cmd.run(&ws).await,
            Commands::Git(cmd) => cmd.run(&ws).await,
            Commands::Init(cmd) => cmd.run(&ws).await,
            Commands::PackageJson(cmd) => cmd.run(&ws).await,
            Commands::Prettier(cmd) => cmd.run(&ws).await,
            Commands::ReleaseIt(cmd) => cmd.run(&ws).await,
            Commands::Rollup(cmd) => cmd.run(&ws).await,
            Commands::Tsconfig(cmd) => cmd.run(&ws).await,
            Commands::Vite(cmd) => cmd.run(&ws).await,
            Commands::Vitest(cmd) => cmd.run(&ws).await,
            Commands::Yarn(cmd) => cmd.run(&ws).await,
            Commands::Completions(_) => Ok(()),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the ESLint flat config
    Eslint(EslintCommand),

    /// Rename built declaration files to their module-specific extension
    FixTypes(FixTypesCommand),

    /// Create .gitignore and LICENSE
    Git(GitCommand),

    /// Generate every config file and install dependencies
    Init(InitCommand),

    /// Update package.json fields, scripts and devDependencies
    PackageJson(PackageJsonCommand),

    /// Create .prettierrc
    Prettier(PrettierCommand),

    /// Generate release-it configs for every release channel
    ReleaseIt(ReleaseItCommand),

    /// Generate Rollup configs for every module format
    Rollup(RollupCommand),

    /// Generate the root tsconfig and per-format compiler configs
    Tsconfig(TsconfigCommand),

    /// Generate the Vite dev-server config and entry files
    Vite(ViteCommand),

    /// Generate the Vitest config and a placeholder test
    Vitest(VitestCommand),

    /// Create .yarnrc.yml
    Yarn(YarnCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Project layout flags shared by most commands.
///
/// Unset flags fall back to `pti.toml`, then to the built-in defaults.
#[derive(Args, Debug, Default, Clone)]
pub struct ProjectArgs {
    /// Folder for generated config files
    #[arg(short, long)]
    pub config: Option<String>,

    /// Folder for the development app
    #[arg(short, long)]
    pub development: Option<String>,

    /// Folder for build output
    #[arg(short, long)]
    pub library: Option<String>,

    /// Folder for library sources
    #[arg(short, long)]
    pub source: Option<String>,

    /// Enable React support
    #[arg(short, long, num_args = 0..=1, default_missing_value = "true")]
    pub react: Option<bool>,

    /// Emit source maps
    #[arg(
        short = 'm',
        long,
        alias = "sourceMap",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub source_map: Option<bool>,

    /// Also build a UMD bundle
    #[arg(short, long, num_args = 0..=1, default_missing_value = "true")]
    pub umd: Option<bool>,
}

impl ProjectArgs {
    /// Layer flags over `pti.toml` over defaults.
    ///
    /// Directory flags get the same checks as the `pti.toml` values.
    pub fn resolve(&self, settings: &Settings) -> pti_core::Result<Project> {
        let defaults = Project::default();
        let dirs = &settings.directories;
        let features = &settings.features;

        Ok(Project {
            config: pick_dir("config", &self.config, &dirs.config, defaults.config)?,
            development: pick_dir(
                "development",
                &self.development,
                &dirs.development,
                defaults.development,
            )?,
            library: pick_dir("library", &self.library, &dirs.library, defaults.library)?,
            source: pick_dir("source", &self.source, &dirs.source, defaults.source)?,
            react: self.react.or(features.react).unwrap_or(defaults.react),
            source_map: self
                .source_map
                .or(features.source_map)
                .unwrap_or(defaults.source_map),
            umd: self.umd.or(features.umd).unwrap_or(defaults.umd),
        })
    }
}

fn pick_dir(
    name: &str,
    flag: &Option<String>,
    file: &Option<String>,
    default: String,
) -> pti_core::Result<String> {
    match flag {
        Some(value) => match invalid_directory(value) {
            Some(reason) => Err(pti_core::Error::invalid_argument(format!(
                "--{name} '{value}' {reason}"
            ))),
            None => Ok(value.clone()),
        },
        None => Ok(file.clone().unwrap_or(default)),
    }
}
