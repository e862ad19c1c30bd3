//! Project layout shared by every generator.

use pti_core::join_path;

use crate::format::ModuleFormat;

pub const DEFAULT_CONFIG: &str = "config";
pub const DEFAULT_DEVELOPMENT: &str = "dev";
pub const DEFAULT_LIBRARY: &str = "dist";
pub const DEFAULT_SOURCE: &str = "src";

/// Folder holding test files, inside and next to the source folder.
pub const TEST_FOLDER: &str = "__tests__";

/// Directory names (relative to the repository root) and feature switches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub config: String,
    pub development: String,
    pub library: String,
    pub source: String,
    pub react: bool,
    pub source_map: bool,
    pub umd: bool,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            config: DEFAULT_CONFIG.to_string(),
            development: DEFAULT_DEVELOPMENT.to_string(),
            library: DEFAULT_LIBRARY.to_string(),
            source: DEFAULT_SOURCE.to_string(),
            react: false,
            source_map: false,
            umd: false,
        }
    }
}

impl Project {
    /// Formats built for this project, in build order.
    pub fn formats(&self) -> Vec<ModuleFormat> {
        ModuleFormat::ALL
            .into_iter()
            .filter(|format| self.umd || *format != ModuleFormat::Umd)
            .collect()
    }

    /// Source file extensions, `.tsx` included for React projects.
    pub fn extensions(&self) -> &'static [&'static str] {
        if self.react { &["ts", "tsx"] } else { &["ts"] }
    }

    /// `<folder>/**/*.<ext>` for every source extension.
    pub fn source_globs(&self, folder: &str) -> Vec<String> {
        self.extensions()
            .iter()
            .map(|ext| {
                let pattern = format!("*.{ext}");
                join_path(&[folder, "**", pattern.as_str()])
            })
            .collect()
    }

    /// Bundle path of `format`, relative to the repository root.
    pub fn entry(&self, format: ModuleFormat) -> String {
        join_path(&[self.library.as_str(), format.name(), format.entry_file()])
    }

    /// Folder holding the type declarations of `format`.
    pub fn types_dir(&self, format: ModuleFormat) -> String {
        join_path(&[self.library.as_str(), format.name(), "types"])
    }
}
