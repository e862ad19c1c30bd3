//! Project settings read from `pti.toml` at the repository root.
//!
//! Every value is optional; command-line flags win over the file and the
//! file wins over built-in defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{Error, Result};

pub const SETTINGS_FILE: &str = "pti.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub directories: Directories,
    #[serde(default)]
    pub features: Features,
    #[serde(default)]
    pub package_manager: PackageManager,
    #[serde(default)]
    pub formatter: FormatterSettings,
    #[serde(default)]
    pub tsconfig: TsConfigSettings,
}

/// Directory names, relative to the repository root
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Directories {
    pub config: Option<String>,
    pub development: Option<String>,
    pub library: Option<String>,
    pub source: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Features {
    pub react: Option<bool>,
    pub source_map: Option<bool>,
    pub umd: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageManager {
    /// Executable used for `install` (defaults to yarn)
    pub program: Option<String>,
    /// Whether `package-json` runs an install afterwards
    pub install: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatterSettings {
    pub enabled: Option<bool>,
    pub program: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TsConfigSettings {
    /// Raw compiler options merged over every generated tsconfig.
    /// Numeric enum codes are allowed and normalized later.
    #[serde(rename = "compilerOptions", default)]
    pub compiler_options: Map<String, Value>,
}

impl Settings {
    /// Load `<root>/pti.toml`, falling back to defaults when it is absent.
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let path = root.as_ref().join(SETTINGS_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse settings from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let settings: Settings =
            toml::from_str(content).map_err(|e| Error::toml(e, content, filename))?;
        settings.validate(content, filename)?;
        Ok(settings)
    }

    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        let dirs = &self.directories;
        let named = [
            ("config", &dirs.config),
            ("development", &dirs.development),
            ("library", &dirs.library),
            ("source", &dirs.source),
        ];

        for (key, value) in named {
            let Some(value) = value else { continue };
            if let Some(reason) = invalid_directory(value) {
                return Err(Error::validation_at(
                    format!("directory '{}' {}", key, reason),
                    src,
                    filename,
                    &format!("\"{}\"", value),
                ));
            }
        }
        Ok(())
    }
}

/// Why `value` cannot be used as a project directory, if it cannot.
pub fn invalid_directory(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some("must not be empty")
    } else if value.starts_with('/') || value.contains('\\') || value.contains(':') {
        Some("must be a relative path using '/' separators")
    } else if value.split('/').any(|part| part == "..") {
        Some("must stay inside the repository")
    } else {
        None
    }
}
