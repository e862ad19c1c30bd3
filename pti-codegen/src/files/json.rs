use std::path::{Path, PathBuf};

use pti_core::{Error, FileRules, GeneratedFile, Overwrite, Result, Syntax};
use serde::Serialize;
use serde_json::Value;

/// Pretty-print a JSON value with a trailing newline.
pub fn render_json(value: &Value) -> String {
    format!("{value:#}\n")
}

/// A JSON document, relative to the repository root.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
    value: Value,
    overwrite: Overwrite,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>, value: &impl Serialize) -> Result<Self> {
        let path = path.into();
        let value = serde_json::to_value(value)
            .map_err(|e| Error::serialize(path.display().to_string(), e))?;

        Ok(Self {
            path,
            value,
            overwrite: Overwrite::Always,
        })
    }

    /// Keep an existing file instead of replacing it.
    pub fn if_missing(mut self) -> Self {
        self.overwrite = Overwrite::IfMissing;
        self
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl GeneratedFile for JsonFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: self.overwrite,
            syntax: Some(Syntax::Json),
        }
    }

    fn render(&self) -> String {
        render_json(&self.value)
    }
}
