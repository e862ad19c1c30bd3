use std::path::{Path, PathBuf};

use crate::{Error, Formatter, Result, Syntax};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Resolve this file against a base directory, rendering its content
    fn to_file(&self, base: &Path) -> File {
        File::new(self.path(base), self.render()).with_rules(self.rules())
    }
}

/// Write `content` to `path`, creating missing parent directories first.
///
/// The content is fully computed by the caller, so a failure never leaves a
/// half-rendered file behind.
pub async fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::io(parent, e))?;
    }
    tokio::fs::write(path, content)
        .await
        .map_err(|e| Error::io(path, e))
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// A file to be generated
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: always overwrite)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn rules(&self) -> &FileRules {
        &self.rules
    }

    /// Check if the file exists
    pub async fn exists(&self) -> bool {
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }

    /// Write the file according to its rules, formatting it first when the
    /// rules name a syntax.
    pub async fn write(&self, formatter: &Formatter) -> Result<WriteResult> {
        if self.rules.overwrite == Overwrite::IfMissing && self.exists().await {
            return Ok(WriteResult::Skipped);
        }

        let content = match self.rules.syntax {
            Some(syntax) => formatter.format(self.content.clone(), syntax).await,
            None => self.content.clone(),
        };

        write_file(&self.path, &content).await?;
        Ok(WriteResult::Written)
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone)]
pub struct FileRules {
    pub overwrite: Overwrite,
    /// Syntax handed to the formatter; `None` writes the content verbatim.
    pub syntax: Option<Syntax>,
}

impl FileRules {
    /// Always overwrite, formatting as the given syntax
    pub fn formatted(syntax: Syntax) -> Self {
        Self {
            overwrite: Overwrite::Always,
            syntax: Some(syntax),
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated configuration)
    Always,
    /// Only create if file doesn't exist (placeholders)
    IfMissing,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Always,
            syntax: None,
        }
    }
}
