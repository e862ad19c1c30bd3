use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for pti-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("no `{file}` found in '{dir}'")]
    #[diagnostic(
        code(pti::missing_file),
        help("create one with `npm init` before running this command")
    )]
    NotFound { file: String, dir: PathBuf },

    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(pti::json_parse_error))]
    Json {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(pti::toml_parse_error))]
    Toml {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("dependency '{name}' is not pinned by pti's bundled toolchain")]
    #[diagnostic(
        code(pti::missing_dependency),
        help("add '{name}' to the devDependencies of assets/toolchain.json")
    )]
    MissingDependency { name: String },

    #[error(
        "the file for format {format} was not found; expected entry to exist in the \"{field}\" field in package.json"
    )]
    #[diagnostic(
        code(pti::missing_entry),
        help("run `pti package-json` to populate the entry fields")
    )]
    MissingEntry { format: String, field: String },

    #[error("{message}")]
    #[diagnostic(code(pti::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    /// Create a JSON parse error, translating serde_json's line/column into a span
    pub fn json(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = offset_of(src, source.line(), source.column()).map(|o| SourceSpan::from((o, 0)));
        Box::new(Error::Json {
            filename: filename.to_string(),
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a TOML parse error with source context
    pub fn toml(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Toml {
            filename: filename.to_string(),
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a validation error, pointing at `needle` when it occurs in the source
    pub fn validation_at(
        message: impl Into<String>,
        src: &str,
        filename: &str,
        needle: &str,
    ) -> Box<Self> {
        let span = src
            .find(needle)
            .map(|start| SourceSpan::from((start, needle.len())));
        Box::new(Error::Validation {
            src: NamedSource::new(filename, src.to_string()),
            span,
            message: message.into(),
        })
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    pub fn missing_dependency(name: impl Into<String>) -> Box<Self> {
        Box::new(Error::MissingDependency { name: name.into() })
    }

    pub fn missing_entry(format: impl Into<String>, field: impl Into<String>) -> Box<Self> {
        Box::new(Error::MissingEntry {
            format: format.into(),
            field: field.into(),
        })
    }
}

/// Byte offset of a 1-based line/column position
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of() {
        let src = "{\n  \"a\": 1,\n}";
        assert_eq!(offset_of(src, 1, 1), Some(0));
        assert_eq!(offset_of(src, 2, 3), Some(4));
        assert_eq!(offset_of(src, 0, 0), None);
    }

    #[test]
    fn test_missing_entry_message() {
        let err = Error::missing_entry("cjs", "main");
        assert_eq!(
            err.to_string(),
            "the file for format cjs was not found; expected entry to exist in the \"main\" field in package.json"
        );
    }
}
