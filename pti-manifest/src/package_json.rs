use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::{Error, Result};

pub const PACKAGE_JSON: &str = "package.json";

/// A project's package.json, kept as an ordered JSON object so that fields
/// pti does not manage survive a rewrite untouched.
#[derive(Debug, Clone)]
pub struct PackageJson {
    path: PathBuf,
    fields: Map<String, Value>,
}

impl PackageJson {
    /// Open and parse `<root>/package.json`.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let path = root.join(PACKAGE_JSON);
        if !path.is_file() {
            return Err(Box::new(Error::NotFound {
                file: PACKAGE_JSON.to_string(),
                dir: root.to_path_buf(),
            }));
        }

        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let filename = path.display().to_string();
        let fields = Self::parse_with_filename(&content, &filename)?;

        Ok(Self { path, fields })
    }

    /// Parse package.json content, reporting errors against `filename`.
    pub fn parse_with_filename(content: &str, filename: &str) -> Result<Map<String, Value>> {
        match serde_json::from_str::<Value>(content) {
            Ok(Value::Object(fields)) => Ok(fields),
            Ok(_) => Err(Error::validation_at(
                "package.json must contain a JSON object",
                content,
                filename,
                content.trim_start(),
            )),
            Err(e) => Err(Error::json(e, content, filename)),
        }
    }

    pub fn from_fields(path: impl Into<PathBuf>, fields: Map<String, Value>) -> Self {
        Self {
            path: path.into(),
            fields,
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }

    pub fn name(&self) -> Option<&str> {
        self.field("name")
    }

    /// A top-level string field such as `main` or `module`.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// A top-level object field such as `scripts` or `devDependencies`.
    pub fn object(&self, key: &str) -> Option<&Map<String, Value>> {
        self.fields.get(key).and_then(Value::as_object)
    }

    /// Names of runtime and peer dependencies, in manifest order.
    pub fn external_names(&self) -> Vec<String> {
        ["dependencies", "peerDependencies"]
            .into_iter()
            .filter_map(|key| self.object(key))
            .flat_map(|deps| deps.keys().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_reads_fields() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(PACKAGE_JSON),
            r#"{
  "name": "my-lib",
  "main": "dist/cjs/index.cjs",
  "dependencies": { "lodash": "^4.0.0" },
  "peerDependencies": { "react": "^19.0.0" }
}"#,
        )
        .unwrap();

        let package = PackageJson::open(temp.path()).unwrap();

        assert_eq!(package.name(), Some("my-lib"));
        assert_eq!(package.field("main"), Some("dist/cjs/index.cjs"));
        assert_eq!(package.field("module"), None);
        assert_eq!(package.external_names(), vec!["lodash", "react"]);
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = PackageJson::open(temp.path()).unwrap_err();

        assert!(matches!(*err, Error::NotFound { ref file, .. } if file == "package.json"));
    }

    #[test]
    fn test_parse_error_has_span() {
        let err = PackageJson::parse_with_filename("{\n  \"name\": \n}", "package.json").unwrap_err();

        match *err {
            Error::Json { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_non_object() {
        let err = PackageJson::parse_with_filename("[1, 2]", "package.json").unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_field_order_is_preserved() {
        let fields = PackageJson::parse_with_filename(
            r#"{"version": "1.0.0", "name": "z", "author": "a"}"#,
            "package.json",
        )
        .unwrap();

        let keys: Vec<_> = fields.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["version", "name", "author"]);
    }
}
