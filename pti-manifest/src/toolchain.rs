//! The toolchain manifest bundled into pti.
//!
//! Generated projects get their devDependencies pinned to the versions listed
//! here, so every project scaffolded by one pti release agrees on tooling.

use std::str::FromStr;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{Error, Result};

const BUNDLED: &str = include_str!("../assets/toolchain.json");

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toolchain {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub dev_dependencies: IndexMap<String, String>,
}

impl Toolchain {
    /// The manifest compiled into this binary.
    pub fn bundled() -> Result<Self> {
        Self::from_str_with_filename(BUNDLED, "toolchain.json")
    }

    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::json(e, content, filename))
    }

    /// Pinned version of a single devDependency.
    pub fn version_of(&self, name: &str) -> Result<&str> {
        self.dev_dependencies
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| Error::missing_dependency(name))
    }

    /// Pin every requested devDependency, failing on the first one the
    /// toolchain does not list.
    pub fn pin<'a>(
        &self,
        names: impl IntoIterator<Item = &'a str>,
    ) -> Result<IndexMap<String, String>> {
        names
            .into_iter()
            .map(|name| -> Result<(String, String)> {
                Ok((name.to_string(), self.version_of(name)?.to_string()))
            })
            .collect()
    }
}

impl FromStr for Toolchain {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "toolchain.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_parses() {
        let toolchain = Toolchain::bundled().unwrap();
        assert_eq!(toolchain.name, "pti");
        assert!(toolchain.version_of("typescript").is_ok());
        assert!(toolchain.version_of("vitest").is_ok());
    }

    #[test]
    fn test_pin_preserves_request_order() {
        let toolchain: Toolchain = r#"{
            "name": "pti",
            "version": "1.0.0",
            "devDependencies": { "a": "^1.0.0", "b": "^2.0.0" }
        }"#
        .parse()
        .unwrap();

        let pinned = toolchain.pin(["b", "a"]).unwrap();
        let entries: Vec<_> = pinned.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(entries, vec![("b", "^2.0.0"), ("a", "^1.0.0")]);
    }

    #[test]
    fn test_missing_dependency_names_it() {
        let toolchain: Toolchain = r#"{
            "name": "pti",
            "version": "1.0.0",
            "devDependencies": { "typescript": "^5.0.0" }
        }"#
        .parse()
        .unwrap();

        let err = toolchain.pin(["typescript", "vitest"]).unwrap_err();
        assert!(matches!(*err, Error::MissingDependency { ref name } if name == "vitest"));
        assert!(err.to_string().contains("'vitest'"));
    }
}
