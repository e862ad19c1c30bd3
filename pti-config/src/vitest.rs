use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    merge::{Merge, merge_extra},
    project::{Project, TEST_FOLDER},
};

/// Folder for shared test helpers, never collected as tests.
pub const HELPERS_FOLDER: &str = "__helpers__";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VitestConfig {
    #[serde(default)]
    pub test: TestOptions,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
    #[serde(default)]
    pub coverage: CoverageOptions,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Merge for CoverageOptions {
    fn merge(self, overrides: Self) -> Self {
        Self {
            exclude: overrides.exclude.or(self.exclude),
            include: overrides.include.or(self.include),
            provider: overrides.provider.or(self.provider),
            extra: merge_extra(self.extra, overrides.extra),
        }
    }
}

impl Merge for TestOptions {
    fn merge(self, overrides: Self) -> Self {
        Self {
            exclude: overrides.exclude.or(self.exclude),
            include: overrides.include.or(self.include),
            coverage: self.coverage.merge(overrides.coverage),
            extra: merge_extra(self.extra, overrides.extra),
        }
    }
}

impl Merge for VitestConfig {
    fn merge(self, overrides: Self) -> Self {
        Self {
            test: self.test.merge(overrides.test),
            extra: merge_extra(self.extra, overrides.extra),
        }
    }
}

pub fn create_vitest_config(project: &Project, overrides: VitestConfig) -> VitestConfig {
    let tests = project
        .extensions()
        .iter()
        .map(|ext| format!("**/{TEST_FOLDER}/**/*.test.{ext}"))
        .collect();

    let base = VitestConfig {
        test: TestOptions {
            exclude: Some(vec![
                format!("**/{HELPERS_FOLDER}/**"),
                "**/node_modules/**".to_string(),
            ]),
            include: Some(tests),
            coverage: CoverageOptions {
                exclude: Some(vec![format!("**/{HELPERS_FOLDER}/**")]),
                include: Some(project.source_globs(&project.source)),
                provider: Some("v8".to_string()),
                ..Default::default()
            },
            ..Default::default()
        },
        ..Default::default()
    };

    base.merge(overrides)
}
