//! ESLint flat-config data.
//!
//! The plugin presets themselves are imported by the emitted module; this
//! holds everything that varies per project.

use std::sync::LazyLock;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::{
    merge::{Merge, merge_extra},
    project::Project,
};

/// Rules applied on top of the recommended presets.
pub static BASE_RULES: LazyLock<IndexMap<String, Value>> = LazyLock::new(|| {
    [
        ("import/consistent-type-specifier-style", json!(["error", "prefer-top-level"])),
        ("import/enforce-node-protocol-usage", json!(["error", "always"])),
        ("import/export", json!("error")),
        ("import/first", json!("error")),
        ("import/newline-after-import", json!("error")),
        ("import/no-absolute-path", json!("error")),
        ("import/no-commonjs", json!("error")),
        ("import/no-cycle", json!("error")),
        ("import/no-default-export", json!("error")),
        ("import/no-empty-named-blocks", json!("error")),
        ("import/no-self-import", json!("error")),
        (
            "import/order",
            json!([
                "error",
                {
                    "alphabetize": { "order": "asc", "orderImportKind": "asc" },
                    "newlines-between": "never"
                }
            ]),
        ),
        ("@typescript-eslint/array-type", json!(["error", { "default": "array-simple" }])),
        (
            "@typescript-eslint/no-unused-vars",
            json!(["error", { "argsIgnorePattern": "^_", "varsIgnorePattern": "^_" }]),
        ),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value))
    .collect()
});

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EslintConfig {
    /// Global ignore patterns
    pub ignores: Vec<String>,
    /// Whether the React presets are included
    pub react: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
    pub rules: IndexMap<String, Value>,
    /// Caller configs appended after everything else
    pub configs: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EslintOverrides {
    #[serde(default)]
    pub rules: IndexMap<String, Value>,
    #[serde(default)]
    pub configs: Vec<Value>,
}

impl Merge for EslintOverrides {
    fn merge(self, overrides: Self) -> Self {
        let mut configs = self.configs;
        configs.extend(overrides.configs);
        Self {
            rules: merge_extra(self.rules, overrides.rules),
            configs,
        }
    }
}

/// Ignore everything outside the source, development and config folders.
pub fn ignores(project: &Project) -> Vec<String> {
    let linted = [
        project.source.as_str(),
        project.development.as_str(),
        project.config.as_str(),
    ];
    let group = linted.join("|");

    let mut ignores = vec![format!("**/!({group})/**/*"), format!("**/!({group})")];
    ignores.extend(linted.iter().map(|folder| format!("!{folder}/**/*")));
    ignores
}

pub fn create_eslint_config(project: &Project, overrides: EslintOverrides) -> EslintConfig {
    EslintConfig {
        ignores: ignores(project),
        react: project.react,
        settings: project
            .react
            .then(|| json!({ "react": { "version": "detect" } })),
        rules: merge_extra(BASE_RULES.clone(), overrides.rules),
        configs: overrides.configs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignores_keep_linted_folders() {
        let ignores = ignores(&Project::default());
        assert_eq!(
            ignores,
            vec![
                "**/!(src|dev|config)/**/*",
                "**/!(src|dev|config)",
                "!src/**/*",
                "!dev/**/*",
                "!config/**/*",
            ]
        );
    }

    #[test]
    fn test_rule_overrides_are_right_biased() {
        let overrides = EslintOverrides {
            rules: [
                ("import/no-cycle".to_string(), json!("off")),
                ("no-console".to_string(), json!("warn")),
            ]
            .into_iter()
            .collect(),
            configs: vec![json!({ "files": ["**/*.js"] })],
        };

        let config = create_eslint_config(&Project::default(), overrides);

        assert_eq!(config.rules["import/no-cycle"], json!("off"));
        assert_eq!(config.rules["no-console"], json!("warn"));
        assert_eq!(config.rules["import/first"], json!("error"));
        assert_eq!(config.configs.len(), 1);
        assert!(config.settings.is_none());
    }

    #[test]
    fn test_react_adds_settings() {
        let project = Project {
            react: true,
            ..Default::default()
        };

        let config = create_eslint_config(&project, EslintOverrides::default());

        assert!(config.react);
        assert_eq!(config.settings, Some(json!({ "react": { "version": "detect" } })));
    }

    #[test]
    fn test_base_rules_untouched_by_merge() {
        let overrides = EslintOverrides {
            rules: [("import/first".to_string(), json!("off"))].into_iter().collect(),
            ..Default::default()
        };
        let _ = create_eslint_config(&Project::default(), overrides);

        assert_eq!(BASE_RULES["import/first"], json!("error"));
    }
}
