//! tsconfig option sets and the runtime/declaration derivation.

mod base;
mod compiler_options;
mod derive;
mod project;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::merge::{Merge, Patch, merge_extra};

pub use base::{BASE_CONFIG, BASE_TYPES};
pub use compiler_options::CompilerOptions;
pub use derive::{
    DerivedConfigs, create_configs, create_declaration_config, create_standard_config,
    into_declaration,
};
pub use project::{format_overrides, include_globs, root_overrides};

/// A complete tsconfig.json document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    #[serde(default)]
    pub compiler_options: CompilerOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Caller overrides for a [`TsConfig`].
///
/// Top-level keys can be replaced or removed; `compilerOptions` is merged
/// one level deeper.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsConfigOverrides {
    #[serde(default)]
    pub extends: Patch<String>,
    #[serde(default)]
    pub compiler_options: CompilerOptions,
    #[serde(default)]
    pub exclude: Patch<Vec<String>>,
    #[serde(default)]
    pub include: Patch<Vec<String>>,
    #[serde(default)]
    pub files: Patch<Vec<String>>,
    #[serde(default)]
    pub references: Patch<Vec<String>>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl TsConfigOverrides {
    /// Overrides touching only `compilerOptions`.
    pub fn compiler_options(options: CompilerOptions) -> Self {
        Self {
            compiler_options: options,
            ..Default::default()
        }
    }
}

impl Merge for TsConfigOverrides {
    fn merge(self, overrides: Self) -> Self {
        Self {
            extends: self.extends.merge(overrides.extends),
            compiler_options: self.compiler_options.merge(overrides.compiler_options),
            exclude: self.exclude.merge(overrides.exclude),
            include: self.include.merge(overrides.include),
            files: self.files.merge(overrides.files),
            references: self.references.merge(overrides.references),
            extra: merge_extra(self.extra, overrides.extra),
        }
    }
}

impl TsConfig {
    /// Apply overrides on top of this config.
    pub fn apply(self, overrides: TsConfigOverrides) -> Self {
        Self {
            extends: overrides.extends.apply(self.extends),
            compiler_options: self.compiler_options.merge(overrides.compiler_options),
            exclude: overrides.exclude.apply(self.exclude),
            include: overrides.include.apply(self.include),
            files: overrides.files.apply(self.files),
            references: overrides.references.apply(self.references),
            extra: merge_extra(self.extra, overrides.extra),
        }
    }
}

impl From<TsConfig> for TsConfigOverrides {
    fn from(config: TsConfig) -> Self {
        fn patch<T>(value: Option<T>) -> Patch<T> {
            value.map_or(Patch::Inherit, Patch::Set)
        }

        Self {
            extends: patch(config.extends),
            compiler_options: config.compiler_options,
            exclude: patch(config.exclude),
            include: patch(config.include),
            files: patch(config.files),
            references: patch(config.references),
            extra: config.extra,
        }
    }
}
