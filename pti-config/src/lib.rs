//! Option sets for the JavaScript tooling pti configures, and the merge
//! rules that turn built-in defaults plus caller overrides into the configs
//! written to disk.

pub mod eslint;
pub mod format;
pub mod merge;
pub mod normalize;
pub mod package_json;
pub mod project;
pub mod rollup;
pub mod tsconfig;
pub mod vite;
pub mod vitest;

pub use format::ModuleFormat;
pub use merge::{Merge, Patch};
pub use normalize::{
    ModuleDetectionKind, ModuleKind, ModuleResolutionKind, ScriptTarget,
    normalize_compiler_options,
};
pub use project::{Project, TEST_FOLDER};
pub use tsconfig::{
    BASE_CONFIG, CompilerOptions, DerivedConfigs, TsConfig, TsConfigOverrides, create_configs,
    create_declaration_config, create_standard_config,
};
