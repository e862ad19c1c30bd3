use std::sync::LazyLock;

use crate::normalize::{ModuleDetectionKind, ModuleKind, ModuleResolutionKind, ScriptTarget};

use super::{CompilerOptions, TsConfig};

/// Ambient type packages every generated tsconfig includes.
pub const BASE_TYPES: &[&str] = &["node"];

/// Default tsconfig every generated config is merged onto.
pub static BASE_CONFIG: LazyLock<TsConfig> = LazyLock::new(|| TsConfig {
    compiler_options: CompilerOptions {
        allow_js: Some(true),
        declaration: Some(false),
        emit_declaration_only: Some(false),
        es_module_interop: Some(true),
        isolated_modules: Some(true),
        lib: Some(strings(&["ESNext", "DOM"])),
        module: Some(ModuleKind::NodeNext),
        module_detection: Some(ModuleDetectionKind::Force),
        module_resolution: Some(ModuleResolutionKind::NodeNext),
        no_fallthrough_cases_in_switch: Some(true),
        no_implicit_any: Some(true),
        no_implicit_override: Some(true),
        no_unchecked_indexed_access: Some(true),
        resolve_json_module: Some(true),
        skip_lib_check: Some(true),
        source_map: Some(false),
        strict: Some(true),
        strict_null_checks: Some(true),
        inline_sources: Some(true),
        target: Some(ScriptTarget::Es2015),
        verbatim_module_syntax: Some(true),
        types: Some(strings(BASE_TYPES)),
        ..Default::default()
    },
    exclude: Some(strings(&["**/node_modules/**"])),
    ..Default::default()
});

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
