use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    merge::{Merge, merge_extra},
    normalize::{
        ModuleDetectionKind, ModuleKind, ModuleResolutionKind, ScriptTarget,
        normalize_compiler_options,
    },
};

macro_rules! compiler_options {
    ($($field:ident: $ty:ty),+ $(,)?) => {
        /// `compilerOptions` of a tsconfig.
        ///
        /// Every option is optional. Options without a typed field are kept
        /// in `extra` and written after the typed ones.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct CompilerOptions {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )+
            #[serde(flatten)]
            pub extra: IndexMap<String, Value>,
        }

        impl Merge for CompilerOptions {
            fn merge(self, overrides: Self) -> Self {
                Self {
                    $($field: overrides.$field.or(self.$field),)+
                    extra: merge_extra(self.extra, overrides.extra),
                }
            }
        }
    };
}

compiler_options! {
    allow_js: bool,
    base_url: String,
    declaration: bool,
    declaration_dir: String,
    emit_declaration_only: bool,
    es_module_interop: bool,
    isolated_modules: bool,
    jsx: String,
    lib: Vec<String>,
    module: ModuleKind,
    module_detection: ModuleDetectionKind,
    module_resolution: ModuleResolutionKind,
    no_fallthrough_cases_in_switch: bool,
    no_implicit_any: bool,
    no_implicit_override: bool,
    no_unchecked_indexed_access: bool,
    out_dir: String,
    resolve_json_module: bool,
    root_dir: String,
    skip_lib_check: bool,
    source_map: bool,
    strict: bool,
    strict_null_checks: bool,
    inline_sources: bool,
    target: ScriptTarget,
    verbatim_module_syntax: bool,
    types: Vec<String>,
}

impl CompilerOptions {
    /// Build typed options from a raw JSON object, accepting numeric enum
    /// codes for `module`, `moduleResolution`, `moduleDetection` and
    /// `target`.
    pub fn from_raw(raw: &Map<String, Value>) -> serde_json::Result<Self> {
        serde_json::from_value(Value::Object(normalize_compiler_options(raw)))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_from_raw_accepts_codes() {
        let raw = json!({ "module": 99, "target": 9, "moduleDetection": 3, "noEmit": true });
        let options = CompilerOptions::from_raw(raw.as_object().unwrap()).unwrap();

        assert_eq!(options.module, Some(ModuleKind::EsNext));
        assert_eq!(options.target, Some(ScriptTarget::Es2022));
        assert_eq!(options.module_detection, Some(ModuleDetectionKind::Force));
        assert_eq!(options.extra.get("noEmit"), Some(&json!(true)));
    }

    #[test]
    fn test_from_raw_rejects_unknown_code_for_typed_key() {
        let raw = json!({ "module": 12345 });
        assert!(CompilerOptions::from_raw(raw.as_object().unwrap()).is_err());
    }

    #[test]
    fn test_serialize_skips_unset_and_keeps_extra() {
        let options = CompilerOptions {
            module: Some(ModuleKind::Node16),
            strict: Some(true),
            extra: [("noEmit".to_string(), json!(true))].into_iter().collect(),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({ "module": "Node16", "strict": true, "noEmit": true })
        );
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let base = CompilerOptions {
            module: Some(ModuleKind::NodeNext),
            strict: Some(true),
            ..Default::default()
        };
        let overrides = CompilerOptions {
            module: Some(ModuleKind::EsNext),
            ..Default::default()
        };

        let merged = base.merge(overrides);

        assert_eq!(merged.module, Some(ModuleKind::EsNext));
        assert_eq!(merged.strict, Some(true));
    }
}
