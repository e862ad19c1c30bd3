use pti_core::join_path;

use super::{BASE_CONFIG, TsConfig, TsConfigOverrides};

/// The two variants derived for one compiler config.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedConfigs {
    /// Emits JavaScript
    pub runtime: TsConfig,
    /// Emits only type declarations
    pub declaration: TsConfig,
}

/// Merge `overrides` onto [`BASE_CONFIG`].
pub fn create_standard_config(overrides: TsConfigOverrides) -> TsConfig {
    BASE_CONFIG.clone().apply(overrides)
}

/// Merge `overrides` onto [`BASE_CONFIG`] and turn the result into a
/// declaration-only config.
pub fn create_declaration_config(name: &str, overrides: TsConfigOverrides) -> TsConfig {
    into_declaration(create_standard_config(overrides), name)
}

/// Derive both variants from a single merge.
pub fn create_configs(name: &str, overrides: TsConfigOverrides) -> DerivedConfigs {
    let runtime = create_standard_config(overrides);
    let declaration = into_declaration(runtime.clone(), name);

    DerivedConfigs {
        runtime,
        declaration,
    }
}

/// Force `declaration` and `emitDeclarationOnly` on and replace `outDir`
/// with `declarationDir`.
///
/// An explicit `declarationDir` is kept. Otherwise it becomes
/// `<outDir>/<name>/types`, or stays unset when there was no `outDir`.
pub fn into_declaration(mut config: TsConfig, name: &str) -> TsConfig {
    let options = &mut config.compiler_options;
    let out_dir = options.out_dir.take();

    options.declaration = Some(true);
    options.emit_declaration_only = Some(true);
    if options.declaration_dir.is_none() {
        options.declaration_dir = out_dir.map(|out| join_path(&[out.as_str(), name, "types"]));
    }

    config
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::{Value, json};

    use super::*;
    use crate::{
        merge::Patch,
        normalize::{ModuleKind, ModuleResolutionKind, ScriptTarget},
        tsconfig::CompilerOptions,
    };

    fn options(options: CompilerOptions) -> TsConfigOverrides {
        TsConfigOverrides::compiler_options(options)
    }

    #[test]
    fn test_module_override_reaches_both_variants() {
        let configs = create_configs(
            "es",
            options(CompilerOptions {
                module: Some(ModuleKind::EsNext),
                ..Default::default()
            }),
        );

        let runtime = serde_json::to_value(&configs.runtime).unwrap();
        let declaration = serde_json::to_value(&configs.declaration).unwrap();

        assert_eq!(runtime["compilerOptions"]["module"], json!("ESNext"));
        assert_eq!(declaration["compilerOptions"]["module"], json!("ESNext"));
        assert_eq!(declaration["compilerOptions"]["declaration"], json!(true));
        assert_eq!(declaration["compilerOptions"]["emitDeclarationOnly"], json!(true));
    }

    #[test]
    fn test_standard_keeps_base_keys() {
        let config = create_standard_config(TsConfigOverrides::default());
        assert_eq!(config, *BASE_CONFIG);
    }

    #[test]
    fn test_declaration_dir_from_out_dir() {
        let config = create_declaration_config(
            "cjs",
            options(CompilerOptions {
                out_dir: Some("../../dist".to_string()),
                ..Default::default()
            }),
        );

        let compiler = &config.compiler_options;
        assert_eq!(compiler.out_dir, None);
        assert_eq!(compiler.declaration_dir.as_deref(), Some("../../dist/cjs/types"));
    }

    #[test]
    fn test_declaration_dir_explicit_wins() {
        let config = create_declaration_config(
            "es",
            options(CompilerOptions {
                out_dir: Some("dist/es".to_string()),
                declaration_dir: Some("types".to_string()),
                ..Default::default()
            }),
        );

        assert_eq!(config.compiler_options.declaration_dir.as_deref(), Some("types"));
        assert_eq!(config.compiler_options.out_dir, None);
    }

    #[test]
    fn test_declaration_dir_absent_without_out_dir() {
        let config = create_declaration_config("es", TsConfigOverrides::default());
        let value = serde_json::to_value(&config).unwrap();

        assert!(value["compilerOptions"].get("declarationDir").is_none());
        assert!(value["compilerOptions"].get("outDir").is_none());
    }

    #[test]
    fn test_new_keys_survive() {
        let mut overrides = TsConfigOverrides::default();
        overrides
            .extra
            .insert("watchOptions".to_string(), json!({ "watchFile": "useFsEvents" }));
        overrides
            .compiler_options
            .extra
            .insert("noEmit".to_string(), json!(true));

        let value = serde_json::to_value(create_standard_config(overrides)).unwrap();

        assert_eq!(value["watchOptions"], json!({ "watchFile": "useFsEvents" }));
        assert_eq!(value["compilerOptions"]["noEmit"], json!(true));
    }

    #[test]
    fn test_deterministic_output() {
        let make = || {
            serde_json::to_string(&create_configs(
                "es",
                options(CompilerOptions {
                    out_dir: Some("dist".to_string()),
                    ..Default::default()
                }),
            )
            .declaration)
            .unwrap()
        };

        assert_eq!(make(), make());
    }

    fn overrides_strategy() -> impl Strategy<Value = TsConfigOverrides> {
        (
            proptest::option::of(proptest::sample::select(ModuleKind::ALL)),
            proptest::option::of(proptest::sample::select(ModuleResolutionKind::ALL)),
            proptest::option::of(proptest::sample::select(ScriptTarget::ALL)),
            proptest::option::of("[a-z]{1,8}(/[a-z]{1,8}){0,2}"),
            proptest::option::of(any::<bool>()),
            prop_oneof![
                Just(Patch::Inherit),
                Just(Patch::Clear),
                proptest::collection::vec("[a-z*/]{1,12}", 0..3).prop_map(Patch::Set),
            ],
        )
            .prop_map(|(module, resolution, target, out_dir, strict, exclude)| {
                TsConfigOverrides {
                    compiler_options: CompilerOptions {
                        module,
                        module_resolution: resolution,
                        target,
                        out_dir,
                        strict,
                        ..Default::default()
                    },
                    exclude,
                    ..Default::default()
                }
            })
    }

    fn has_numeric_enum(value: &Value) -> bool {
        ["module", "moduleResolution", "moduleDetection", "target"]
            .iter()
            .any(|key| value["compilerOptions"].get(*key).is_some_and(Value::is_number))
    }

    proptest! {
        #[test]
        fn prop_merge_is_idempotent(overrides in overrides_strategy()) {
            let merged = create_standard_config(overrides);
            let remerged = merged.clone().apply(TsConfigOverrides::default());
            prop_assert_eq!(merged, remerged);
        }

        #[test]
        fn prop_declaration_invariants(overrides in overrides_strategy()) {
            let configs = create_configs("es", overrides);
            let options = &configs.declaration.compiler_options;

            prop_assert_eq!(options.declaration, Some(true));
            prop_assert_eq!(options.emit_declaration_only, Some(true));
            prop_assert!(options.out_dir.is_none());
            prop_assert_eq!(
                options.declaration_dir.is_some(),
                configs.runtime.compiler_options.out_dir.is_some()
            );
        }

        #[test]
        fn prop_overrides_win(overrides in overrides_strategy()) {
            let wanted = overrides.compiler_options.module;
            let config = create_standard_config(overrides);
            if let Some(module) = wanted {
                prop_assert_eq!(config.compiler_options.module, Some(module));
            } else {
                prop_assert_eq!(config.compiler_options.module, BASE_CONFIG.compiler_options.module);
            }
        }

        #[test]
        fn prop_serialized_has_no_enum_codes(overrides in overrides_strategy()) {
            let configs = create_configs("cjs", overrides);
            prop_assert!(!has_numeric_enum(&serde_json::to_value(&configs.runtime).unwrap()));
            prop_assert!(!has_numeric_enum(&serde_json::to_value(&configs.declaration).unwrap()));
        }
    }
}
