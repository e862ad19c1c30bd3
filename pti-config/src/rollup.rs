use indexmap::IndexMap;
use pti_core::{join_path, to_camel_case};
use pti_manifest::{Error as ManifestError, PackageJson};
use serde::Serialize;

use crate::{format::ModuleFormat, project::Project};

/// Rollup options for one output format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RollupConfig {
    #[serde(skip)]
    pub format: ModuleFormat,
    pub input: String,
    /// Dependency and peer-dependency names
    pub external: Vec<String>,
    pub output: RollupOutput,
    /// tsconfig handed to the TypeScript plugin
    #[serde(skip)]
    pub tsconfig: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RollupOutput {
    pub exports: &'static str,
    pub file: String,
    pub format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub globals: Option<IndexMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub sourcemap: bool,
}

/// One config per format the project builds.
///
/// Every format needs its bundle path in package.json (`module`, `main`,
/// and `browser` for UMD).
pub fn create_rollup_configs(
    package: &PackageJson,
    project: &Project,
) -> pti_manifest::Result<Vec<RollupConfig>> {
    let external = package.external_names();

    project
        .formats()
        .into_iter()
        .map(|format| -> pti_manifest::Result<RollupConfig> {
            let field = format.package_field();
            let file = package
                .field(field)
                .ok_or_else(|| ManifestError::missing_entry(format.name(), field))?;

            let globals = (format == ModuleFormat::Umd).then(|| {
                external
                    .iter()
                    .map(|name| (name.clone(), to_camel_case(name)))
                    .collect()
            });

            let tsconfig = format!("{}.json", format.name());

            Ok(RollupConfig {
                format,
                input: join_path(&[project.source.as_str(), "index.ts"]),
                external: external.clone(),
                output: RollupOutput {
                    exports: "named",
                    file: file.to_string(),
                    format: format.name(),
                    globals,
                    name: package.name().map(str::to_string),
                    sourcemap: project.source_map,
                },
                tsconfig: join_path(&[project.config.as_str(), "types", tsconfig.as_str()]),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn package(fields: serde_json::Value) -> PackageJson {
        PackageJson::from_fields("package.json", fields.as_object().unwrap().clone())
    }

    #[test]
    fn test_configs_per_format() {
        let package = package(json!({
            "name": "my-lib",
            "main": "dist/cjs/index.cjs",
            "module": "dist/es/index.mjs",
            "dependencies": { "lodash": "^4.0.0" },
            "peerDependencies": { "react-dom": "^19.0.0" },
        }));

        let configs = create_rollup_configs(&package, &Project::default()).unwrap();

        assert_eq!(configs.len(), 2);
        assert_eq!(configs[0].format, ModuleFormat::Es);
        assert_eq!(configs[0].output.file, "dist/es/index.mjs");
        assert_eq!(configs[0].tsconfig, "config/types/es.json");
        assert_eq!(configs[1].output.file, "dist/cjs/index.cjs");
        assert_eq!(configs[1].external, vec!["lodash", "react-dom"]);
        assert!(configs[1].output.globals.is_none());

        assert_eq!(
            serde_json::to_value(&configs[0]).unwrap(),
            json!({
                "input": "src/index.ts",
                "external": ["lodash", "react-dom"],
                "output": {
                    "exports": "named",
                    "file": "dist/es/index.mjs",
                    "format": "es",
                    "name": "my-lib",
                    "sourcemap": false,
                },
            })
        );
    }

    #[test]
    fn test_umd_globals_are_camel_case() {
        let package = package(json!({
            "main": "dist/cjs/index.cjs",
            "module": "dist/es/index.mjs",
            "browser": "dist/umd/index.js",
            "dependencies": { "@scope/pkg-name": "^1.0.0" },
        }));
        let project = Project {
            umd: true,
            ..Default::default()
        };

        let configs = create_rollup_configs(&package, &project).unwrap();
        let umd = &configs[2];

        assert_eq!(umd.output.format, "umd");
        assert_eq!(
            umd.output.globals.as_ref().unwrap().get("@scope/pkg-name").map(String::as_str),
            Some("scopePkgName")
        );
    }

    #[test]
    fn test_missing_entry_names_format_and_field() {
        let package = package(json!({ "module": "dist/es/index.mjs" }));

        let err = create_rollup_configs(&package, &Project::default()).unwrap_err();

        match *err {
            ManifestError::MissingEntry { ref format, ref field } => {
                assert_eq!(format, "cjs");
                assert_eq!(field, "main");
            }
            ref other => panic!("unexpected error: {other:?}"),
        }
    }
}
