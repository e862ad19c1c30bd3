//! Stitching generated entries into an existing package.json.

use indexmap::IndexMap;
use pti_core::join_path;
use pti_manifest::{PackageJson, Toolchain};
use serde_json::{Map, Value, json};

use crate::{format::ModuleFormat, project::Project};

/// devDependencies every generated project needs.
pub const DEV_DEPENDENCIES: &[&str] = &[
    "@eslint/js",
    "@rollup/plugin-typescript",
    "@types/node",
    "@vitest/coverage-v8",
    "eslint",
    "eslint-plugin-import",
    "prettier",
    "release-it",
    "rollup",
    "tslib",
    "typescript",
    "typescript-eslint",
    "vite",
    "vitest",
];

/// Additional devDependencies for React projects.
pub const REACT_DEV_DEPENDENCIES: &[&str] = &[
    "@types/react",
    "@types/react-dom",
    "eslint-plugin-react",
    "eslint-plugin-react-hooks",
    "react",
    "react-dom",
];

/// Release channels with a release-it config.
pub const RELEASE_CHANNELS: &[&str] = &["alpha", "beta", "rc"];

pub fn dev_dependencies(project: &Project) -> Vec<&'static str> {
    let mut names = DEV_DEPENDENCIES.to_vec();
    if project.react {
        names.extend_from_slice(REACT_DEV_DEPENDENCIES);
    }
    names
}

/// Scripts for building, testing and releasing the project.
///
/// `runner` is the command prefix used to call other scripts, such as
/// `yarn run` or `npm run`.
pub fn scripts(project: &Project, runner: &str) -> IndexMap<String, String> {
    let config = project.config.as_str();
    let library = project.library.as_str();
    let formats = project.formats();

    let mut scripts = IndexMap::new();
    let mut build = vec![format!("{runner} clean")];

    for format in &formats {
        let name = format.name();
        build.push(format!("{runner} build:{name}"));
        build.push(format!("{runner} build:{name}:types"));

        scripts.insert(
            format!("build:{name}"),
            format!("NODE_ENV=production rollup -c {config}/rollup/{name}.config.js"),
        );

        let mut types = format!("tsc -p {config}/types/{name}.declaration.json");
        if *format != ModuleFormat::Umd {
            types.push_str(&format!(" && pti fix-types -t {name} -l {library}"));
        }
        scripts.insert(format!("build:{name}:types"), types);
        scripts.insert(
            format!("clean:{name}"),
            format!("rm -rf {}", join_path(&[library, name])),
        );
    }

    scripts.insert("build".to_string(), build.join(" && "));
    scripts.insert("clean".to_string(), format!("rm -rf {library}"));
    scripts.insert("dev".to_string(), format!("vite --config={config}/vite.config.ts"));
    scripts.insert("format".to_string(), "prettier . --log-level=warn --write".to_string());
    scripts.insert("lint".to_string(), "eslint --max-warnings=0".to_string());
    scripts.insert("lint:fix".to_string(), format!("{runner} lint --fix"));
    scripts.insert(
        "release".to_string(),
        format!("release-it --config={config}/release-it/stable.json"),
    );
    for channel in RELEASE_CHANNELS {
        scripts.insert(
            format!("release:{channel}"),
            format!("release-it --config={config}/release-it/{channel}.json"),
        );
    }
    scripts.insert(
        "test".to_string(),
        format!("vitest run --config={config}/vitest.config.ts"),
    );
    scripts.insert("test:coverage".to_string(), format!("{runner} test --coverage"));
    scripts.insert(
        "test:watch".to_string(),
        format!("vitest --config={config}/vitest.config.ts"),
    );
    scripts.insert("typecheck".to_string(), "tsc --noEmit".to_string());

    scripts
}

/// The `exports` map with one condition per built format.
pub fn exports(project: &Project) -> Value {
    let mut conditions = Map::new();

    for format in project.formats() {
        let condition = match format {
            ModuleFormat::Es => "import",
            ModuleFormat::Cjs => "require",
            ModuleFormat::Umd => "default",
        };
        let declaration = match format.declaration_extension() {
            Ok(ext) => format!("index.d.{ext}"),
            Err(_) => "index.d.ts".to_string(),
        };

        conditions.insert(
            condition.to_string(),
            json!({
                "types": format!("./{}", join_path(&[project.types_dir(format), declaration])),
                "default": format!("./{}", project.entry(format)),
            }),
        );
    }

    json!({ ".": conditions })
}

/// Merge generated fields into `package`, keeping everything else.
///
/// Top-level keys, `scripts` and `devDependencies` come out sorted.
pub fn stitch_package_json(
    package: &PackageJson,
    project: &Project,
    toolchain: &Toolchain,
    runner: &str,
) -> pti_manifest::Result<Map<String, Value>> {
    let pinned = toolchain.pin(dev_dependencies(project))?;
    let mut fields = package.fields().clone();

    for format in project.formats() {
        fields.insert(
            format.package_field().to_string(),
            Value::String(project.entry(format)),
        );
    }

    let declaration = join_path(&[project.types_dir(ModuleFormat::Es), "index.d.mts".to_string()]);
    fields.insert("types".to_string(), Value::String(declaration));
    fields.insert("type".to_string(), Value::String("module".to_string()));
    fields.insert("exports".to_string(), exports(project));

    let mut scripts = package.object("scripts").cloned().unwrap_or_default();
    scripts.extend(
        self::scripts(project, runner)
            .into_iter()
            .map(|(name, command)| (name, Value::String(command))),
    );
    fields.insert("scripts".to_string(), Value::Object(sort_keys(scripts)));

    let mut dev_dependencies = package.object("devDependencies").cloned().unwrap_or_default();
    dev_dependencies.extend(
        pinned
            .into_iter()
            .map(|(name, version)| (name, Value::String(version))),
    );
    fields.insert(
        "devDependencies".to_string(),
        Value::Object(sort_keys(dev_dependencies)),
    );

    Ok(sort_keys(fields))
}

fn sort_keys(map: Map<String, Value>) -> Map<String, Value> {
    let mut entries: Vec<(String, Value)> = map.into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    entries.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use pti_manifest::Error as ManifestError;

    use super::*;

    fn package(fields: Value) -> PackageJson {
        PackageJson::from_fields("package.json", fields.as_object().cloned().unwrap())
    }

    fn keys(value: &Map<String, Value>) -> Vec<&str> {
        value.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_stitch_sets_entries_and_sorts() {
        let package = package(json!({
            "version": "1.0.0",
            "name": "my-lib",
            "scripts": { "start": "node .", "lint": "eslint ." },
            "devDependencies": { "zod": "^3.0.0" },
        }));
        let toolchain = Toolchain::bundled().unwrap();

        let fields =
            stitch_package_json(&package, &Project::default(), &toolchain, "yarn run").unwrap();

        let mut sorted = keys(&fields);
        sorted.sort();
        assert_eq!(keys(&fields), sorted);

        assert_eq!(fields["main"], json!("dist/cjs/index.cjs"));
        assert_eq!(fields["module"], json!("dist/es/index.mjs"));
        assert!(fields.get("browser").is_none());
        assert_eq!(fields["type"], json!("module"));
        assert_eq!(fields["types"], json!("dist/es/types/index.d.mts"));

        let scripts = fields["scripts"].as_object().unwrap();
        let mut sorted = keys(scripts);
        sorted.sort();
        assert_eq!(keys(scripts), sorted);
        assert_eq!(scripts["start"], json!("node ."));
        assert_eq!(scripts["lint"], json!("eslint --max-warnings=0"));
        assert_eq!(
            scripts["build"],
            json!(
                "yarn run clean && yarn run build:es && yarn run build:es:types && yarn run build:cjs && yarn run build:cjs:types"
            )
        );
        assert_eq!(
            scripts["build:cjs:types"],
            json!("tsc -p config/types/cjs.declaration.json && pti fix-types -t cjs -l dist")
        );

        let dev = fields["devDependencies"].as_object().unwrap();
        assert_eq!(dev["zod"], json!("^3.0.0"));
        assert!(dev.contains_key("typescript"));
        assert!(!dev.contains_key("react"));
        assert_eq!(keys(dev).first(), Some(&"@eslint/js"));
    }

    #[test]
    fn test_umd_adds_browser_and_default_export() {
        let project = Project {
            umd: true,
            ..Default::default()
        };
        let toolchain = Toolchain::bundled().unwrap();

        let fields = stitch_package_json(&package(json!({})), &project, &toolchain, "yarn run").unwrap();

        assert_eq!(fields["browser"], json!("dist/umd/index.js"));
        assert_eq!(
            fields["exports"]["."]["default"],
            json!({ "types": "./dist/umd/types/index.d.ts", "default": "./dist/umd/index.js" })
        );
        assert_eq!(
            fields["scripts"]["build:umd:types"],
            json!("tsc -p config/types/umd.declaration.json")
        );
    }

    #[test]
    fn test_exports_conditions() {
        assert_eq!(
            exports(&Project::default()),
            json!({
                ".": {
                    "import": { "types": "./dist/es/types/index.d.mts", "default": "./dist/es/index.mjs" },
                    "require": { "types": "./dist/cjs/types/index.d.cts", "default": "./dist/cjs/index.cjs" },
                }
            })
        );
    }

    #[test]
    fn test_missing_toolchain_entry_is_error() {
        let toolchain: Toolchain = r#"{
            "name": "pti",
            "version": "0.0.0",
            "devDependencies": { "typescript": "^5.0.0" }
        }"#
        .parse()
        .unwrap();

        let err = stitch_package_json(&package(json!({})), &Project::default(), &toolchain, "yarn run")
            .unwrap_err();

        assert!(matches!(*err, ManifestError::MissingDependency { .. }));
    }

    #[test]
    fn test_react_pins_react_packages() {
        let project = Project {
            react: true,
            ..Default::default()
        };
        let toolchain = Toolchain::bundled().unwrap();

        let fields = stitch_package_json(&package(json!({})), &project, &toolchain, "npm run").unwrap();

        let dev = fields["devDependencies"].as_object().unwrap();
        assert!(dev.contains_key("react"));
        assert!(dev.contains_key("eslint-plugin-react-hooks"));
        assert_eq!(fields["scripts"]["lint:fix"], json!("npm run lint --fix"));
    }
}
