use pti_core::join_path;

use crate::{
    format::ModuleFormat,
    merge::Patch,
    project::{Project, TEST_FOLDER},
};

use super::{BASE_CONFIG, BASE_TYPES, CompilerOptions, TsConfigOverrides};

/// Source globs for each folder, resolved against `prefix`.
pub fn include_globs(project: &Project, prefix: &str, folders: &[&str]) -> Vec<String> {
    folders
        .iter()
        .flat_map(|folder| project.source_globs(&join_path(&[prefix, folder])))
        .collect()
}

fn types(project: &Project) -> Vec<String> {
    let mut types: Vec<String> = BASE_TYPES.iter().map(|t| t.to_string()).collect();
    if project.react {
        types.push("react".to_string());
    }
    types
}

fn jsx(project: &Project) -> Option<String> {
    project.react.then(|| "react-jsx".to_string())
}

/// Overrides for the repository's own `tsconfig.json`, used by editors and
/// `tsc --noEmit`.
pub fn root_overrides(project: &Project) -> TsConfigOverrides {
    let folders = [
        project.config.as_str(),
        project.development.as_str(),
        project.source.as_str(),
        TEST_FOLDER,
    ];

    TsConfigOverrides {
        compiler_options: CompilerOptions {
            base_url: Some(project.source.clone()),
            declaration: Some(false),
            jsx: jsx(project),
            out_dir: Some(project.library.clone()),
            root_dir: Some("./".to_string()),
            source_map: Some(true),
            types: Some(types(project)),
            ..Default::default()
        },
        exclude: Patch::Set(vec![
            "**/node_modules/**".to_string(),
            join_path(&[project.library.as_str(), "**", "*"]),
        ]),
        include: Patch::Set(include_globs(project, ".", &folders)),
        ..Default::default()
    }
}

/// Overrides for `<config>/types/<format>.json`, which live two levels below
/// the repository root.
pub fn format_overrides(project: &Project, format: ModuleFormat) -> TsConfigOverrides {
    let prefix = join_path(&["..", ".."]);
    let out_dir = join_path(&[prefix.as_str(), project.library.as_str(), format.name()]);
    let declaration_dir = join_path(&[out_dir.as_str(), "types"]);

    let mut exclude = BASE_CONFIG.exclude.clone().unwrap_or_default();
    exclude.push(format!("**/{TEST_FOLDER}/**"));

    TsConfigOverrides {
        compiler_options: CompilerOptions {
            declaration_dir: Some(declaration_dir),
            jsx: jsx(project),
            module: Some(format.module()),
            module_resolution: Some(format.module_resolution()),
            out_dir: Some(out_dir),
            source_map: Some(project.source_map),
            types: Some(types(project)),
            ..Default::default()
        },
        exclude: Patch::Set(exclude),
        include: Patch::Set(include_globs(project, &prefix, &[project.source.as_str()])),
        ..Default::default()
    }
}
