use eyre::Result;
use pti_config::Project;

use super::{
    Workspace, eslint, git, package_json, prettier, release_it, rollup, source_missing, vite,
    vitest, write_tsconfigs, yarn,
};
use crate::reports::InitReport;

/// Run every generator.
///
/// Template files come first, then package.json (Rollup reads the entry
/// fields it writes), then every config generator at once. Whether the
/// source folder needs a placeholder is decided before the concurrent
/// phase, which creates files below it.
pub async fn init(ws: &Workspace, project: &Project, skip_install: bool) -> Result<InitReport> {
    let (git, prettier, yarn) = tokio::try_join!(git(ws, project), prettier(ws), yarn(ws))?;

    let package = package_json(ws, project, skip_install).await?;

    let create_source = source_missing(ws, project).await;
    let (tsconfig, eslint, vite, vitest, rollup, release_it) = tokio::try_join!(
        write_tsconfigs(ws, project, create_source),
        eslint(ws, project),
        vite(ws, project),
        vitest(ws, project),
        rollup(ws, project),
        release_it(ws, project),
    )?;

    Ok(InitReport {
        steps: vec![
            git, prettier, yarn, package, tsconfig, eslint, vite, vitest, rollup, release_it,
        ],
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::json;
    use tempfile::TempDir;

    use super::*;
    use crate::ops::testing::{read_json, workspace};

    #[tokio::test]
    async fn test_init_generates_everything() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            json!({ "name": "my-lib", "version": "0.0.0" }).to_string(),
        )
        .unwrap();
        let ws = workspace(temp.path());

        let report = init(&ws, &Project::default(), true).await.unwrap();

        let steps: Vec<&str> = report.steps.iter().map(|s| s.step).collect();
        assert_eq!(
            steps,
            vec![
                "git",
                "prettier",
                "yarn",
                "package.json",
                "tsconfig",
                "eslint",
                "vite",
                "vitest",
                "rollup",
                "release-it",
            ]
        );
        for path in [
            ".gitignore",
            "LICENSE",
            "tsconfig.json",
            "src/index.ts",
            "config/types/es.declaration.json",
            "config/rollup/cjs.config.js",
            "config/vite.config.ts",
            "dev/index.html",
            "config/release-it/beta.json",
        ] {
            assert!(temp.path().join(path).is_file(), "missing {path}");
        }
        assert_eq!(
            read_json(temp.path(), "package.json")["module"],
            json!("dist/es/index.mjs")
        );
    }

    #[tokio::test]
    async fn test_init_with_react() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            json!({ "name": "my-lib", "version": "0.0.0" }).to_string(),
        )
        .unwrap();
        let ws = workspace(temp.path());
        let project = Project {
            react: true,
            ..Default::default()
        };

        init(&ws, &project, true).await.unwrap();

        let root = read_json(temp.path(), "tsconfig.json");
        assert_eq!(
            root["include"],
            json!([
                "config/**/*.ts",
                "config/**/*.tsx",
                "dev/**/*.ts",
                "dev/**/*.tsx",
                "src/**/*.ts",
                "src/**/*.tsx",
                "__tests__/**/*.ts",
                "__tests__/**/*.tsx",
            ])
        );
        assert_eq!(root["compilerOptions"]["jsx"], json!("react-jsx"));
        assert!(temp.path().join("dev/index.tsx").is_file());
        assert!(temp.path().join("dev/App.tsx").is_file());
        assert!(!temp.path().join("dev/index.ts").exists());
    }

    #[tokio::test]
    async fn test_init_stops_without_package_json() {
        let temp = TempDir::new().unwrap();
        let ws = workspace(temp.path());

        assert!(init(&ws, &Project::default(), true).await.is_err());
        assert!(temp.path().join(".gitignore").is_file());
        assert!(!temp.path().join("tsconfig.json").exists());
    }
}
