use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pti(root: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pti"));
    cmd.current_dir(root)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

/// A git repository with formatting and installs turned off.
fn repo() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join(".git")).unwrap();
    fs::write(
        temp.path().join("pti.toml"),
        "[formatter]\nenabled = false\n\n[package-manager]\ninstall = false\n",
    )
    .unwrap();
    temp
}

#[test]
fn help_lists_commands() {
    let temp = TempDir::new().unwrap();

    pti(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("fix-types"))
        .stdout(predicate::str::contains("package-json"))
        .stdout(predicate::str::contains("release-it"));
}

#[test]
fn completions_do_not_need_a_repository() {
    let temp = TempDir::new().unwrap();

    pti(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pti"));
}

#[test]
fn fails_outside_a_repository() {
    let temp = TempDir::new().unwrap();

    pti(temp.path())
        .arg("tsconfig")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no repository root found"));
}

#[test]
fn tsconfig_writes_into_the_root() {
    let temp = repo();
    let nested = temp.path().join("packages").join("a");
    fs::create_dir_all(&nested).unwrap();

    pti(&nested)
        .args(["tsconfig", "--umd", "--source-map=false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config/types/umd.declaration.json"));

    assert!(temp.path().join("tsconfig.json").is_file());
    assert!(temp.path().join("src/index.ts").is_file());
    assert!(!nested.join("tsconfig.json").exists());
}

#[test]
fn root_flag_overrides_discovery() {
    let temp = repo();
    let other = TempDir::new().unwrap();

    pti(other.path())
        .args(["--root", temp.path().to_str().unwrap(), "vitest", "-s", "lib"])
        .assert()
        .success();

    assert!(temp.path().join("lib/__tests__/index.test.ts").is_file());
}

#[test]
fn directory_flags_are_validated() {
    let temp = repo();

    pti(temp.path())
        .args(["tsconfig", "-l", "/tmp/out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--library"));

    pti(temp.path())
        .args(["tsconfig", "--library="])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));

    assert!(!temp.path().join("tsconfig.json").exists());
}

#[test]
fn fix_types_rejects_umd() {
    let temp = repo();

    pti(temp.path())
        .args(["fix-types", "-t", "umd"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("umd"));
}

#[test]
fn package_json_requires_the_file() {
    let temp = repo();

    pti(temp.path())
        .arg("package-json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("package.json"));
}

#[test]
fn invalid_settings_are_reported() {
    let temp = repo();
    fs::write(temp.path().join("pti.toml"), "[directories]\nsource = \"/abs\"\n").unwrap();

    pti(temp.path())
        .arg("git")
        .assert()
        .failure()
        .stderr(predicate::str::contains("source"));
}
