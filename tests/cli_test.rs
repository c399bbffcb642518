//! Integration tests for the shipshape CLI.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const MAIN_RS: &str = "fn main() {\n    println!(\"hello\");\n}\n";
const TEST_RS: &str = "#[test]\nfn hello_prints() {\n    assert_eq!(1 + 1, 2);\n}\n";
const MANIFEST: &str = "[package]\nname = \"demo\"\nversion = \"0.1.0\"\nedition = \"2021\"\n";
const DOCKERFILE: &str = "FROM rust:1.75-slim\nCOPY demo /usr/local/bin/demo\nCMD [\"demo\"]\n";
const CI_YML: &str = "name: ci\njobs:\n  test:\n    runs-on: ubuntu-latest\n    steps:\n      - uses: actions/checkout@v4\n";
const BUILD_YML: &str = "name: build-image\njobs:\n  image:\n    runs-on: ubuntu-latest\n    steps:\n      - uses: actions/checkout@v4\n";

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn setup_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "src/main.rs", MAIN_RS);
    write(temp.path(), "tests/app.rs", TEST_RS);
    write(temp.path(), "Cargo.toml", MANIFEST);
    write(temp.path(), "Dockerfile", DOCKERFILE);
    write(temp.path(), ".github/workflows/ci.yml", CI_YML);
    write(temp.path(), ".github/workflows/build-image.yml", BUILD_YML);
    temp
}

fn shipshape(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("shipshape"));
    cmd.current_dir(temp.path());
    cmd
}

#[test]
fn complete_project_passes_every_check() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    shipshape(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"))
        .stdout(predicate::str::contains("[OK]"))
        .stdout(predicate::str::contains("[ERROR]").not());
    Ok(())
}

#[test]
fn missing_manifest_fails_while_other_checks_still_run(
) -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    fs::remove_file(temp.path().join("Cargo.toml"))?;

    shipshape(&temp)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Cargo.toml is missing"))
        .stdout(predicate::str::contains("Workflows"))
        .stdout(predicate::str::contains("Container file"))
        .stdout(predicate::str::contains("check(s) failed"));
    Ok(())
}

#[test]
fn syntax_error_names_the_offending_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    write(temp.path(), "src/main.rs", "fn main( {\n");

    shipshape(&temp)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("syntax error"))
        .stdout(predicate::str::contains("src/main.rs"));
    Ok(())
}

#[test]
fn invalid_workflow_yaml_fails_with_parser_message() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    write(temp.path(), ".github/workflows/ci.yml", "jobs: [unclosed\n");

    shipshape(&temp)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("YAML error"))
        .stdout(predicate::str::contains("ci.yml"))
        // The sibling workflow is unaffected.
        .stdout(predicate::str::contains("build-image.yml is valid YAML"));
    Ok(())
}

#[test]
fn empty_container_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    write(temp.path(), "Dockerfile", "   \n");

    shipshape(&temp)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Dockerfile is empty"));
    Ok(())
}

#[test]
fn container_file_without_markers_warns_but_passes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    write(temp.path(), "Dockerfile", "LABEL maintainer=\"demo\"\n");

    shipshape(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("may be incomplete"));
    Ok(())
}

#[test]
fn manifest_content_is_echoed_in_the_report() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    shipshape(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cargo.toml contains:"))
        .stdout(predicate::str::contains("name = \"demo\""));
    Ok(())
}

#[test]
fn json_report_lists_every_check() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    let output = shipshape(&temp).arg("--json").assert().success();

    let parsed: serde_json::Value = serde_json::from_slice(&output.get_output().stdout)?;
    assert_eq!(parsed["checks"].as_array().unwrap().len(), 5);
    assert_eq!(parsed["summary"]["total"], 5);
    assert_eq!(parsed["passed"], true);
    Ok(())
}

#[test]
fn json_report_marks_failures() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    fs::remove_file(temp.path().join("Cargo.toml"))?;

    let output = shipshape(&temp).arg("--json").assert().code(1);

    let parsed: serde_json::Value = serde_json::from_slice(&output.get_output().stdout)?;
    assert_eq!(parsed["passed"], false);
    assert!(parsed["summary"]["failed"].as_u64().unwrap() >= 1);
    Ok(())
}

#[test]
fn quiet_mode_prints_summary_only() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    shipshape(&temp)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("[OK]"))
        .stdout(predicate::str::contains("exists").not());
    Ok(())
}

#[test]
fn reruns_are_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    fs::remove_file(temp.path().join("Cargo.toml"))?;

    let first = shipshape(&temp).output()?;
    let second = shipshape(&temp).output()?;

    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());
    Ok(())
}

#[test]
fn project_flag_targets_another_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    let mut cmd = Command::new(cargo_bin("shipshape"));
    cmd.arg("--project").arg(temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"));
    Ok(())
}

#[test]
fn malformed_override_config_fails_the_run() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    write(temp.path(), "shipshape.yml", "required_files: [unclosed\n");

    shipshape(&temp)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
    Ok(())
}

#[test]
fn override_config_renames_the_container_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    fs::rename(
        temp.path().join("Dockerfile"),
        temp.path().join("Containerfile"),
    )?;
    write(
        temp.path(),
        "shipshape.yml",
        "container_file: Containerfile\nrequired_files:\n  - src/main.rs\n  - tests/app.rs\n  - Cargo.toml\n  - Containerfile\n",
    );

    shipshape(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Containerfile looks complete"));
    Ok(())
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("shipshape"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Project scaffolding verification"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("shipshape"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}
