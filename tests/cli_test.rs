//! Integration tests for the drive binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A `drive` command whose bookmark file lives inside `temp`.
fn drive(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("drive"));
    cmd.arg("--store").arg(store_path(temp));
    cmd.env_remove("DRIVE_STORE");
    cmd.env_remove("DRIVE_COMMAND");
    cmd
}

fn store_path(temp: &TempDir) -> PathBuf {
    temp.path().join("config").join("paths.json")
}

fn project(temp: &TempDir, name: &str) -> PathBuf {
    let dir = temp.path().join(name);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn stored(temp: &TempDir) -> serde_json::Value {
    let content = fs::read_to_string(store_path(temp)).unwrap();
    serde_json::from_str(&content).unwrap()
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("drive"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("directories and jump back"))
        .stdout(predicate::str::contains("park"))
        .stdout(predicate::str::contains("--editor"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("drive"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_park_then_list() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let app = project(&temp, "app");

    drive(&temp)
        .args(["park", &path_str(&app)])
        .assert()
        .success()
        .stdout(predicate::str::contains("Parked:"));

    drive(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Parked directories:"))
        .stdout(predicate::str::contains(format!("1. {}", app.display())));

    assert_eq!(stored(&temp)["paths"][0], path_str(&app));
    Ok(())
}

#[test]
fn cli_park_defaults_to_current_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let app = project(&temp, "app");

    drive(&temp)
        .current_dir(&app)
        .arg("park")
        .assert()
        .success();

    let paths = stored(&temp)["paths"].as_array().unwrap().clone();
    assert_eq!(paths.len(), 1);
    assert!(paths[0].as_str().unwrap().ends_with("app"));
    Ok(())
}

#[test]
fn cli_park_twice_keeps_one_entry() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let app = project(&temp, "app");

    drive(&temp).args(["park", &path_str(&app)]).assert().success();
    drive(&temp)
        .args(["park", &path_str(&app)])
        .assert()
        .success()
        .stdout(predicate::str::contains("Already parked:"));

    assert_eq!(stored(&temp)["paths"].as_array().unwrap().len(), 1);
    Ok(())
}

#[test]
fn cli_park_missing_directory_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let missing = temp.path().join("missing");

    drive(&temp)
        .args(["park", &path_str(&missing)])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
    Ok(())
}

#[test]
fn cli_list_empty_shows_hint() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    drive(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("drive park"));
    Ok(())
}

#[test]
fn cli_corrupt_store_reads_as_empty() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::create_dir_all(store_path(&temp).parent().unwrap())?;
    fs::write(store_path(&temp), "not json at all")?;

    drive(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No parked directories"));
    Ok(())
}

#[test]
fn cli_unpark_named_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let app = project(&temp, "app");
    let web = project(&temp, "web");
    drive(&temp).args(["park", &path_str(&app)]).assert().success();
    drive(&temp).args(["park", &path_str(&web)]).assert().success();

    drive(&temp)
        .args(["unpark", &path_str(&app)])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unparked:"));

    assert_eq!(stored(&temp)["paths"], serde_json::json!([path_str(&web)]));
    Ok(())
}

#[test]
fn cli_unpark_unknown_path_warns() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let app = project(&temp, "app");

    drive(&temp)
        .args(["unpark", &path_str(&app)])
        .assert()
        .success()
        .stderr(predicate::str::contains("Not parked:"));
    Ok(())
}

#[test]
fn cli_unpark_prompt_answered_from_env() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let app = project(&temp, "app");
    drive(&temp).args(["park", &path_str(&app)]).assert().success();

    drive(&temp)
        .arg("unpark")
        .env("DRIVE_PROMPT_UNPARK", path_str(&app))
        .assert()
        .success()
        .stdout(predicate::str::contains("Unparked:"));

    assert_eq!(stored(&temp)["paths"], serde_json::json!([]));
    Ok(())
}

#[test]
fn cli_prune_forgets_deleted_directories() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let app = project(&temp, "app");
    let gone = project(&temp, "gone");
    drive(&temp).args(["park", &path_str(&app)]).assert().success();
    drive(&temp).args(["park", &path_str(&gone)]).assert().success();
    fs::remove_dir(&gone)?;

    drive(&temp)
        .arg("prune")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pruned 1 missing directory"));

    assert_eq!(stored(&temp)["paths"], serde_json::json!([path_str(&app)]));
    Ok(())
}

#[test]
fn cli_home_prints_home_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let home = project(&temp, "home");

    drive(&temp)
        .arg("home")
        .env("HOME", &home)
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{}\n", home.display())));
    Ok(())
}

#[test]
fn cli_picker_with_empty_store() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    drive(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("No parked directories"));
    Ok(())
}

#[test]
fn cli_picker_requires_terminal() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let app = project(&temp, "app");
    drive(&temp).args(["park", &path_str(&app)]).assert().success();

    drive(&temp)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("interactive terminal"));
    Ok(())
}

#[test]
fn cli_quiet_suppresses_status() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let app = project(&temp, "app");

    drive(&temp)
        .args(["--quiet", "park", &path_str(&app)])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn cli_quiet_list_still_lists() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let app = project(&temp, "app");
    drive(&temp).args(["park", &path_str(&app)]).assert().success();

    drive(&temp)
        .args(["--quiet", "list"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "Parked directories:\n  1. {}\n",
            app.display()
        )));
    Ok(())
}

#[test]
fn cli_completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    drive(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("drive"));
    Ok(())
}
