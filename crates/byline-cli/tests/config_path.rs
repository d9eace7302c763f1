use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_path_command() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("byline")
        .env("BYLINE_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_creates_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    assert!(!config_path.exists());

    cargo_bin_cmd!("byline")
        .env("BYLINE_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    assert!(config_path.exists());

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("api_base_url ="));
    assert!(contents.contains("# log_filter ="));
}

#[test]
fn test_config_init_leaves_existing_file_alone() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    fs::write(&config_path, "api_base_url = \"http://example.com/api\"\n").unwrap();

    cargo_bin_cmd!("byline")
        .env("BYLINE_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("example.com"));
}

#[test]
fn test_config_set_url_persists() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("byline")
        .env("BYLINE_HOME", dir.path())
        .args(["config", "set-url", "https://api.example.com/api"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api_base_url"));

    let contents = fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(contents.contains("https://api.example.com/api"));
}
