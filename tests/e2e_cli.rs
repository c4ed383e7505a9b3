//! CLI end-to-end tests
//!
//! Tests for the streamflix command-line interface.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[allow(deprecated)]
fn streamflix_cmd() -> Command {
    Command::cargo_bin("streamflix").unwrap()
}

const MOVIES_JSON: &str = r#"[
    {"id": 1, "slug": "the-matrix", "title": "The Matrix", "vote_average": 8.7, "vote_count": 24000,
     "created_at": "2024-01-01T00:00:00Z"},
    {"id": 2, "title": "Alien", "vote_average": 8.5, "vote_count": 14000,
     "created_at": "2024-01-05T00:00:00Z"},
    {"id": 3, "slug": "heat", "title": "Heat", "vote_average": 8.3, "vote_count": 7000, "runtime": 170,
     "created_at": "2024-01-03T00:00:00Z"}
]"#;

#[test]
fn test_cli_no_args_shows_help() {
    streamflix_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_help_flag() {
    streamflix_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("streamflix"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version_command() {
    streamflix_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_validate_default_config() {
    let dir = tempdir().unwrap();
    streamflix_cmd()
        .current_dir(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("using defaults"));
}

#[test]
fn test_cli_validate_rejects_zero_port() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[server]\nport = 0\n").unwrap();

    streamflix_cmd()
        .arg("validate")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("port"));
}

#[test]
fn test_cli_home_from_json_export() {
    let dir = tempdir().unwrap();
    let movies = dir.path().join("movies.json");
    fs::write(&movies, MOVIES_JSON).unwrap();

    streamflix_cmd()
        .current_dir(dir.path())
        .arg("home")
        .arg("--movies")
        .arg(&movies)
        .assert()
        .success()
        .stdout(predicate::str::contains("Featured: The Matrix [8.7]"))
        .stdout(predicate::str::contains("Recently Added (/movies?sort=recent)"))
        .stdout(predicate::str::contains("/movie/2"));
}

#[test]
fn test_cli_home_json_output() {
    let dir = tempdir().unwrap();
    let movies = dir.path().join("movies.json");
    fs::write(&movies, MOVIES_JSON).unwrap();

    let output = streamflix_cmd()
        .current_dir(dir.path())
        .args(["home", "--json", "--movies"])
        .arg(&movies)
        .output()
        .unwrap();
    assert!(output.status.success());

    let page: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(page["hero"]["display_path"], "the-matrix");
    assert_eq!(page["is_empty"], false);
}

#[test]
fn test_cli_import_then_home() {
    let dir = tempdir().unwrap();
    let movies = dir.path().join("movies.json");
    fs::write(&movies, MOVIES_JSON).unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "").unwrap();

    streamflix_cmd()
        .arg("--config")
        .arg(&config)
        .arg("import")
        .arg(&movies)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 3 movies"));

    assert!(dir.path().join("streamflix.db").exists());

    streamflix_cmd()
        .arg("--config")
        .arg(&config)
        .arg("home")
        .assert()
        .success()
        .stdout(predicate::str::contains("Popular Movies"))
        .stdout(predicate::str::contains("Heat"));
}

#[test]
fn test_cli_home_on_empty_database() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "").unwrap();

    streamflix_cmd()
        .arg("--config")
        .arg(&config)
        .arg("home")
        .assert()
        .success()
        .stdout(predicate::str::contains("No Movies Available"));
}
