//! CLI end-to-end tests
//!
//! Tests for the reelname command-line interface.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Get a command for the reelname binary, isolated from the caller's config
#[allow(deprecated)]
fn reelname_cmd(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("reelname").unwrap();
    cmd.current_dir(cwd)
        .env_remove("RUST_LOG")
        .env_remove("REELNAME_API_KEY");
    cmd
}

#[test]
fn test_cli_no_args_shows_help() {
    let temp = tempdir().unwrap();
    reelname_cmd(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_help_flag() {
    let temp = tempdir().unwrap();
    reelname_cmd(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("reelname"))
        .stdout(predicate::str::contains("rename"));
}

#[test]
fn test_cli_version_flag() {
    let temp = tempdir().unwrap();
    reelname_cmd(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("reelname"));
}

#[test]
fn test_cli_rename_help() {
    let temp = tempdir().unwrap();
    reelname_cmd(temp.path())
        .args(["rename", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--simulate"))
        .stdout(predicate::str::contains("--offset"));
}

#[test]
fn test_cli_rename_search_flags_conflict() {
    let temp = tempdir().unwrap();
    reelname_cmd(temp.path())
        .args(["rename", "-a", "-b", "movie.mkv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_cli_parse_text() {
    let temp = tempdir().unwrap();
    reelname_cmd(temp.path())
        .args(["parse", "/tv/Breaking.Bad.S01E01.720p.BluRay.x264-DEMAND.mkv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: Breaking Bad"))
        .stdout(predicate::str::contains("Episode: S01E01"));
}

#[test]
fn test_cli_parse_json() {
    let temp = tempdir().unwrap();
    let output = reelname_cmd(temp.path())
        .args(["parse", "--json", "/m/Alien.1979.1080p.BluRay.x264.mkv"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed[0]["raw_title"], "Alien");
    assert_eq!(parsed[0]["year"], "1979");
    assert_eq!(parsed[0]["media_type"], "movie");
}

#[test]
fn test_cli_probe_nonexistent_file() {
    let temp = tempdir().unwrap();
    reelname_cmd(temp.path())
        .args(["probe", "/nonexistent/path/movie.mkv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not exist"));
}

#[test]
fn test_cli_check_tools_command() {
    let temp = tempdir().unwrap();
    reelname_cmd(temp.path())
        .arg("check-tools")
        .assert()
        .success()
        .stdout(predicate::str::contains("ffprobe"));
}

#[test]
fn test_cli_validate_config() {
    let temp = tempdir().unwrap();
    let config_file = temp.path().join("reelname.toml");
    fs::write(
        &config_file,
        r#"
[imdb]
api_key = "k_secret_value"
language = "de"

[rename]
basic_search = false
offset = -1
"#,
    )
    .unwrap();

    reelname_cmd(temp.path())
        .args(["validate", config_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("Language: de"))
        .stdout(predicate::str::contains("Offset: -1"))
        .stdout(predicate::str::contains("k_secret_value").not());
}

#[test]
fn test_cli_validate_rejects_disabled_search() {
    let temp = tempdir().unwrap();
    let config_file = temp.path().join("reelname.toml");
    fs::write(
        &config_file,
        r#"
[rename]
advanced_search = false
basic_search = false
"#,
    )
    .unwrap();

    reelname_cmd(temp.path())
        .args(["validate", config_file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be enabled"));
}

#[test]
fn test_cli_validate_malformed_config() {
    let temp = tempdir().unwrap();
    let config_file = temp.path().join("reelname.toml");
    fs::write(&config_file, "[rename\noffset = ").unwrap();

    reelname_cmd(temp.path())
        .args(["--config", config_file.to_str().unwrap(), "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_cli_rename_without_api_key() {
    let temp = tempdir().unwrap();
    let file = temp.path().join("Alien.1979.1080p.mkv");
    fs::write(&file, b"").unwrap();

    reelname_cmd(temp.path())
        .args(["rename", file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no API key configured"));
}

#[test]
fn test_cli_rename_no_valid_files() {
    let temp = tempdir().unwrap();
    let notes = temp.path().join("notes.txt");
    fs::write(&notes, b"").unwrap();

    reelname_cmd(temp.path())
        .env("REELNAME_API_KEY", "k_test")
        .args(["rename", notes.to_str().unwrap(), "/nonexistent/movie.mkv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported file type"))
        .stderr(predicate::str::contains("No video files to process"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_rename_simulate() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/API/AdvancedSearch/k_test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"id": "tt0078748", "title": "Alien", "description": "(1979)"}],
            "errorMessage": ""
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/en/API/Title/k_test/tt0078748"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "tt0078748",
            "title": "Alien",
            "year": "1979",
            "genres": "Horror, Sci-Fi"
        })))
        .mount(&server)
        .await;

    let temp = tempdir().unwrap();
    let config_file = temp.path().join("reelname.toml");
    fs::write(
        &config_file,
        format!(
            "[imdb]\nbase_url = \"{}\"\n\n[rename]\ninteractive = false\n",
            server.uri()
        ),
    )
    .unwrap();
    let file = temp.path().join("Alien.1979.1080p.BluRay.mkv");
    fs::write(&file, b"").unwrap();

    reelname_cmd(temp.path())
        .env("REELNAME_API_KEY", "k_test")
        .args([
            "-c",
            config_file.to_str().unwrap(),
            "rename",
            "--simulate",
            file.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[SIMULATE] Renaming \"Alien.1979.1080p.BluRay.mkv\" to \"Alien (1979).mkv\"",
        ))
        .stdout(predicate::str::contains("1 would be renamed, 0 failed, 0 rejected"));

    assert!(file.exists());
    assert!(!temp.path().join("Alien (1979).mkv").exists());
}
