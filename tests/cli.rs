use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

const BINARY_NAME: &str = "lightdash";

const KEY: &str = "0x90f70a6bbf31d38bb4e95a53ba87fc062b8858dcc45ec7c77174e891679f4e4edc2e6efb6f38aa11c7c66249c62cacdd";

/// Helper to get a temporary config directory
fn temp_config_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get the default config file path under a simulated $HOME
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".lightdash").join("config.json")
}

#[test]
/// Help command should list the subcommands.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("start"))
        .stdout(contains("status"))
        .stdout(contains("init"));
}

#[test]
/// Init should write the merged settings to the default config path.
fn init_creates_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("init")
        .arg("--pubkey")
        .arg(KEY)
        .arg("--interval")
        .arg("10")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Configuration saved"));

    let saved = fs::read_to_string(&config_path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(json["validator_pubkey"], KEY);
    assert_eq!(json["refresh_interval_secs"], 10);
    assert_eq!(json["base_url"], "http://localhost:5052");
}

#[test]
/// Init should not overwrite an existing file unless forced.
fn init_refuses_to_overwrite_without_force() {
    let tmp = temp_config_dir();
    let config_path = tmp.path().join("config.json");
    fs::write(&config_path, format!(r#"{{"validator_pubkey": "{}"}}"#, KEY)).unwrap();

    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .arg("init")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(contains("already exists"));

    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .arg("init")
        .arg("--config")
        .arg(&config_path)
        .arg("--memory-warning")
        .arg("90")
        .arg("--force")
        .assert()
        .success();

    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains(r#""memory_warning_percent": 90"#));
}

#[test]
/// A malformed public key is a fatal configuration error.
fn status_rejects_invalid_pubkey() {
    let tmp = temp_config_dir();

    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .arg("status")
        .arg("--config")
        .arg(tmp.path().join("missing.json"))
        .arg("--pubkey")
        .arg("0xdeadbeef")
        .assert()
        .failure()
        .stderr(contains("Invalid validator public key"));
}

#[test]
/// Without any pubkey the dashboard refuses to start.
fn start_requires_pubkey() {
    let tmp = temp_config_dir();

    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .arg("start")
        .arg("--headless")
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("validator_pubkey"));
}

#[test]
/// Status fails only when no source at all could be read.
fn status_fails_when_node_unreachable() {
    let tmp = temp_config_dir();

    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .arg("status")
        .arg("--config")
        .arg(tmp.path().join("missing.json"))
        .arg("--pubkey")
        .arg(KEY)
        .arg("--base-url")
        .arg("http://127.0.0.1:1")
        .arg("--db-path")
        .arg(tmp.path().join("no_db"))
        .arg("--timeout-ms")
        .arg("500")
        .assert()
        .failure()
        .stdout(contains("Node Balance: —"))
        .stderr(contains("no source could be read"));
}

#[test]
/// A readable database directory is enough for status to succeed.
fn status_succeeds_with_partial_data() {
    let tmp = temp_config_dir();

    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .arg("status")
        .arg("--json")
        .arg("--config")
        .arg(tmp.path().join("missing.json"))
        .arg("--pubkey")
        .arg(KEY)
        .arg("--base-url")
        .arg("http://127.0.0.1:1")
        .arg("--db-path")
        .arg(tmp.path())
        .arg("--timeout-ms")
        .arg("500")
        .assert()
        .success()
        .stdout(contains(r#""db_size_display": "0 GB""#))
        .stdout(contains(r#""tag": "health""#));
}
