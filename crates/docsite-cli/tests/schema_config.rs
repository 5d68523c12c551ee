#![allow(missing_docs, clippy::expect_used, clippy::unwrap_used)]

mod common;

use common::docsite_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn schema_prints_response_schema() {
    let output = docsite_cmd().arg("schema").assert().success().get_output().stdout.clone();

    let schema: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(schema["type"], "OBJECT");
    assert_eq!(
        schema["properties"]["theme"]["properties"]["fontStyle"]["enum"],
        serde_json::json!(["modern", "classic", "playful", "tech"])
    );
}

#[test]
fn config_redacts_api_key() {
    docsite_cmd()
        .env("DOCSITE_API_KEY", "super-secret")
        .env("DOCSITE_MODEL", "gemini-2.5-flash")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("model = \"gemini-2.5-flash\""))
        .stdout(predicate::str::contains("********"))
        .stdout(predicate::str::contains("super-secret").not());
}

#[test]
fn gemini_api_key_is_a_fallback() {
    docsite_cmd()
        .env_remove("DOCSITE_API_KEY")
        .env("GEMINI_API_KEY", "fallback-secret")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("api_key = \"********\""));
}

#[test]
fn malformed_config_file_is_a_config_error() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[service\nmodel = ").unwrap();

    docsite_cmd()
        .arg("--config")
        .arg(&config)
        .arg("config")
        .assert()
        .code(6)
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn missing_explicit_config_file_is_a_config_error() {
    let dir = tempdir().unwrap();

    docsite_cmd()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("schema")
        .assert()
        .code(6);
}
