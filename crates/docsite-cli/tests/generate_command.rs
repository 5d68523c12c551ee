#![allow(missing_docs, clippy::expect_used, clippy::unwrap_used)]

mod common;

use common::{ACME_MANIFEST, GENERATE_PATH, docsite_cmd, docsite_cmd_for, mount_reply};
use predicates::prelude::*;
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATION_FAILED: &str =
    "Failed to generate site. Please check your document content and try again.";

#[tokio::test]
async fn generate_writes_html_site() {
    let server = MockServer::start().await;
    mount_reply(&server, ACME_MANIFEST).await;
    let dir = tempdir().unwrap();
    let doc = dir.path().join("pitch.md");
    std::fs::write(&doc, "Acme Robotics builds drones for industry.").unwrap();
    let site = dir.path().join("site.html");

    docsite_cmd_for(&server)
        .arg("generate")
        .arg(&doc)
        .arg("-o")
        .arg(&site)
        .args(["--year", "2026"])
        .assert()
        .success();

    let html = std::fs::read_to_string(&site).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Get a Quote"));
    assert!(html.contains("--accent:#FF5500"));
    assert!(html.contains("© 2026 All rights reserved."));
    assert!(html.find("Basic").unwrap() < html.find("Pro<").unwrap());
}

#[tokio::test]
async fn generate_sends_document_and_schema_once() {
    let server = MockServer::start().await;
    mount_reply(&server, ACME_MANIFEST).await;

    docsite_cmd_for(&server)
        .args(["generate", "-", "--format", "json"])
        .write_stdin("Acme Robotics builds drones for industry.")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Acme Robotics\""));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("---\nAcme Robotics builds drones for industry.\n---"));
    assert_eq!(
        body["generationConfig"]["responseMimeType"],
        "application/json"
    );
    assert_eq!(
        body["generationConfig"]["thinkingConfig"]["thinkingBudget"],
        15000
    );
    assert_eq!(
        body["generationConfig"]["responseSchema"]["required"],
        serde_json::json!(["name", "tagline", "theme", "sections"])
    );
}

#[tokio::test]
async fn generate_saves_manifest_alongside_site() {
    let server = MockServer::start().await;
    mount_reply(&server, ACME_MANIFEST).await;
    let dir = tempdir().unwrap();
    let manifest_path = dir.path().join("manifest.json");

    docsite_cmd_for(&server)
        .args(["generate", "-", "--format", "text", "--manifest-out"])
        .arg(&manifest_path)
        .write_stdin("Acme")
        .assert()
        .success()
        .stdout(predicate::str::contains("hero Acme Robotics"));

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&manifest_path).unwrap()).unwrap();
    assert_eq!(saved["theme"]["fontStyle"], "tech");
    assert_eq!(saved["sections"][0]["ctaText"], "Get a Quote");
}

#[tokio::test]
async fn blank_document_never_calls_service() {
    let server = MockServer::start().await;
    mount_reply(&server, ACME_MANIFEST).await;

    docsite_cmd_for(&server)
        .args(["generate", "-"])
        .write_stdin("   \n\t  ")
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Please paste the document content first.",
        ));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn service_error_collapses_to_retry_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_json(serde_json::json!({
            "error": {"code": 503, "message": "The model is overloaded.", "status": "UNAVAILABLE"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    docsite_cmd_for(&server)
        .args(["generate", "-"])
        .write_stdin("Acme Robotics")
        .assert()
        .code(5)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(GENERATION_FAILED));
}

#[tokio::test]
async fn malformed_reply_is_a_parse_failure() {
    let server = MockServer::start().await;
    mount_reply(&server, r#"{"name": "Acme"}"#).await;

    docsite_cmd_for(&server)
        .args(["generate", "-"])
        .write_stdin("Acme Robotics")
        .assert()
        .code(4)
        .stderr(predicate::str::contains(GENERATION_FAILED));
}

#[tokio::test]
async fn model_flag_changes_request_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::reply_with(ACME_MANIFEST)))
        .expect(1)
        .mount(&server)
        .await;

    docsite_cmd_for(&server)
        .args(["generate", "-", "--model", "gemini-2.5-flash", "--format", "json"])
        .write_stdin("Acme Robotics")
        .assert()
        .success();
}

#[test]
fn missing_api_key_is_a_config_error() {
    docsite_cmd()
        .env_remove("DOCSITE_API_KEY")
        .args(["generate", "-"])
        .write_stdin("Acme Robotics")
        .assert()
        .code(6)
        .stderr(predicate::str::contains("No API key configured"));
}

#[test]
fn missing_input_file_is_not_found() {
    let dir = tempdir().unwrap();

    docsite_cmd()
        .arg("generate")
        .arg(dir.path().join("nope.md"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("File not found"));
}
