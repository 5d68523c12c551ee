#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

#[allow(dead_code)]
pub const TEST_API_KEY: &str = "test-key";

#[allow(dead_code)]
pub const GENERATE_PATH: &str = "/v1beta/models/gemini-3-pro-preview:generateContent";

#[allow(dead_code)]
pub const ACME_MANIFEST: &str = r##"{
  "name": "Acme Robotics",
  "tagline": "Drones for Industry",
  "theme": {"primary": "#112233", "secondary": "#445566", "accent": "#FF5500", "fontStyle": "tech"},
  "sections": [
    {"type": "hero", "title": "Acme Robotics", "subtitle": "Drones for Industry", "ctaText": "Get a Quote"},
    {"type": "pricing", "title": "Plans", "items": [
      {"title": "Basic", "price": "$9/mo", "description": "Starter"},
      {"title": "Pro", "price": "$29/mo", "description": "Growth"}
    ]},
    {"type": "footer"}
  ]
}"##;

fn config_dir() -> &'static Path {
    static CONFIG_DIR: OnceLock<TempDir> = OnceLock::new();
    CONFIG_DIR
        .get_or_init(|| {
            let dir = tempfile::tempdir().expect("failed to create config dir for tests");
            std::fs::write(dir.path().join("config.toml"), "").expect("write empty config");
            dir
        })
        .path()
}

/// Create a configured `docsite` command isolated from the user's settings.
#[allow(dead_code)]
pub fn docsite_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("docsite"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env("DOCSITE_CONFIG", config_dir().join("config.toml"));
    cmd.env("DOCSITE_API_KEY", TEST_API_KEY);
    cmd.env_remove("GEMINI_API_KEY");
    cmd.env_remove("DOCSITE_MODEL");
    cmd.env_remove("DOCSITE_BASE_URL");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// `docsite_cmd` pointed at a mock generation service.
#[allow(dead_code)]
pub fn docsite_cmd_for(server: &MockServer) -> Command {
    let mut cmd = docsite_cmd();
    cmd.env("DOCSITE_BASE_URL", server.uri());
    cmd
}

/// Body of a successful `generateContent` reply carrying `text`.
#[allow(dead_code)]
pub fn reply_with(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}

/// Mount a reply that answers every generate request with `text`.
#[allow(dead_code)]
pub async fn mount_reply(server: &MockServer, text: &str) {
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply_with(text)))
        .mount(server)
        .await;
}
