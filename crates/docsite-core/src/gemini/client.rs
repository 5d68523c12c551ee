//! HTTP client for the `generateContent` endpoint.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::ServiceConfig;
use crate::generate::ManifestService;
use crate::{Error, Result};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Handle to the generation service.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    api_key: String,
    thinking_budget: Option<u32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    thinking_config: Option<ThinkingConfig>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

impl GeminiClient {
    /// Build a client from service settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when no API key is configured and
    /// [`Error::Network`] if the HTTP client cannot be constructed.
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                Error::Config(
                    "No API key configured. Set DOCSITE_API_KEY or GEMINI_API_KEY".to_string(),
                )
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("outfitter-docsite/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .build()
            .map_err(Error::Network)?;

        let endpoint = format!(
            "{}/v1beta/models/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            config.model
        );

        Ok(Self {
            client,
            endpoint,
            api_key,
            thinking_budget: config.thinking_budget.filter(|budget| *budget > 0),
        })
    }

    /// Full `generateContent` URL this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_body<'a>(&self, prompt: &'a str, schema: &'a Value) -> GenerateRequest<'a> {
        GenerateRequest {
            contents: [Content {
                role: "user",
                parts: [RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
                thinking_config: self
                    .thinking_budget
                    .map(|thinking_budget| ThinkingConfig { thinking_budget }),
            },
        }
    }
}

#[async_trait::async_trait]
impl ManifestService for GeminiClient {
    #[instrument(level = "debug", skip_all, fields(endpoint = %self.endpoint))]
    async fn generate(&self, prompt: &str, schema: &Value) -> Result<String> {
        let body = self.request_body(prompt, schema);

        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = error_message(&text);
            warn!(status = status.as_u16(), %message, "Generation request failed");
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!(bytes = text.len(), "Generation request succeeded");
        extract_text(&text)
    }
}

/// Pull the service's error message out of an error body, or fall back to the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|env| env.error.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| body.trim().to_string())
}

/// Concatenate the non-thought text parts of the first candidate.
fn extract_text(body: &str) -> Result<String> {
    let response: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| Error::Parse(format!("Unexpected generation response: {e}")))?;

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter(|p| !p.thought)
                .filter_map(|p| p.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(Error::EmptyResponse);
    }
    Ok(text)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::panic,
    clippy::disallowed_macros,
    clippy::unnecessary_wraps
)]
mod tests {
    use super::*;
    use crate::schema::response_schema;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MODEL_PATH: &str = "/v1beta/models/test-model:generateContent";

    fn config_for(server: &MockServer) -> ServiceConfig {
        ServiceConfig {
            base_url: server.uri(),
            model: "test-model".to_string(),
            thinking_budget: Some(15_000),
            timeout_secs: 5,
            api_key: Some("test-key".to_string()),
        }
    }

    fn reply_with_text(text: &str) -> serde_json::Value {
        json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP"
            }]
        })
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let config = ServiceConfig {
            api_key: None,
            ..ServiceConfig::default()
        };
        assert!(matches!(GeminiClient::new(&config), Err(Error::Config(_))));

        let blank = ServiceConfig {
            api_key: Some("   ".to_string()),
            ..ServiceConfig::default()
        };
        assert!(matches!(GeminiClient::new(&blank), Err(Error::Config(_))));
    }

    #[test]
    fn test_endpoint_joins_base_and_model() {
        let config = ServiceConfig {
            base_url: "https://example.test/".to_string(),
            model: "gemini-x".to_string(),
            api_key: Some("k".to_string()),
            ..ServiceConfig::default()
        };
        let client = GeminiClient::new(&config).unwrap();

        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-x:generateContent"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let config = ServiceConfig {
            api_key: Some("k".to_string()),
            ..ServiceConfig::default()
        };
        let client = GeminiClient::new(&config).unwrap();
        let schema = response_schema();

        let body = serde_json::to_value(client.request_body("hello", &schema)).unwrap();

        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(body["generationConfig"]["responseSchema"], schema);
        assert_eq!(
            body["generationConfig"]["thinkingConfig"]["thinkingBudget"],
            15_000
        );
    }

    #[test]
    fn test_request_body_omits_thinking_when_unset() {
        let config = ServiceConfig {
            api_key: Some("k".to_string()),
            thinking_budget: None,
            ..ServiceConfig::default()
        };
        let client = GeminiClient::new(&config).unwrap();
        let schema = json!({});

        let body = serde_json::to_value(client.request_body("hello", &schema)).unwrap();

        assert!(body["generationConfig"].get("thinkingConfig").is_none());
    }

    #[test]
    fn test_zero_thinking_budget_from_file_omits_setting() {
        let mut config: crate::Config =
            toml::from_str("[service]\nthinking_budget = 0\napi_key = \"k\"\n").unwrap();
        config.service.base_url = "https://example.test".to_string();
        let client = GeminiClient::new(&config.service).unwrap();
        let schema = json!({});

        let body = serde_json::to_value(client.request_body("hello", &schema)).unwrap();

        assert!(body["generationConfig"].get("thinkingConfig").is_none());
    }

    #[tokio::test]
    async fn test_generate_returns_candidate_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "generationConfig": { "responseMimeType": "application/json" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_with_text("{\"ok\":1}")))
            .expect(1)
            .mount(&server)
            .await;

        let client = GeminiClient::new(&config_for(&server)).unwrap();
        let text = client.generate("prompt", &response_schema()).await.unwrap();

        assert_eq!(text, "{\"ok\":1}");
    }

    #[tokio::test]
    async fn test_generate_joins_parts_and_skips_thoughts() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": { "parts": [
                        { "text": "thinking...", "thought": true },
                        { "text": "{\"a\":" },
                        { "text": "1}" }
                    ] }
                }]
            })))
            .mount(&server)
            .await;

        let client = GeminiClient::new(&config_for(&server)).unwrap();
        let text = client.generate("prompt", &json!({})).await.unwrap();

        assert_eq!(text, "{\"a\":1}");
    }

    #[tokio::test]
    async fn test_error_status_maps_to_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "error": { "code": 429, "message": "Resource has been exhausted", "status": "RESOURCE_EXHAUSTED" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = GeminiClient::new(&config_for(&server)).unwrap();
        let err = client.generate("prompt", &json!({})).await.unwrap_err();

        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "Resource has been exhausted");
            },
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_error_status_with_plain_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway\n"))
            .mount(&server)
            .await;

        let client = GeminiClient::new(&config_for(&server)).unwrap();
        let err = client.generate("prompt", &json!({})).await.unwrap_err();

        assert!(matches!(err, Error::Api { status: 502, ref message } if message == "bad gateway"));
        assert!(err.is_recoverable());
    }

    #[tokio::test]
    async fn test_no_candidates_is_empty_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let client = GeminiClient::new(&config_for(&server)).unwrap();
        let err = client.generate("prompt", &json!({})).await.unwrap_err();

        assert!(matches!(err, Error::EmptyResponse));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_network_error() {
        let server = MockServer::start().await;
        let config = config_for(&server);
        drop(server);

        let client = GeminiClient::new(&config).unwrap();
        let err = client.generate("prompt", &json!({})).await.unwrap_err();

        assert!(matches!(err, Error::Network(_)));
    }

    #[test]
    fn test_extract_text_rejects_non_json() {
        assert!(matches!(extract_text("<html>"), Err(Error::Parse(_))));
    }
}
