//! Manifest requester and the service seam it talks through.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::build_prompt;
use crate::schema::response_schema;
use crate::{Error, Manifest, Result};

/// Text-to-structured-data capability (allows stubbing in tests).
///
/// Implementations send `prompt` with `schema` as the structured-output
/// constraint and return the raw reply text. They must not retry.
#[async_trait::async_trait]
pub trait ManifestService: Send + Sync {
    /// Send one request and return the reply text.
    async fn generate(&self, prompt: &str, schema: &Value) -> Result<String>;
}

#[async_trait::async_trait]
impl<S: ManifestService + ?Sized> ManifestService for Arc<S> {
    async fn generate(&self, prompt: &str, schema: &Value) -> Result<String> {
        (**self).generate(prompt, schema).await
    }
}

#[async_trait::async_trait]
impl<S: ManifestService + ?Sized> ManifestService for Box<S> {
    async fn generate(&self, prompt: &str, schema: &Value) -> Result<String> {
        (**self).generate(prompt, schema).await
    }
}

/// Builds the request, calls the service once, and parses the reply.
pub struct ManifestRequester<S: ManifestService> {
    service: S,
    schema: Value,
}

impl<S: ManifestService> ManifestRequester<S> {
    /// Create a requester over the given service.
    pub fn new(service: S) -> Self {
        Self {
            service,
            schema: response_schema(),
        }
    }

    /// The underlying service.
    pub const fn service(&self) -> &S {
        &self.service
    }

    /// Request a manifest for `document_text`.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyInput`] if the text is blank; the service is not called
    /// - whatever the service returns on transport failure
    /// - [`Error::Parse`] if the reply is not a valid manifest
    #[instrument(level = "debug", skip_all, fields(chars = document_text.len()))]
    pub async fn request_manifest(&self, document_text: &str) -> Result<Manifest> {
        if document_text.trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        let prompt = build_prompt(document_text);
        debug!(prompt_len = prompt.len(), "Sending manifest request");

        let reply = self.service.generate(&prompt, &self.schema).await?;

        let manifest = Manifest::from_json(&reply).map_err(|e| {
            warn!(error = %e, reply_len = reply.len(), "Reply is not a valid manifest");
            e
        })?;

        info!(
            name = %manifest.name,
            sections = manifest.sections.len(),
            "Generated site manifest"
        );
        Ok(manifest)
    }
}
