//! Session state for one generation workspace.
//!
//! [`Studio`] holds the document input, the current manifest and the last
//! user-visible error. At most one request is outstanding at a time: while a
//! [`PendingRequest`] ticket exists, [`Studio::begin`] is a no-op. A new
//! manifest replaces the previous one as a whole; nothing mutates a manifest
//! in place.
//!
//! Dropping a [`Studio::generate`] future before it completes abandons the
//! request: the studio stops being busy and keeps its manifest and error.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::EMPTY_INPUT_MESSAGE;
use crate::generate::{ManifestRequester, ManifestService};
use crate::{Error, Manifest, Result};

/// Ticket for the single outstanding request.
///
/// Carries a snapshot of the input taken when the request began, so edits
/// made while it runs do not change what is sent.
#[derive(Debug)]
#[must_use = "an unfinished request keeps the studio busy"]
pub struct PendingRequest {
    text: String,
}

impl PendingRequest {
    /// Document text the request was started with.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Single-owner session cell.
#[derive(Debug, Default)]
pub struct Studio {
    input: String,
    manifest: Option<Arc<Manifest>>,
    error: Option<String>,
    generating: bool,
}

impl Studio {
    /// An empty studio with no input and no manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the document input.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Current document input.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The current manifest, if any.
    pub fn manifest(&self) -> Option<Arc<Manifest>> {
        self.manifest.clone()
    }

    /// Message for the last failed attempt, cleared when a new one begins.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a request is outstanding.
    pub const fn is_generating(&self) -> bool {
        self.generating
    }

    /// Start a request.
    ///
    /// Returns `Ok(None)` without touching any state when a request is already
    /// outstanding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] when the input is blank, and records the
    /// prompt to paste content. The current manifest is kept.
    pub fn begin(&mut self) -> Result<Option<PendingRequest>> {
        if self.generating {
            debug!("Request already outstanding; ignoring");
            return Ok(None);
        }
        if self.input.trim().is_empty() {
            self.error = Some(EMPTY_INPUT_MESSAGE.to_string());
            return Err(Error::EmptyInput);
        }

        self.generating = true;
        self.error = None;
        Ok(Some(PendingRequest {
            text: self.input.clone(),
        }))
    }

    /// Complete the outstanding request with its outcome.
    ///
    /// On success the new manifest replaces the old one. On failure the old
    /// manifest stays and the collapsed retry message is recorded. Either way
    /// the studio is no longer busy.
    ///
    /// # Errors
    ///
    /// Passes the request's error back to the caller unchanged.
    pub fn finish(
        &mut self,
        ticket: PendingRequest,
        result: Result<Manifest>,
    ) -> Result<Arc<Manifest>> {
        drop(ticket);
        self.generating = false;

        match result {
            Ok(manifest) => {
                let manifest = Arc::new(manifest);
                self.manifest = Some(Arc::clone(&manifest));
                Ok(manifest)
            },
            Err(err) => {
                warn!(error = %err, category = err.category(), "Generation failed");
                self.error = Some(err.user_message().to_string());
                Err(err)
            },
        }
    }

    /// Begin, request and finish in one call.
    ///
    /// Returns `Ok(None)` if a request was already outstanding.
    ///
    /// # Errors
    ///
    /// Returns the requester's error after recording the user message.
    pub async fn generate<S: ManifestService>(
        &mut self,
        requester: &ManifestRequester<S>,
    ) -> Result<Option<Arc<Manifest>>> {
        let Some(ticket) = self.begin()? else {
            return Ok(None);
        };
        let mut busy = Busy(self);
        let result = requester.request_manifest(ticket.text()).await;
        busy.0.finish(ticket, result).map(Some)
    }

    /// Give up on the outstanding request without recording an outcome.
    fn abandon(&mut self) {
        if self.generating {
            debug!("Outstanding request abandoned");
            self.generating = false;
        }
    }

    /// Drop the manifest and keep the input for another attempt.
    pub fn discard(&mut self) {
        self.manifest = None;
        self.error = None;
    }

    /// Drop the manifest and the input.
    pub fn reset(&mut self) {
        self.discard();
        self.input.clear();
    }
}

/// Clears the busy flag if a [`Studio::generate`] future is dropped mid-request.
struct Busy<'a>(&'a mut Studio);

impl Drop for Busy<'_> {
    fn drop(&mut self) {
        self.0.abandon();
    }
}
