//! Instruction text for the generation service.

/// Build the single instruction sent to the model.
///
/// The document is embedded verbatim between `---` fences; nothing is trimmed,
/// escaped or truncated.
#[must_use]
pub fn build_prompt(document_text: &str) -> String {
    format!(
        "Analyze the following document content and generate a high-quality, professional website architecture.\n\
         Extract the core mission, brand identity, and key features.\n\
         Document Content:\n\
         ---\n\
         {document_text}\n\
         ---\n\
         Return a structured JSON manifest for the website."
    )
}
