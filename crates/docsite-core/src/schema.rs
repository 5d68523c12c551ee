//! Structured-output schema sent with every generation request.
//!
//! The generation service enforces this schema on its side, so it is the wire
//! contract between the model and [`crate::render`]. Adding a section type or a
//! field here means the renderer must learn to handle it.

use serde_json::{Value, json};

use crate::types::{FontStyle, SectionType};

/// Build the response schema in the service's OpenAPI-subset dialect.
#[must_use]
pub fn response_schema() -> Value {
    let font_styles: Vec<&str> = FontStyle::ALL.iter().map(|f| f.as_str()).collect();
    let section_types: Vec<String> = SectionType::KNOWN.into_iter().map(String::from).collect();

    json!({
        "type": "OBJECT",
        "required": ["name", "tagline", "theme", "sections"],
        "properties": {
            "name": { "type": "STRING" },
            "tagline": { "type": "STRING" },
            "theme": {
                "type": "OBJECT",
                "required": ["primary", "secondary", "accent", "fontStyle"],
                "properties": {
                    "primary": { "type": "STRING", "description": "A hex color code for primary branding" },
                    "secondary": { "type": "STRING", "description": "A hex color code for secondary branding" },
                    "accent": { "type": "STRING", "description": "A hex color code for calls to action" },
                    "fontStyle": { "type": "STRING", "enum": font_styles }
                }
            },
            "sections": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "required": ["type"],
                    "properties": {
                        "type": { "type": "STRING", "enum": section_types },
                        "title": { "type": "STRING" },
                        "subtitle": { "type": "STRING" },
                        "content": { "type": "STRING" },
                        "ctaText": { "type": "STRING" },
                        "items": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "title": { "type": "STRING" },
                                    "description": { "type": "STRING" },
                                    "icon": { "type": "STRING" },
                                    "price": { "type": "STRING" },
                                    "author": { "type": "STRING" },
                                    "role": { "type": "STRING" }
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}
