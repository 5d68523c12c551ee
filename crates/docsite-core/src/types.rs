//! Site manifest data model.
//!
//! A [`Manifest`] is what the generation service returns: the site's identity,
//! one shared [`Theme`], and the ordered list of page [`Section`]s. Field names
//! on the wire are camelCase and must match [`crate::schema::response_schema`].

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Typeface family requested by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    /// Clean sans-serif.
    Modern,
    /// Serif.
    Classic,
    /// Rounded, informal.
    Playful,
    /// Monospace.
    Tech,
}

impl FontStyle {
    /// All font styles in schema order.
    pub const ALL: [Self; 4] = [Self::Modern, Self::Classic, Self::Playful, Self::Tech];

    /// Wire name of the style.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Classic => "classic",
            Self::Playful => "playful",
            Self::Tech => "tech",
        }
    }
}

/// Three-color palette plus font style, shared by every section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Primary brand color.
    pub primary: String,
    /// Secondary brand color.
    pub secondary: String,
    /// Call-to-action color.
    pub accent: String,
    /// Typeface family.
    pub font_style: FontStyle,
}

impl Theme {
    /// Check that all three colors are hex color strings.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
        ] {
            if !is_hex_color(value) {
                return Err(Error::Parse(format!(
                    "theme.{field} is not a hex color: {value:?}"
                )));
            }
        }
        Ok(())
    }
}

/// Returns true for `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA`.
#[must_use]
pub fn is_hex_color(value: &str) -> bool {
    static HEX_RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    let re = HEX_RE.get_or_init(|| {
        Regex::new(r"^#(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
            .expect("hex color regex is valid")
    });
    re.is_match(value)
}

/// Kind of page region.
///
/// Any tag outside the seven known ones deserializes as
/// [`SectionType::Unknown`] carrying the tag as sent, so one unexpected section
/// cannot fail the whole manifest and serializing gives the same tag back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SectionType {
    /// Full-bleed banner.
    Hero,
    /// Feature card grid.
    Features,
    /// Text with a media placeholder.
    About,
    /// Price cards.
    Pricing,
    /// Quote cards.
    Testimonials,
    /// Static contact form.
    Contact,
    /// Closing band.
    Footer,
    /// Unrecognized tag, kept verbatim.
    Unknown(String),
}

impl SectionType {
    /// The seven tags accepted by the response schema, in schema order.
    pub const KNOWN: [Self; 7] = [
        Self::Hero,
        Self::Features,
        Self::About,
        Self::Pricing,
        Self::Testimonials,
        Self::Contact,
        Self::Footer,
    ];

    /// Wire name of the tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Hero => "hero",
            Self::Features => "features",
            Self::About => "about",
            Self::Pricing => "pricing",
            Self::Testimonials => "testimonials",
            Self::Contact => "contact",
            Self::Footer => "footer",
            Self::Unknown(tag) => tag,
        }
    }

    /// Whether this is one of the seven known tags.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<String> for SectionType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "hero" => Self::Hero,
            "features" => Self::Features,
            "about" => Self::About,
            "pricing" => Self::Pricing,
            "testimonials" => Self::Testimonials,
            "contact" => Self::Contact,
            "footer" => Self::Footer,
            _ => Self::Unknown(tag),
        }
    }
}

impl From<SectionType> for String {
    fn from(kind: SectionType) -> Self {
        match kind {
            SectionType::Unknown(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Repeatable entry inside a section: a feature, a price tier, a testimonial.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Feature name, tier name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Body text; the quote for testimonials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Short glyph for feature cards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Price text for pricing tiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// Testimonial author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Testimonial author's role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// One page region. Only `kind` is required; the renderer decides what the
/// remaining fields mean for each kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Region kind, `type` on the wire.
    #[serde(rename = "type")]
    pub kind: SectionType,
    /// Heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Secondary heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Call-to-action label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    /// Repeatable entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Item>>,
}

impl Section {
    /// An empty section of the given kind.
    #[must_use]
    pub const fn new(kind: SectionType) -> Self {
        Self {
            kind,
            title: None,
            subtitle: None,
            content: None,
            cta_text: None,
            items: None,
        }
    }

    /// Items in input order; empty when absent.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        self.items.as_deref().unwrap_or_default()
    }
}

/// Complete structured description of a generated site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Site or brand name.
    pub name: String,
    /// One-line pitch; may be empty.
    pub tagline: String,
    /// Shared palette and font.
    pub theme: Theme,
    /// Top-to-bottom page order.
    pub sections: Vec<Section>,
}

impl Manifest {
    /// Parse and validate a manifest from the service's JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] when the text is not JSON, a required field is
    /// missing or null, the font style is not one of the four known values, or
    /// a theme color is not a hex string.
    ///
    /// ```rust
    /// use docsite_core::Manifest;
    ///
    /// let json = r##"{
    ///   "name": "Acme", "tagline": "Drones",
    ///   "theme": {"primary": "#111", "secondary": "#222", "accent": "#f50", "fontStyle": "tech"},
    ///   "sections": [{"type": "hero", "title": "Acme"}]
    /// }"##;
    /// let manifest = Manifest::from_json(json)?;
    /// assert_eq!(manifest.sections.len(), 1);
    /// # Ok::<(), docsite_core::Error>(())
    /// ```
    pub fn from_json(text: &str) -> Result<Self> {
        let manifest: Self = serde_json::from_str(text)
            .map_err(|e| Error::Parse(format!("manifest is not valid: {e}")))?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Check invariants serde cannot express.
    pub fn validate(&self) -> Result<()> {
        self.theme.validate()
    }

    /// Serialize back to pretty JSON in the wire shape.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
