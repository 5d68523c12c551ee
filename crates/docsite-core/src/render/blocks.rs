//! Visual block types produced by the renderer.
//!
//! Blocks are plain data: every text field is the manifest's text, unescaped,
//! and every color is the theme's accent. [`crate::html`] turns them into markup.

use serde::Serialize;

/// Glyph used for feature cards without an icon.
pub const DEFAULT_FEATURE_ICON: &str = "✦";
/// Footer label used when the footer section has no title.
pub const DEFAULT_FOOTER_LABEL: &str = "Brand";
/// Action label on every pricing card.
pub const PRICING_ACTION_LABEL: &str = "Get Started";
/// Label inside the about section's media area.
pub const MEDIA_PLACEHOLDER_LABEL: &str = "Image Placeholder";
/// Submit label of the contact form scaffold.
pub const CONTACT_SUBMIT_LABEL: &str = "Send Message";
/// Social links in the footer band.
pub const FOOTER_LINKS: [&str; 3] = ["Twitter", "LinkedIn", "GitHub"];

/// A call-to-action button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    /// Button text.
    pub label: String,
    /// Background color (always the theme accent).
    pub color: String,
}

/// One rendered page region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    /// Element id, `section-{index}` where index is the manifest position.
    pub anchor: String,
    /// Type-specific contents.
    pub body: BlockBody,
}

/// Per-type block contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BlockBody {
    /// From a `hero` section.
    Hero(HeroBlock),
    /// From a `features` section.
    Features(FeaturesBlock),
    /// From an `about` section.
    About(AboutBlock),
    /// From a `pricing` section.
    Pricing(PricingBlock),
    /// From a `testimonials` section.
    Testimonials(TestimonialsBlock),
    /// From a `contact` section.
    Contact(ContactBlock),
    /// From a `footer` section.
    Footer(FooterBlock),
}

impl BlockBody {
    /// Section type name this block was produced from.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Hero(_) => "hero",
            Self::Features(_) => "features",
            Self::About(_) => "about",
            Self::Pricing(_) => "pricing",
            Self::Testimonials(_) => "testimonials",
            Self::Contact(_) => "contact",
            Self::Footer(_) => "footer",
        }
    }
}

/// Full-bleed banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroBlock {
    /// Headline.
    pub title: Option<String>,
    /// Line under the headline.
    pub subtitle: Option<String>,
    /// Present only when the section has `ctaText`.
    pub cta: Option<Button>,
}

/// Feature card grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeaturesBlock {
    /// Section heading.
    pub title: Option<String>,
    /// One card per item, in item order.
    pub cards: Vec<FeatureCard>,
}

/// One feature in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureCard {
    /// Item icon or [`DEFAULT_FEATURE_ICON`].
    pub icon: String,
    /// Icon badge background.
    pub badge_color: String,
    /// Feature name.
    pub title: Option<String>,
    /// Feature text.
    pub description: Option<String>,
}

/// Two-column text plus media placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutBlock {
    /// Section heading.
    pub title: Option<String>,
    /// Body text.
    pub content: Option<String>,
    /// Text inside the media placeholder.
    pub media_label: String,
}

/// Price cards, one per item, in item order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingBlock {
    /// Section heading.
    pub title: Option<String>,
    /// One card per tier.
    pub cards: Vec<PriceCard>,
}

/// One price tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceCard {
    /// Tier name.
    pub title: Option<String>,
    /// Price text, shown as given.
    pub price: Option<String>,
    /// Price text color.
    pub price_color: String,
    /// Tier description.
    pub description: Option<String>,
    /// The [`PRICING_ACTION_LABEL`] button.
    pub action: Button,
}

/// Quote cards, one per item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestimonialsBlock {
    /// Section heading.
    pub title: Option<String>,
    /// One card per item.
    pub cards: Vec<QuoteCard>,
}

/// One testimonial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteCard {
    /// Quote text, taken from the item description.
    pub quote: Option<String>,
    /// Who said it.
    pub author: Option<String>,
    /// Their role or company.
    pub role: Option<String>,
}

/// Static contact form. It has no submission target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactBlock {
    /// Section heading.
    pub title: Option<String>,
    /// Line under the heading.
    pub subtitle: Option<String>,
    /// Name, email and message fields.
    pub fields: Vec<FormField>,
    /// The [`CONTACT_SUBMIT_LABEL`] button.
    pub submit: Button,
}

/// Input control of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Single-line text.
    Text,
    /// Email address.
    Email,
    /// Multi-line text.
    TextArea,
}

/// One form control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    /// Control type.
    pub kind: FieldKind,
    /// Placeholder text.
    pub placeholder: String,
}

/// Closing band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterBlock {
    /// Section title or [`DEFAULT_FOOTER_LABEL`].
    pub label: String,
    /// `© {year} All rights reserved.`
    pub copyright: String,
    /// [`FOOTER_LINKS`] labels.
    pub links: Vec<String>,
}

/// Navigation bar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Section type name.
    pub label: String,
    /// `#section-{index}`.
    pub href: String,
}
