//! Section renderer: manifest in, visual blocks out.
//!
//! Rendering is a pure projection. The same manifest and year always give the
//! same blocks; the year is used only for the footer copyright line.
//!
//! ## Policy
//!
//! - Sections render in manifest order, one block per recognized section
//! - Sections with an unrecognized type produce nothing; their siblings are
//!   unaffected and nothing is reported as an error
//! - Missing optional fields leave the dependent element out
//! - Items render in their given order; the index is the slot
//! - Every call to action uses the theme accent
//!
//! ## Example
//!
//! ```rust
//! use docsite_core::render::{render, navigation, BlockBody};
//! use docsite_core::Manifest;
//!
//! let manifest = Manifest::from_json(r##"{
//!   "name": "Acme", "tagline": "Drones",
//!   "theme": {"primary": "#111", "secondary": "#222", "accent": "#f50", "fontStyle": "tech"},
//!   "sections": [
//!     {"type": "hero", "title": "Acme", "ctaText": "Get a Quote"},
//!     {"type": "about", "title": "About", "content": "We fly."}
//!   ]
//! }"##)?;
//!
//! let blocks = render(&manifest, 2026);
//! assert_eq!(blocks.len(), 2);
//! assert!(matches!(blocks[0].body, BlockBody::Hero(_)));
//! assert_eq!(navigation(&manifest)[0].label, "about");
//! # Ok::<(), docsite_core::Error>(())
//! ```

mod blocks;
mod sections;

use chrono::Datelike;
use serde::Serialize;
use tracing::debug;

use crate::types::{Manifest, SectionType, Theme};

pub use blocks::{
    AboutBlock, Block, BlockBody, Button, CONTACT_SUBMIT_LABEL, ContactBlock,
    DEFAULT_FEATURE_ICON, DEFAULT_FOOTER_LABEL, FOOTER_LINKS, FeatureCard, FeaturesBlock,
    FieldKind, FooterBlock, FormField, HeroBlock, MEDIA_PLACEHOLDER_LABEL, NavLink,
    PRICING_ACTION_LABEL, PriceCard, PricingBlock, QuoteCard, TestimonialsBlock,
};
pub use sections::{RenderContext, Rule, rule_for};

/// Map every section of `manifest` to a block, in order.
#[must_use]
pub fn render(manifest: &Manifest, year: i32) -> Vec<Block> {
    let ctx = RenderContext {
        theme: &manifest.theme,
        year,
    };

    manifest
        .sections
        .iter()
        .enumerate()
        .filter_map(|(index, section)| {
            let Some(rule) = rule_for(&section.kind) else {
                debug!(index, tag = %section.kind, "Skipping section with unrecognized type");
                return None;
            };
            Some(Block {
                anchor: anchor(index),
                body: rule(section, &ctx),
            })
        })
        .collect()
}

/// Navigation entries: every section except hero and footer, labeled by tag.
///
/// Unknown sections are listed under their raw tag. They render no block, so
/// their link has no anchor to point at.
#[must_use]
pub fn navigation(manifest: &Manifest) -> Vec<NavLink> {
    manifest
        .sections
        .iter()
        .enumerate()
        .filter(|(_, s)| !matches!(s.kind, SectionType::Hero | SectionType::Footer))
        .map(|(index, s)| NavLink {
            label: s.kind.as_str().to_string(),
            href: if s.kind.is_known() {
                format!("#{}", anchor(index))
            } else {
                "#".to_string()
            },
        })
        .collect()
}

/// Current calendar year in local time.
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

fn anchor(index: usize) -> String {
    format!("section-{index}")
}

/// Everything needed to draw one site preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    /// Brand shown at the left of the navigation bar.
    pub brand: String,
    /// Manifest tagline, used as the page description.
    pub tagline: String,
    /// Site theme.
    pub theme: Theme,
    /// Navigation bar entries.
    pub nav: Vec<NavLink>,
    /// `Launch` when the tagline is non-empty, `Contact` otherwise.
    pub nav_button: Button,
    /// Body blocks in page order.
    pub blocks: Vec<Block>,
}

impl Page {
    /// Assemble the navigation bar and body blocks for `manifest`.
    #[must_use]
    pub fn build(manifest: &Manifest, year: i32) -> Self {
        let nav_label = if manifest.tagline.is_empty() {
            "Contact"
        } else {
            "Launch"
        };

        Self {
            brand: manifest.name.clone(),
            tagline: manifest.tagline.clone(),
            theme: manifest.theme.clone(),
            nav: navigation(manifest),
            nav_button: Button {
                label: nav_label.to_string(),
                color: manifest.theme.accent.clone(),
            },
            blocks: render(manifest, year),
        }
    }
}
