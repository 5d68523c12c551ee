//! Per-type render rules.
//!
//! [`rule_for`] is the dispatch table. Matching on [`SectionType`] keeps it
//! exhaustive: a new tag will not compile until it is given a rule or mapped
//! to `None`.

use crate::types::{Item, Section, SectionType, Theme};

use super::blocks::{
    AboutBlock, BlockBody, Button, CONTACT_SUBMIT_LABEL, ContactBlock, DEFAULT_FEATURE_ICON,
    DEFAULT_FOOTER_LABEL, FOOTER_LINKS, FeatureCard, FeaturesBlock, FieldKind, FooterBlock,
    FormField, HeroBlock, MEDIA_PLACEHOLDER_LABEL, PRICING_ACTION_LABEL, PriceCard, PricingBlock,
    QuoteCard, TestimonialsBlock,
};

/// Inputs shared by every rule.
pub struct RenderContext<'a> {
    /// Theme of the manifest being rendered.
    pub theme: &'a Theme,
    /// Copyright year for the footer.
    pub year: i32,
}

impl RenderContext<'_> {
    fn button(&self, label: &str) -> Button {
        Button {
            label: label.to_string(),
            color: self.theme.accent.clone(),
        }
    }
}

/// Projection of one section into its block.
pub type Rule = fn(&Section, &RenderContext<'_>) -> BlockBody;

/// Look up the rule for a section type. Unknown tags have none.
pub fn rule_for(kind: &SectionType) -> Option<Rule> {
    match kind {
        SectionType::Hero => Some(hero),
        SectionType::Features => Some(features),
        SectionType::About => Some(about),
        SectionType::Pricing => Some(pricing),
        SectionType::Testimonials => Some(testimonials),
        SectionType::Contact => Some(contact),
        SectionType::Footer => Some(footer),
        SectionType::Unknown(_) => None,
    }
}

// Only a missing or zero-length string falls back; whitespace is content.
fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

fn hero(section: &Section, ctx: &RenderContext<'_>) -> BlockBody {
    BlockBody::Hero(HeroBlock {
        title: section.title.clone(),
        subtitle: section.subtitle.clone(),
        cta: non_empty(section.cta_text.as_ref()).map(|label| ctx.button(label)),
    })
}

fn features(section: &Section, ctx: &RenderContext<'_>) -> BlockBody {
    let cards = section
        .items()
        .iter()
        .map(|item: &Item| FeatureCard {
            icon: non_empty(item.icon.as_ref())
                .unwrap_or(DEFAULT_FEATURE_ICON)
                .to_string(),
            badge_color: ctx.theme.accent.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
        })
        .collect();

    BlockBody::Features(FeaturesBlock {
        title: section.title.clone(),
        cards,
    })
}

fn about(section: &Section, _ctx: &RenderContext<'_>) -> BlockBody {
    BlockBody::About(AboutBlock {
        title: section.title.clone(),
        content: section.content.clone(),
        media_label: MEDIA_PLACEHOLDER_LABEL.to_string(),
    })
}

fn pricing(section: &Section, ctx: &RenderContext<'_>) -> BlockBody {
    let cards = section
        .items()
        .iter()
        .map(|item| PriceCard {
            title: item.title.clone(),
            price: item.price.clone(),
            price_color: ctx.theme.accent.clone(),
            description: item.description.clone(),
            action: ctx.button(PRICING_ACTION_LABEL),
        })
        .collect();

    BlockBody::Pricing(PricingBlock {
        title: section.title.clone(),
        cards,
    })
}

fn testimonials(section: &Section, _ctx: &RenderContext<'_>) -> BlockBody {
    let cards = section
        .items()
        .iter()
        .map(|item| QuoteCard {
            quote: item.description.clone(),
            author: item.author.clone(),
            role: item.role.clone(),
        })
        .collect();

    BlockBody::Testimonials(TestimonialsBlock {
        title: section.title.clone(),
        cards,
    })
}

fn contact(section: &Section, ctx: &RenderContext<'_>) -> BlockBody {
    let fields = vec![
        FormField {
            kind: FieldKind::Text,
            placeholder: "Your Name".to_string(),
        },
        FormField {
            kind: FieldKind::Email,
            placeholder: "Email Address".to_string(),
        },
        FormField {
            kind: FieldKind::TextArea,
            placeholder: "How can we help?".to_string(),
        },
    ];

    BlockBody::Contact(ContactBlock {
        title: section.title.clone(),
        subtitle: section.subtitle.clone(),
        fields,
        submit: ctx.button(CONTACT_SUBMIT_LABEL),
    })
}

fn footer(section: &Section, ctx: &RenderContext<'_>) -> BlockBody {
    BlockBody::Footer(FooterBlock {
        label: non_empty(section.title.as_ref())
            .unwrap_or(DEFAULT_FOOTER_LABEL)
            .to_string(),
        copyright: format!("© {} All rights reserved.", ctx.year),
        links: FOOTER_LINKS.iter().map(|l| (*l).to_string()).collect(),
    })
}
