//! Text outline of a rendered page

use std::fmt::Write as _;

use colored::Colorize;
use docsite_core::{BlockBody, Page};

/// One line per block, with its main elements indented underneath.
pub fn outline(page: &Page) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", page.brand.bold());
    if !page.tagline.is_empty() {
        let _ = writeln!(out, "{}", page.tagline.dimmed());
    }
    let _ = writeln!(
        out,
        "theme: {} {} accent {} ({})",
        page.theme.primary,
        page.theme.secondary,
        page.theme.accent,
        page.theme.font_style.as_str()
    );

    let nav: Vec<&str> = page.nav.iter().map(|n| n.label.as_str()).collect();
    let _ = writeln!(
        out,
        "nav: {} [{}]",
        if nav.is_empty() {
            "-".to_string()
        } else {
            nav.join(" | ")
        },
        page.nav_button.label
    );
    out.push('\n');

    for block in &page.blocks {
        let _ = write!(
            out,
            "{} {}",
            format!("#{}", block.anchor).dimmed(),
            block.body.type_name().cyan().bold()
        );
        match &block.body {
            BlockBody::Hero(b) => {
                title(&mut out, b.title.as_deref());
                line(&mut out, "subtitle", b.subtitle.as_deref());
                if let Some(cta) = &b.cta {
                    let _ = writeln!(out, "    cta: [{}]", cta.label);
                }
            },
            BlockBody::Features(b) => {
                title(&mut out, b.title.as_deref());
                for card in &b.cards {
                    let _ = writeln!(
                        out,
                        "    {} {}",
                        card.icon,
                        card.title.as_deref().unwrap_or_default()
                    );
                }
            },
            BlockBody::About(b) => {
                title(&mut out, b.title.as_deref());
                line(&mut out, "content", b.content.as_deref());
            },
            BlockBody::Pricing(b) => {
                title(&mut out, b.title.as_deref());
                for card in &b.cards {
                    let _ = writeln!(
                        out,
                        "    {} {} [{}]",
                        card.title.as_deref().unwrap_or_default(),
                        card.price.as_deref().unwrap_or_default().green(),
                        card.action.label
                    );
                }
            },
            BlockBody::Testimonials(b) => {
                title(&mut out, b.title.as_deref());
                for card in &b.cards {
                    let _ = writeln!(
                        out,
                        "    \"{}\" - {}",
                        card.quote.as_deref().unwrap_or_default(),
                        card.author.as_deref().unwrap_or_default()
                    );
                }
            },
            BlockBody::Contact(b) => {
                title(&mut out, b.title.as_deref());
                line(&mut out, "subtitle", b.subtitle.as_deref());
                let _ = writeln!(out, "    form: {} fields [{}]", b.fields.len(), b.submit.label);
            },
            BlockBody::Footer(b) => {
                title(&mut out, Some(&b.label));
                let _ = writeln!(out, "    {}", b.copyright);
            },
        }
    }

    out
}

fn title(out: &mut String, title: Option<&str>) {
    match title {
        Some(t) => {
            let _ = writeln!(out, " {t}");
        },
        None => out.push('\n'),
    }
}

fn line(out: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        let _ = writeln!(out, "    {label}: {value}");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use docsite_core::Manifest;

    #[test]
    fn test_outline_lists_blocks_and_nav() {
        colored::control::set_override(false);
        let manifest = Manifest::from_json(
            r##"{
            "name": "Acme Robotics",
            "tagline": "Drones for Industry",
            "theme": {"primary": "#111", "secondary": "#222", "accent": "#f50", "fontStyle": "tech"},
            "sections": [
                {"type": "hero", "title": "Acme Robotics", "ctaText": "Get a Quote"},
                {"type": "pricing", "title": "Plans", "items": [
                    {"title": "Basic", "price": "$9/mo"},
                    {"title": "Pro", "price": "$29/mo"}
                ]},
                {"type": "mystery"},
                {"type": "footer"}
            ]
        }"##,
        )
        .unwrap();

        let text = outline(&Page::build(&manifest, 2026));

        assert!(text.contains("nav: pricing | mystery [Launch]"));
        assert!(text.contains("#section-0 hero Acme Robotics"));
        assert!(text.contains("cta: [Get a Quote]"));
        assert!(text.contains("Basic $9/mo [Get Started]"));
        assert!(text.contains("#section-3 footer Brand"));
        assert!(text.contains("© 2026 All rights reserved."));
        assert!(!text.contains("#section-2"));
    }
}
