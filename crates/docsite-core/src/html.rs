//! Standalone HTML5 writer for a rendered [`Page`].
//!
//! The output is a single self-contained document: inline CSS, no scripts
//! beyond the print button, no external assets. The markup lives in
//! `templates/site.html`; askama escapes every piece of manifest text.

use askama::Template;

use crate::Result;
use crate::render::{BlockBody, FieldKind, Page};
use crate::types::FontStyle;

/// Label of the print toolbar button.
pub const PRINT_LABEL: &str = "Save as PDF";

/// CSS font stack for a font style.
#[must_use]
pub const fn font_stack(style: FontStyle) -> &'static str {
    match style {
        FontStyle::Modern => "'Inter', 'Helvetica Neue', Arial, sans-serif",
        FontStyle::Classic => "'Georgia', 'Times New Roman', serif",
        FontStyle::Playful => "'Nunito', 'Comic Sans MS', 'Trebuchet MS', sans-serif",
        FontStyle::Tech => "'JetBrains Mono', 'Fira Code', Menlo, monospace",
    }
}

#[derive(Template)]
#[template(path = "site.html")]
struct SiteTemplate<'a> {
    page: &'a Page,
    accent: String,
    primary: String,
    secondary: String,
    font: &'static str,
    print_label: &'static str,
}

impl<'a> SiteTemplate<'a> {
    fn new(page: &'a Page) -> Self {
        let theme = &page.theme;
        Self {
            page,
            accent: css_value(&theme.accent),
            primary: css_value(&theme.primary),
            secondary: css_value(&theme.secondary),
            font: font_stack(theme.font_style),
            print_label: PRINT_LABEL,
        }
    }

    #[allow(clippy::unused_self)]
    fn css(&self, value: &str) -> String {
        css_value(value)
    }
}

/// Render `page` as a complete HTML document.
///
/// # Errors
///
/// Returns [`crate::Error::Template`] if the template fails to render.
pub fn to_html(page: &Page) -> Result<String> {
    Ok(SiteTemplate::new(page).render()?)
}

// Theme colors are validated hex on the way in; this keeps a hand-built
// Page from breaking out of a style attribute or the style element.
fn css_value(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '#')
        .collect()
}
