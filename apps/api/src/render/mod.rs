// HTML rendering of the CV.
// Three fixed templates share one stylesheet; theme values are inlined.

pub mod classic;
pub mod document;
pub mod escape;
pub mod handlers;
pub mod labels;
pub mod minimal;
pub mod modern;
pub mod stylesheet;

use std::fmt;

use crate::layout::page::{font_size_px, BASE_LINE_HEIGHT};
use crate::models::document::CvDocument;
use crate::models::theme::{TemplateVariant, ThemeConfig};
use crate::render::labels::Labels;

/// Inline style on the template root: font family, scaled size, text colour.
pub(crate) fn base_style(theme: &ThemeConfig) -> String {
    format!(
        "font-family:{};font-size:{}px;line-height:{};color:#333",
        theme.font.css_family(),
        format_px(font_size_px(theme.scale)),
        BASE_LINE_HEIGHT
    )
}

/// Formats a pixel value with at most two decimals and no trailing zeros.
fn format_px(value: f64) -> String {
    let s = format!("{value:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Renders the CV body with the document's selected template.
pub fn render_cv(doc: &CvDocument, labels: &Labels) -> Result<String, fmt::Error> {
    let mut out = String::with_capacity(8 * 1024);
    match doc.theme.template {
        TemplateVariant::Modern => modern::render(&mut out, &doc.data, &doc.theme, labels)?,
        TemplateVariant::Classic => classic::render(&mut out, &doc.data, &doc.theme, labels)?,
        TemplateVariant::Minimal => minimal::render(&mut out, &doc.data, &doc.theme, labels)?,
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::theme::{FontChoice, TextScale};
    use crate::render::labels::ITALIAN;

    #[test]
    fn test_base_style_scales_font() {
        let theme = ThemeConfig {
            font: FontChoice::Mono,
            scale: TextScale::new(1.1).unwrap(),
            ..ThemeConfig::default()
        };
        assert_eq!(
            base_style(&theme),
            "font-family:'Roboto Mono', monospace;font-size:15.4px;line-height:1.5;color:#333"
        );
    }

    #[test]
    fn test_format_px() {
        assert_eq!(format_px(14.0), "14");
        assert_eq!(format_px(11.2), "11.2");
        assert_eq!(format_px(12.25), "12.25");
    }

    #[test]
    fn test_template_switch_changes_markup_only() {
        let mut doc = CvDocument::new();
        let data_before = doc.data.clone();
        let mut seen = Vec::new();
        for variant in TemplateVariant::ALL {
            doc.theme.template = variant;
            let html = render_cv(&doc, &ITALIAN).unwrap();
            assert!(html.contains(&format!("cv-{}", variant.key())));
            assert!(html.contains("Mario Rossi"));
            seen.push(html);
        }
        assert_ne!(seen[0], seen[1]);
        assert_ne!(seen[1], seen[2]);
        assert_eq!(doc.data, data_before);
    }

    #[test]
    fn test_user_text_is_escaped_in_every_template() {
        let mut doc = CvDocument::new();
        doc.data.personal.name = "<script>alert(1)</script>".to_string();
        doc.data.experience[0].description = "a & b".to_string();
        for variant in TemplateVariant::ALL {
            doc.theme.template = variant;
            let html = render_cv(&doc, &ITALIAN).unwrap();
            assert!(!html.contains("<script>"), "{variant:?} leaked markup");
            assert!(html.contains("&lt;script&gt;"));
            assert!(html.contains("a &amp; b"));
        }
    }

    #[test]
    fn test_empty_fields_render_empty() {
        let mut doc = CvDocument::new();
        doc.data.personal.email.clear();
        doc.data.experience.clear();
        doc.data.education.clear();
        doc.data.skills.clear();
        for variant in TemplateVariant::ALL {
            doc.theme.template = variant;
            assert!(render_cv(&doc, &ITALIAN).is_ok());
        }
    }
}
