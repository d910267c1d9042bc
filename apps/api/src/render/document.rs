//! Standalone HTML pages wrapping the CV: the scaled live preview and the
//! print view that hands the page to the browser's print dialog.

use std::fmt::{self, Write};

use crate::layout::{PageGeometry, PreviewScale};
use crate::models::document::CvDocument;
use crate::render::escape::Escaped;
use crate::render::labels::Labels;
use crate::render::render_cv;
use crate::render::stylesheet::{page_css, CV_CSS, PREVIEW_CSS};

const PRINT_SCRIPT: &str = "window.addEventListener('load',function(){window.print();});";

fn write_head(
    out: &mut String,
    doc: &CvDocument,
    labels: &Labels,
    page: &PageGeometry,
    extra_css: &str,
) -> fmt::Result {
    let title = if doc.data.personal.name.trim().is_empty() {
        labels.document_title.to_string()
    } else {
        format!("{} - {}", doc.data.personal.name.trim(), labels.document_title)
    };
    write!(
        out,
        r#"<!DOCTYPE html><html lang="{lang}"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>{title}</title><link rel="stylesheet" href="https://fonts.googleapis.com/css2?family={font}&amp;display=swap"><style>{cv}{page}{extra}</style></head>"#,
        lang = labels.lang,
        title = Escaped(&title),
        font = doc.theme.font.web_font_query(),
        cv = CV_CSS,
        page = page_css(page),
        extra = extra_css,
    )
}

/// Live preview. With a `scale`, the page is shrunk to fit and the zoom
/// badge is shown; without one it is displayed at full size.
pub fn render_preview_page(
    doc: &CvDocument,
    labels: &Labels,
    page: &PageGeometry,
    scale: Option<&PreviewScale>,
) -> Result<String, fmt::Error> {
    let mut out = String::with_capacity(24 * 1024);
    write_head(&mut out, doc, labels, page, PREVIEW_CSS)?;
    out.push_str(r#"<body class="preview">"#);

    let style = match scale {
        Some(s) => {
            write!(
                out,
                r#"<div class="preview-zoom">&#128269; {}%</div>"#,
                s.zoom_percent
            )?;
            format!(
                r#" style="transform:scale({:.4});margin-bottom:{:.2}px""#,
                s.scale, s.margin_bottom_px
            )
        }
        None => String::new(),
    };

    write!(
        out,
        r#"<div class="cv-page"{style}>{}</div></body></html>"#,
        render_cv(doc, labels)?
    )?;
    Ok(out)
}

/// Print view: unscaled page, no chrome, opens the print dialog on load.
pub fn render_print_document(
    doc: &CvDocument,
    labels: &Labels,
    page: &PageGeometry,
) -> Result<String, fmt::Error> {
    let mut out = String::with_capacity(24 * 1024);
    write_head(&mut out, doc, labels, page, "body{margin:0;background:#fff}")?;
    write!(
        out,
        r#"<body class="print"><div class="cv-page">{}</div><script>{PRINT_SCRIPT}</script></body></html>"#,
        render_cv(doc, labels)?
    )?;
    Ok(out)
}
