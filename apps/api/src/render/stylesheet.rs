//! Static CSS shared by the preview and print pages.
//!
//! Theme-dependent values (accent colour, font, text size) are emitted as
//! inline styles by the templates, so these rules never change at runtime.

use crate::layout::PageGeometry;

/// Rules for the CV body of all three templates.
pub const CV_CSS: &str = r#"
*, *::before, *::after { box-sizing: border-box; }
.cv { height: 100%; min-height: inherit; background: #fff; }
.cv h1, .cv h3, .cv h4, .cv p { margin: 0; }
.cv section { margin-bottom: 2em; }
.cv-strong { font-weight: 700; color: #1f2937; }
.cv-muted { font-size: 0.875em; color: #6b7280; }
.cv-faint { font-size: 0.75em; color: #9ca3af; }
.cv-small { font-size: 0.875em; }
.cv-pre-line { white-space: pre-line; }
.cv-break { overflow-wrap: anywhere; }
.cv-photo { background-size: cover; background-position: center; }
.cv-chips { display: flex; flex-wrap: wrap; gap: 0.5em; }
.cv-chip { font-size: 0.75em; padding: 0.25em 0.6em; }

.cv-modern { display: flex; }
.cv-modern__sidebar { width: 35%; color: #fff; padding: 2.25em; display: flex; flex-direction: column; }
.cv-modern__identity { text-align: center; margin-bottom: 2.25em; }
.cv-modern__photo { width: 8rem; height: 8rem; margin: 0 auto 1rem; border-radius: 50%; border: 4px solid rgba(255,255,255,0.2); }
.cv-modern__initial { width: 6rem; height: 6rem; margin: 0 auto 1rem; border-radius: 50%; background: rgba(255,255,255,0.2); display: flex; align-items: center; justify-content: center; font-size: 1.875rem; font-weight: 700; }
.cv-modern__name { font-size: 1.6em; font-weight: 700; line-height: 1.2; margin-bottom: 0.5rem; overflow-wrap: anywhere; }
.cv-modern__title { opacity: 0.9; font-size: 0.875em; text-transform: uppercase; letter-spacing: 0.05em; }
.cv-modern__contacts { list-style: none; padding: 0; margin: 0 0 2.25em; font-size: 0.875em; opacity: 0.9; }
.cv-modern__contacts li { display: flex; align-items: center; gap: 0.75em; margin-bottom: 0.75em; }
.cv-modern__skills { margin-top: auto; }
.cv-modern__skills h3 { text-transform: uppercase; font-size: 0.75em; font-weight: 700; letter-spacing: 0.1em; border-bottom: 1px solid rgba(255,255,255,0.2); padding-bottom: 0.5em; margin-bottom: 0.75em; }
.cv-modern__skills .cv-chip { background: rgba(255,255,255,0.1); border-radius: 4px; }
.cv-modern__main { width: 65%; padding: 2.75em; background: #fff; }
.cv-modern__heading { text-transform: uppercase; font-size: 0.875em; font-weight: 700; letter-spacing: 0.1em; border-bottom: 2px solid; padding-bottom: 0.5em; margin-bottom: 1.25em; }
.cv-modern__summary { color: #4b5563; text-align: justify; }
.cv-modern__job { position: relative; padding-left: 1em; border-left: 2px solid #f3f4f6; margin-bottom: 1.5em; }
.cv-modern__dot { position: absolute; left: -5px; top: 0.4em; width: 8px; height: 8px; border-radius: 50%; }
.cv-modern__job-head { display: flex; justify-content: space-between; align-items: baseline; gap: 1em; margin-bottom: 0.25em; }
.cv-modern__job-head h4 { font-size: 1.2em; font-weight: 700; color: #1f2937; }
.cv-badge { font-size: 0.75em; font-weight: 700; background: #f3f4f6; color: #4b5563; padding: 0.25em 0.5em; border-radius: 4px; white-space: nowrap; }
.cv-modern__company { font-size: 0.875em; font-weight: 700; margin-bottom: 0.5em; }
.cv-modern__edu { margin-bottom: 1em; }

.cv-classic { padding: 3.4em; }
.cv-classic__header { text-align: center; border-bottom: 2px solid #333; padding-bottom: 2.25em; margin-bottom: 2.25em; }
.cv-classic__photo { width: 6rem; height: 6rem; margin: 0 auto 1rem; border-radius: 50%; }
.cv-classic__name { font-size: 2.5em; font-weight: 700; text-transform: uppercase; letter-spacing: 0.025em; color: #111827; margin-bottom: 0.25em; }
.cv-classic__title { font-size: 1.4em; font-weight: 500; margin-bottom: 0.75em; }
.cv-classic__contacts { display: flex; justify-content: center; flex-wrap: wrap; gap: 1em; font-size: 0.875em; color: #4b5563; }
.cv-classic__heading { text-transform: uppercase; font-weight: 700; font-size: 1.25em; border-bottom: 1px solid #eee; padding-bottom: 0.25em; margin-bottom: 1em; }
.cv-classic__summary { color: #374151; }
.cv-classic__job { display: grid; grid-template-columns: 1fr 3fr; gap: 1.5em; margin-bottom: 1.5em; }
.cv-classic__dates { text-align: right; font-size: 0.875em; font-weight: 700; color: #6b7280; padding-top: 0.25em; }
.cv-classic__job h4 { font-size: 1.2em; font-weight: 700; color: #111827; }
.cv-classic__company { font-size: 0.875em; font-style: italic; margin-bottom: 0.5em; }
.cv-classic__columns { display: grid; grid-template-columns: 1fr 1fr; gap: 2.25em; }
.cv-classic__edu { margin-bottom: 1em; }

.cv-minimal { padding: 3.4em; display: grid; grid-template-columns: 2fr 1fr; gap: 3.4em; }
.cv-minimal__name { font-size: 3.4em; font-weight: 300; color: #111827; line-height: 1; margin-bottom: 0.15em; }
.cv-minimal__title { font-size: 1.25em; text-transform: uppercase; letter-spacing: 0.1em; font-weight: 700; margin-bottom: 2.25em; }
.cv-minimal__summary { padding-left: 1.5em; border-left: 4px solid; margin-bottom: 2.25em; color: #4b5563; font-style: italic; }
.cv-minimal__heading { font-size: 0.875em; font-weight: 700; text-transform: uppercase; color: #9ca3af; letter-spacing: 0.1em; margin-bottom: 1.5em; }
.cv-minimal__job { margin-bottom: 2em; }
.cv-minimal__job h4 { font-size: 1.4em; font-weight: 700; color: #1f2937; }
.cv-minimal__company { font-size: 0.875em; font-weight: 700; margin: 0.25em 0 0.5em; }
.cv-minimal__side { text-align: right; padding-top: 0.5em; }
.cv-minimal__photo { width: 8rem; height: 8rem; margin: 0 0 2em auto; filter: grayscale(100%); }
.cv-minimal__side-heading { font-size: 0.75em; font-weight: 700; text-transform: uppercase; color: #9ca3af; letter-spacing: 0.1em; border-bottom: 1px solid #e5e7eb; padding-bottom: 0.5em; margin-bottom: 1em; }
.cv-minimal__block { margin-bottom: 2.25em; }
.cv-minimal__contacts { font-size: 0.875em; }
.cv-minimal__contacts > div { font-weight: 500; margin-bottom: 0.5em; }
.cv-minimal__edu { margin-bottom: 1em; }
.cv-minimal .cv-chips { justify-content: flex-end; }
.cv-minimal .cv-chip { border: 1px solid #d1d5db; color: #4b5563; }
"#;

/// Chrome around the page in the interactive preview.
pub const PREVIEW_CSS: &str = r#"
body.preview { margin: 0; background: #334155; display: flex; justify-content: center; align-items: flex-start; padding: 2rem 20px; overflow-x: hidden; }
.preview-zoom { position: fixed; top: 1rem; right: 1rem; background: rgba(0,0,0,0.6); color: #fff; font: 12px sans-serif; padding: 0.4rem 0.75rem; border-radius: 999px; pointer-events: none; z-index: 20; }
.cv-page { background: #fff; box-shadow: 0 25px 50px -12px rgba(0,0,0,0.25); transform-origin: top center; transition: transform 0.2s; }
"#;

/// Page box and print overrides shared by both views.
pub fn page_css(page: &PageGeometry) -> String {
    format!(
        r#"
@page {{ size: {w}mm {h}mm; margin: 0; }}
.cv-page {{ width: {w}mm; min-height: {h}mm; }}
@media print {{
  body {{ background: #fff !important; padding: 0 !important; display: block !important; }}
  .preview-zoom {{ display: none !important; }}
  .cv-page {{ transform: none !important; margin: 0 !important; box-shadow: none !important; width: 100% !important; min-height: 100vh !important; }}
  .cv {{ -webkit-print-color-adjust: exact; print-color-adjust: exact; }}
}}
"#,
        w = page.width_mm,
        h = page.height_mm,
    )
}
