use std::fmt::{self, Write};

use crate::editor::skills::split_skills;
use crate::models::cv::CvData;
use crate::models::theme::ThemeConfig;
use crate::render::escape::Escaped;
use crate::render::labels::Labels;
use crate::render::base_style;

/// Sidebar in the accent colour on the left, content column on the right.
pub fn render(
    out: &mut String,
    data: &CvData,
    theme: &ThemeConfig,
    labels: &Labels,
) -> fmt::Result {
    let p = &data.personal;
    let color = theme.color.as_str();
    let tint = theme.color.with_alpha(0x33);

    write!(out, r#"<div class="cv cv-modern" style="{}">"#, base_style(theme))?;

    // Sidebar
    write!(
        out,
        r#"<aside class="cv-modern__sidebar" style="background-color:{color}"><div class="cv-modern__identity">"#
    )?;
    match &p.photo {
        Some(photo) => write!(
            out,
            r#"<div class="cv-photo cv-modern__photo" style="background-image:url('{}')"></div>"#,
            Escaped(photo)
        )?,
        None => {
            let initial = p.initial().map(String::from).unwrap_or_default();
            write!(
                out,
                r#"<div class="cv-modern__initial">{}</div>"#,
                Escaped(&initial)
            )?
        }
    }
    write!(
        out,
        r#"<h1 class="cv-modern__name">{}</h1><p class="cv-modern__title">{}</p></div>"#,
        Escaped(&p.name),
        Escaped(&p.title)
    )?;
    write!(
        out,
        r#"<ul class="cv-modern__contacts"><li><span aria-hidden="true">&#9993;</span><span class="cv-break">{}</span></li><li><span aria-hidden="true">&#9742;</span>{}</li><li><span aria-hidden="true">&#9873;</span>{}</li></ul>"#,
        Escaped(&p.email),
        Escaped(&p.phone),
        Escaped(&p.location)
    )?;
    write!(
        out,
        r#"<div class="cv-modern__skills"><h3>{}</h3><div class="cv-chips">"#,
        labels.skills
    )?;
    for skill in split_skills(&data.skills) {
        write!(out, r#"<span class="cv-chip">{}</span>"#, Escaped(skill))?;
    }
    out.push_str("</div></div></aside>");

    // Main column
    let heading = |out: &mut String, text: &str| {
        write!(
            out,
            r#"<h3 class="cv-modern__heading" style="color:{color};border-color:{tint}">{text}</h3>"#
        )
    };

    out.push_str(r#"<main class="cv-modern__main"><section>"#);
    heading(out, labels.profile)?;
    write!(
        out,
        r#"<p class="cv-modern__summary">{}</p></section><section>"#,
        Escaped(&p.summary)
    )?;

    heading(out, labels.experience)?;
    for exp in &data.experience {
        write!(
            out,
            r#"<article class="cv-modern__job"><span class="cv-modern__dot" style="background-color:{color}"></span><div class="cv-modern__job-head"><h4>{}</h4><span class="cv-badge">{} - {}</span></div><div class="cv-modern__company" style="color:{color}">{}</div><p class="cv-small cv-pre-line" style="color:#4b5563">{}</p></article>"#,
            Escaped(&exp.role),
            Escaped(&exp.start),
            Escaped(&exp.end),
            Escaped(&exp.company),
            Escaped(&exp.description)
        )?;
    }
    out.push_str("</section><section>");

    heading(out, labels.training)?;
    for edu in &data.education {
        write!(
            out,
            r#"<div class="cv-modern__edu"><div class="cv-strong">{}</div><div class="cv-muted">{}, {}</div></div>"#,
            Escaped(&edu.degree),
            Escaped(&edu.school),
            Escaped(&edu.year)
        )?;
    }
    out.push_str("</section></main></div>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::labels::ITALIAN;

    fn render_sample(data: &CvData) -> String {
        let mut out = String::new();
        render(&mut out, data, &ThemeConfig::default(), &ITALIAN).unwrap();
        out
    }

    #[test]
    fn test_initial_shown_without_photo() {
        let html = render_sample(&CvData::sample());
        assert!(html.contains(r#"<div class="cv-modern__initial">M</div>"#));
        assert!(!html.contains("background-image"));
    }

    #[test]
    fn test_photo_replaces_initial() {
        let mut data = CvData::sample();
        data.personal.photo = Some("data:image/png;base64,AAAA".to_string());
        let html = render_sample(&data);
        assert!(html.contains("url('data:image/png;base64,AAAA')"));
        assert!(!html.contains("cv-modern__initial"));
    }

    #[test]
    fn test_sidebar_uses_accent_and_tint() {
        let html = render_sample(&CvData::sample());
        assert!(html.contains("background-color:#2563eb"));
        assert!(html.contains("border-color:#2563eb33"));
    }

    #[test]
    fn test_skills_rendered_as_chips() {
        let mut data = CvData::sample();
        data.skills = "Rust, , Tokio".to_string();
        let html = render_sample(&data);
        assert!(html.contains(r#"<span class="cv-chip">Rust</span><span class="cv-chip">Tokio</span>"#));
        assert_eq!(html.matches("cv-chip\"").count(), 2);
    }

    #[test]
    fn test_experience_dates_and_headings() {
        let html = render_sample(&CvData::sample());
        assert!(html.contains("2020 - Oggi"));
        assert!(html.contains(">Formazione</h3>"));
        assert!(html.contains("Università Bocconi, 2019"));
    }
}
