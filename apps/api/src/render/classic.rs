use std::fmt::{self, Write};

use crate::models::cv::CvData;
use crate::models::theme::ThemeConfig;
use crate::render::base_style;
use crate::render::escape::Escaped;
use crate::render::labels::Labels;

/// Centred header, dates in a left gutter, education and skills side by side.
///
/// Skills are printed as the raw text the user typed, not as chips.
pub fn render(
    out: &mut String,
    data: &CvData,
    theme: &ThemeConfig,
    labels: &Labels,
) -> fmt::Result {
    let p = &data.personal;
    let color = theme.color.as_str();

    write!(out, r#"<div class="cv cv-classic" style="{}">"#, base_style(theme))?;

    out.push_str(r#"<header class="cv-classic__header">"#);
    if let Some(photo) = &p.photo {
        write!(
            out,
            r#"<div class="cv-photo cv-classic__photo" style="background-image:url('{}')"></div>"#,
            Escaped(photo)
        )?;
    }
    write!(
        out,
        r#"<h1 class="cv-classic__name">{}</h1><p class="cv-classic__title" style="color:{color}">{}</p>"#,
        Escaped(&p.name),
        Escaped(&p.title)
    )?;
    write!(
        out,
        r#"<div class="cv-classic__contacts"><span>{}</span><span>&bull;</span><span>{}</span><span>&bull;</span><span>{}</span></div></header>"#,
        Escaped(&p.email),
        Escaped(&p.phone),
        Escaped(&p.location)
    )?;

    let heading = |out: &mut String, text: &str| {
        write!(
            out,
            r#"<h3 class="cv-classic__heading" style="color:{color}">{text}</h3>"#
        )
    };

    out.push_str("<section>");
    heading(out, labels.profile)?;
    write!(
        out,
        r#"<p class="cv-classic__summary">{}</p></section><section>"#,
        Escaped(&p.summary)
    )?;

    heading(out, labels.professional_experience)?;
    for exp in &data.experience {
        write!(
            out,
            r#"<div class="cv-classic__job"><div class="cv-classic__dates">{} - {}</div><div><h4>{}</h4><div class="cv-classic__company" style="color:{color}">{}</div><p class="cv-small" style="color:#374151">{}</p></div></div>"#,
            Escaped(&exp.start),
            Escaped(&exp.end),
            Escaped(&exp.role),
            Escaped(&exp.company),
            Escaped(&exp.description)
        )?;
    }
    out.push_str(r#"</section><div class="cv-classic__columns"><section>"#);

    heading(out, labels.education)?;
    for edu in &data.education {
        write!(
            out,
            r#"<div class="cv-classic__edu"><div class="cv-strong">{}</div><div class="cv-muted">{}, {}</div></div>"#,
            Escaped(&edu.degree),
            Escaped(&edu.school),
            Escaped(&edu.year)
        )?;
    }
    out.push_str("</section><section>");

    heading(out, labels.skills)?;
    write!(
        out,
        r#"<p class="cv-small" style="color:#374151">{}</p></section></div></div>"#,
        Escaped(&data.skills)
    )
}
