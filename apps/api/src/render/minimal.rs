use std::fmt::{self, Write};

use crate::editor::skills::split_skills;
use crate::models::cv::CvData;
use crate::models::theme::ThemeConfig;
use crate::render::base_style;
use crate::render::escape::Escaped;
use crate::render::labels::Labels;

/// Two columns (2:1): story on the left, facts on the right.
pub fn render(
    out: &mut String,
    data: &CvData,
    theme: &ThemeConfig,
    labels: &Labels,
) -> fmt::Result {
    let p = &data.personal;
    let color = theme.color.as_str();

    write!(out, r#"<div class="cv cv-minimal" style="{}">"#, base_style(theme))?;

    // Left column
    write!(
        out,
        r#"<div><h1 class="cv-minimal__name">{}</h1><p class="cv-minimal__title" style="color:{color}">{}</p>"#,
        Escaped(&p.name),
        Escaped(&p.title)
    )?;
    write!(
        out,
        r#"<div class="cv-minimal__summary" style="border-color:{color}"><p>{}</p></div>"#,
        Escaped(&p.summary)
    )?;
    write!(
        out,
        r#"<section><h3 class="cv-minimal__heading">{}</h3>"#,
        labels.experience
    )?;
    for exp in &data.experience {
        write!(
            out,
            r#"<div class="cv-minimal__job"><h4>{}</h4><div class="cv-minimal__company" style="color:{color}">{}</div><p class="cv-small" style="color:#4b5563">{}</p></div>"#,
            Escaped(&exp.role),
            Escaped(&exp.company),
            Escaped(&exp.description)
        )?;
    }
    out.push_str("</section></div>");

    // Right column
    out.push_str(r#"<div class="cv-minimal__side">"#);
    if let Some(photo) = &p.photo {
        write!(
            out,
            r#"<div class="cv-photo cv-minimal__photo" style="background-image:url('{}')"></div>"#,
            Escaped(photo)
        )?;
    }
    write!(
        out,
        r#"<div class="cv-minimal__block cv-minimal__contacts"><h3 class="cv-minimal__side-heading">{}</h3><div class="cv-break">{}</div><div>{}</div><div>{}</div></div>"#,
        labels.contacts,
        Escaped(&p.email),
        Escaped(&p.phone),
        Escaped(&p.location)
    )?;

    write!(
        out,
        r#"<div class="cv-minimal__block"><h3 class="cv-minimal__side-heading">{}</h3>"#,
        labels.education
    )?;
    for edu in &data.education {
        write!(
            out,
            r#"<div class="cv-minimal__edu"><div class="cv-strong">{}</div><div class="cv-faint" style="color:#6b7280">{}</div><div class="cv-faint">{}</div></div>"#,
            Escaped(&edu.degree),
            Escaped(&edu.school),
            Escaped(&edu.year)
        )?;
    }
    out.push_str("</div>");

    write!(
        out,
        r#"<div><h3 class="cv-minimal__side-heading">{}</h3><div class="cv-chips">"#,
        labels.skills_short
    )?;
    for skill in split_skills(&data.skills) {
        write!(out, r#"<span class="cv-chip">{}</span>"#, Escaped(skill))?;
    }
    out.push_str("</div></div></div></div>");
    Ok(())
}
