//! Mutations behind the content tab.
//!
//! Every function takes the document by `&mut`, applies one change and bumps
//! the revision. A failed call leaves the document untouched.

use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::cv::{
    CvData, EducationEntry, EducationField, ExperienceEntry, ExperienceField, PersonalField,
};
use crate::models::document::CvDocument;
use crate::models::theme::ThemeConfig;
use crate::render::labels::Locale;

pub fn update_personal(doc: &mut CvDocument, field: PersonalField, value: String) {
    debug!(?field, "Updating personal field");
    *doc.data.personal.field_mut(field) = value;
    doc.touch();
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

/// Inserts a placeholder entry at the top of the list and returns it.
pub fn add_experience(doc: &mut CvDocument, locale: Locale) -> ExperienceEntry {
    let entry = ExperienceEntry::placeholder(locale);
    doc.data.experience.insert(0, entry.clone());
    doc.touch();
    info!(id = %entry.id, "Experience entry added");
    entry
}

pub fn update_experience(
    doc: &mut CvDocument,
    id: Uuid,
    field: ExperienceField,
    value: String,
) -> Result<ExperienceEntry, AppError> {
    let entry = doc
        .data
        .experience
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Experience entry {id} not found")))?;
    *entry.field_mut(field) = value;
    let updated = entry.clone();
    doc.touch();
    debug!(%id, ?field, "Experience entry updated");
    Ok(updated)
}

pub fn remove_experience(doc: &mut CvDocument, id: Uuid) -> Result<(), AppError> {
    let before = doc.data.experience.len();
    doc.data.experience.retain(|e| e.id != id);
    if doc.data.experience.len() == before {
        return Err(AppError::NotFound(format!("Experience entry {id} not found")));
    }
    doc.touch();
    info!(%id, "Experience entry removed");
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

pub fn add_education(doc: &mut CvDocument, locale: Locale) -> EducationEntry {
    let entry = EducationEntry::placeholder(locale);
    doc.data.education.insert(0, entry.clone());
    doc.touch();
    info!(id = %entry.id, "Education entry added");
    entry
}

pub fn update_education(
    doc: &mut CvDocument,
    id: Uuid,
    field: EducationField,
    value: String,
) -> Result<EducationEntry, AppError> {
    let entry = doc
        .data
        .education
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Education entry {id} not found")))?;
    *entry.field_mut(field) = value;
    let updated = entry.clone();
    doc.touch();
    debug!(%id, ?field, "Education entry updated");
    Ok(updated)
}

pub fn remove_education(doc: &mut CvDocument, id: Uuid) -> Result<(), AppError> {
    let before = doc.data.education.len();
    doc.data.education.retain(|e| e.id != id);
    if doc.data.education.len() == before {
        return Err(AppError::NotFound(format!("Education entry {id} not found")));
    }
    doc.touch();
    info!(%id, "Education entry removed");
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Skills, photo, reset
// ────────────────────────────────────────────────────────────────────────────

pub fn set_skills(doc: &mut CvDocument, skills: String) {
    doc.data.skills = skills;
    doc.touch();
}

pub fn set_photo(doc: &mut CvDocument, data_url: String) {
    doc.data.personal.photo = Some(data_url);
    doc.touch();
    info!("Profile photo updated");
}

pub fn clear_photo(doc: &mut CvDocument) {
    doc.data.personal.photo = None;
    doc.touch();
    info!("Profile photo removed");
}

/// Restores the sample data and the default theme.
///
/// Destructive, so the caller must pass explicit confirmation.
pub fn reset(doc: &mut CvDocument, confirmed: bool) -> Result<(), AppError> {
    if !confirmed {
        return Err(AppError::ConfirmationRequired(
            "Reset discards all content and design changes; resend with confirm=true"
                .to_string(),
        ));
    }
    doc.data = CvData::sample();
    doc.theme = ThemeConfig::default();
    doc.touch();
    info!("Document reset to sample data");
    Ok(())
}
