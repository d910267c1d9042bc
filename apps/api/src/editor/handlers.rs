//! Axum route handlers for the content tab.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::editor::operations;
use crate::editor::photo::encode_photo;
use crate::editor::skills::split_skills;
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::cv::{
    EducationEntry, EducationField, ExperienceEntry, ExperienceField, PersonalField, PersonalInfo,
};
use crate::models::document::CvDocument;
use crate::state::AppState;

/// Multipart field carrying the uploaded picture.
const PHOTO_FIELD: &str = "photo";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FieldUpdate<F> {
    pub field: F,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct SkillsUpdate {
    pub skills: String,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub skills: String,
    pub items: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PhotoResponse {
    pub content_type: String,
    pub size_bytes: usize,
}

#[derive(Debug, Deserialize)]
pub struct ResetRequest {
    #[serde(default)]
    pub confirm: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/cv
pub async fn handle_get_document(State(state): State<AppState>) -> Json<CvDocument> {
    Json(state.document.read().await.clone())
}

/// PATCH /api/v1/cv/personal
pub async fn handle_update_personal(
    State(state): State<AppState>,
    AppJson(req): AppJson<FieldUpdate<PersonalField>>,
) -> Json<PersonalInfo> {
    let mut doc = state.document.write().await;
    operations::update_personal(&mut doc, req.field, req.value);
    Json(doc.data.personal.clone())
}

/// POST /api/v1/cv/photo
pub async fn handle_upload_photo(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<PhotoResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        if field.name() != Some(PHOTO_FIELD) {
            continue;
        }
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        let data_url = encode_photo(
            content_type.as_deref(),
            &bytes,
            state.config.max_photo_bytes,
        )
        .inspect_err(|e| warn!("Rejected photo upload: {e}"))?;

        let mime = data_url
            .trim_start_matches("data:")
            .split(';')
            .next()
            .unwrap_or_default()
            .to_string();

        let mut doc = state.document.write().await;
        operations::set_photo(&mut doc, data_url);
        return Ok(Json(PhotoResponse {
            content_type: mime,
            size_bytes: bytes.len(),
        }));
    }

    Err(AppError::Validation(format!(
        "Multipart field '{PHOTO_FIELD}' is missing"
    )))
}

/// DELETE /api/v1/cv/photo
pub async fn handle_remove_photo(State(state): State<AppState>) -> StatusCode {
    operations::clear_photo(&mut *state.document.write().await);
    StatusCode::NO_CONTENT
}

/// POST /api/v1/cv/experience
pub async fn handle_add_experience(
    State(state): State<AppState>,
) -> (StatusCode, Json<ExperienceEntry>) {
    let mut doc = state.document.write().await;
    let entry = operations::add_experience(&mut doc, state.config.locale);
    (StatusCode::CREATED, Json(entry))
}

/// PATCH /api/v1/cv/experience/:id
pub async fn handle_update_experience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(req): AppJson<FieldUpdate<ExperienceField>>,
) -> Result<Json<ExperienceEntry>, AppError> {
    let mut doc = state.document.write().await;
    let entry = operations::update_experience(&mut doc, id, req.field, req.value)?;
    Ok(Json(entry))
}

/// DELETE /api/v1/cv/experience/:id
pub async fn handle_remove_experience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    operations::remove_experience(&mut *state.document.write().await, id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/cv/education
pub async fn handle_add_education(
    State(state): State<AppState>,
) -> (StatusCode, Json<EducationEntry>) {
    let mut doc = state.document.write().await;
    let entry = operations::add_education(&mut doc, state.config.locale);
    (StatusCode::CREATED, Json(entry))
}

/// PATCH /api/v1/cv/education/:id
pub async fn handle_update_education(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(req): AppJson<FieldUpdate<EducationField>>,
) -> Result<Json<EducationEntry>, AppError> {
    let mut doc = state.document.write().await;
    let entry = operations::update_education(&mut doc, id, req.field, req.value)?;
    Ok(Json(entry))
}

/// DELETE /api/v1/cv/education/:id
pub async fn handle_remove_education(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    operations::remove_education(&mut *state.document.write().await, id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/cv/skills
pub async fn handle_set_skills(
    State(state): State<AppState>,
    AppJson(req): AppJson<SkillsUpdate>,
) -> Json<SkillsResponse> {
    let items = split_skills(&req.skills)
        .into_iter()
        .map(str::to_string)
        .collect();
    operations::set_skills(&mut *state.document.write().await, req.skills.clone());
    Json(SkillsResponse {
        skills: req.skills,
        items,
    })
}

/// POST /api/v1/cv/reset
pub async fn handle_reset(
    State(state): State<AppState>,
    AppJson(req): AppJson<ResetRequest>,
) -> Result<Json<CvDocument>, AppError> {
    let mut doc = state.document.write().await;
    operations::reset(&mut doc, req.confirm)?;
    Ok(Json(doc.clone()))
}
