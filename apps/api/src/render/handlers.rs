//! Axum route handlers for the preview and print views.

use axum::{
    extract::State,
    response::Html,
    Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::extract::AppQuery;
use crate::layout::{compute_preview_scale, PreviewScale};
use crate::render::document::{render_preview_page, render_print_document};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScaleQuery {
    pub container_width: f64,
    /// Overrides the configured horizontal padding.
    pub padding: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    pub container_width: Option<f64>,
    pub padding: Option<f64>,
}

/// GET /api/v1/preview/scale
pub async fn handle_preview_scale(
    State(state): State<AppState>,
    AppQuery(q): AppQuery<ScaleQuery>,
) -> Result<Json<PreviewScale>, AppError> {
    let padding = q.padding.unwrap_or(state.config.preview_padding_px);
    let scale = compute_preview_scale(q.container_width, padding, &state.page)?;
    Ok(Json(scale))
}

/// GET /preview
pub async fn handle_preview(
    State(state): State<AppState>,
    AppQuery(q): AppQuery<PreviewQuery>,
) -> Result<Html<String>, AppError> {
    let scale = q
        .container_width
        .map(|width| {
            let padding = q.padding.unwrap_or(state.config.preview_padding_px);
            compute_preview_scale(width, padding, &state.page)
        })
        .transpose()?;

    let doc = state.document.read().await;
    let html = render_preview_page(
        &doc,
        state.config.locale.labels(),
        &state.page,
        scale.as_ref(),
    )
    .map_err(|e| AppError::Internal(e.into()))?;
    debug!(
        revision = doc.revision,
        template = doc.theme.template.key(),
        zoom = scale.map(|s| s.zoom_percent),
        "Preview rendered"
    );
    Ok(Html(html))
}

/// GET /print
pub async fn handle_print(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let doc = state.document.read().await;
    let html = render_print_document(&doc, state.config.locale.labels(), &state.page)
        .map_err(|e| AppError::Internal(e.into()))?;
    debug!(revision = doc.revision, "Print document rendered");
    Ok(Html(html))
}
