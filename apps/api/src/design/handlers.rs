//! Axum route handlers for the design tab.

use axum::{extract::State, Json};

use crate::design::options::{design_options, DesignOptions};
use crate::design::update::{update_theme, ThemePatch};
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::theme::ThemeConfig;
use crate::state::AppState;

/// GET /api/v1/design/options
pub async fn handle_design_options() -> Json<DesignOptions> {
    Json(design_options())
}

/// PATCH /api/v1/design/theme
pub async fn handle_update_theme(
    State(state): State<AppState>,
    AppJson(patch): AppJson<ThemePatch>,
) -> Result<Json<ThemeConfig>, AppError> {
    let mut doc = state.document.write().await;
    let theme = update_theme(&mut doc, &patch)?;
    Ok(Json(theme))
}
