//! Fits the fixed-size A4 page into a preview container of arbitrary width.
//!
//! The page is shrunk with a CSS `transform: scale()` and never enlarged.
//! Because a transform does not change the layout box, the page keeps
//! occupying its full unscaled height; a negative bottom margin of
//! `height × (1 − scale)` removes that slack so the container scrolls
//! to the visual end of the page.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::layout::page::PageGeometry;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreviewScale {
    /// Factor in `[0, 1]` applied to the page.
    pub scale: f64,
    /// `scale` as a rounded percentage, for the zoom badge.
    pub zoom_percent: u32,
    /// Visual height of the scaled page in px.
    pub scaled_height_px: f64,
    /// Bottom margin (≤ 0) compensating for the untransformed layout height.
    pub margin_bottom_px: f64,
}

/// Computes the scale at which `page` fits a container `container_width_px`
/// wide, after removing `padding_px` of horizontal padding.
pub fn compute_preview_scale(
    container_width_px: f64,
    padding_px: f64,
    page: &PageGeometry,
) -> Result<PreviewScale, AppError> {
    if !container_width_px.is_finite() || !padding_px.is_finite() {
        return Err(AppError::Validation(
            "Container width and padding must be finite numbers".to_string(),
        ));
    }

    let available = container_width_px - padding_px;
    let scale = (available / page.width_px).clamp(0.0, 1.0);
    let scaled_height_px = page.height_px * scale;

    Ok(PreviewScale {
        scale,
        zoom_percent: (scale * 100.0).round() as u32,
        scaled_height_px,
        margin_bottom_px: -(page.height_px - scaled_height_px),
    })
}
