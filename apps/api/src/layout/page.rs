//! A4 page geometry used by the preview and the print stylesheet.
//!
//! The browser lays the CV out on a 210mm × 297mm box. At the CSS reference
//! resolution of 96 px/in that box is 793.7 × 1122.5 px, rounded to 794 × 1123.

use serde::{Deserialize, Serialize};

use crate::models::theme::TextScale;

pub const A4_WIDTH_MM: u32 = 210;
pub const A4_HEIGHT_MM: u32 = 297;
pub const A4_WIDTH_PX: f64 = 794.0;
pub const A4_HEIGHT_PX: f64 = 1123.0;

/// Font size of body text before the theme's text scale is applied.
pub const BASE_FONT_SIZE_PX: f64 = 14.0;
pub const BASE_LINE_HEIGHT: f64 = 1.5;

/// Physical and pixel size of the rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width_mm: u32,
    pub height_mm: u32,
    pub width_px: f64,
    pub height_px: f64,
}

pub fn a4() -> PageGeometry {
    PageGeometry {
        width_mm: A4_WIDTH_MM,
        height_mm: A4_HEIGHT_MM,
        width_px: A4_WIDTH_PX,
        height_px: A4_HEIGHT_PX,
    }
}

/// Body font size in px for the given text scale.
pub fn font_size_px(scale: TextScale) -> f64 {
    BASE_FONT_SIZE_PX * scale.value()
}
