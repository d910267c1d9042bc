use serde::Serialize;

use crate::models::theme::{
    FontChoice, TemplateVariant, PRESET_COLORS, TEXT_SCALE_MAX, TEXT_SCALE_MIN, TEXT_SCALE_STEP,
};

#[derive(Debug, Serialize)]
pub struct FontOption {
    pub key: &'static str,
    pub name: &'static str,
    pub family: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ScaleRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// Everything a client needs to draw the design tab.
#[derive(Debug, Serialize)]
pub struct DesignOptions {
    pub templates: Vec<&'static str>,
    pub fonts: Vec<FontOption>,
    /// Preset swatches; any other `#rrggbb` is accepted too.
    pub colors: Vec<&'static str>,
    pub scale: ScaleRange,
}

pub fn design_options() -> DesignOptions {
    DesignOptions {
        templates: TemplateVariant::ALL.iter().map(|t| t.key()).collect(),
        fonts: FontChoice::ALL
            .iter()
            .map(|f| FontOption {
                key: f.key(),
                name: f.display_name(),
                family: f.css_family(),
            })
            .collect(),
        colors: PRESET_COLORS.to_vec(),
        scale: ScaleRange {
            min: TEXT_SCALE_MIN,
            max: TEXT_SCALE_MAX,
            step: TEXT_SCALE_STEP,
        },
    }
}
