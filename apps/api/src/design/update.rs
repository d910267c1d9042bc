use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::document::CvDocument;
use crate::models::theme::{AccentColor, FontChoice, TemplateVariant, TextScale, ThemeConfig};

/// Partial theme update; absent fields keep their current value.
#[derive(Debug, Default, Deserialize)]
pub struct ThemePatch {
    pub template: Option<String>,
    pub color: Option<String>,
    pub font: Option<String>,
    pub scale: Option<f64>,
}

impl ThemePatch {
    /// Validates every present field against `current` and returns the merged
    /// theme. Nothing is applied unless all fields are valid.
    pub fn resolve(&self, current: &ThemeConfig) -> Result<ThemeConfig, AppError> {
        let mut next = current.clone();
        if let Some(raw) = &self.template {
            next.template = raw.parse::<TemplateVariant>().map_err(AppError::Validation)?;
        }
        if let Some(raw) = &self.color {
            next.color = raw.parse::<AccentColor>().map_err(AppError::Validation)?;
        }
        if let Some(raw) = &self.font {
            next.font = raw.parse::<FontChoice>().map_err(AppError::Validation)?;
        }
        if let Some(raw) = self.scale {
            next.scale = TextScale::new(raw).map_err(AppError::Validation)?;
        }
        Ok(next)
    }
}

pub fn update_theme(doc: &mut CvDocument, patch: &ThemePatch) -> Result<ThemeConfig, AppError> {
    let next = patch
        .resolve(&doc.theme)
        .inspect_err(|e| warn!("Rejected theme update: {e}"))?;
    if next != doc.theme {
        info!(
            template = next.template.key(),
            color = next.color.as_str(),
            font = next.font.key(),
            scale_percent = next.scale.percent(),
            "Theme updated"
        );
        doc.theme = next;
        doc.touch();
    }
    Ok(doc.theme.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_patch_keeps_other_fields() {
        let mut doc = CvDocument::new();
        let patch = ThemePatch {
            template: Some("classic".into()),
            ..ThemePatch::default()
        };
        let theme = update_theme(&mut doc, &patch).unwrap();
        assert_eq!(theme.template, TemplateVariant::Classic);
        assert_eq!(theme.color.as_str(), "#2563eb");
        assert_eq!(theme.font, FontChoice::Inter);
        assert_eq!(doc.revision, 1);
    }

    #[test]
    fn test_invalid_field_rejects_whole_patch() {
        let mut doc = CvDocument::new();
        let patch = ThemePatch {
            template: Some("minimal".into()),
            color: Some("not-a-colour".into()),
            ..ThemePatch::default()
        };
        assert!(matches!(
            update_theme(&mut doc, &patch),
            Err(AppError::Validation(_))
        ));
        assert_eq!(doc.theme, ThemeConfig::default());
        assert_eq!(doc.revision, 0);
    }

    #[test]
    fn test_scale_out_of_range_rejected() {
        let mut doc = CvDocument::new();
        let patch = ThemePatch {
            scale: Some(1.5),
            ..ThemePatch::default()
        };
        assert!(update_theme(&mut doc, &patch).is_err());
    }

    #[test]
    fn test_theme_change_leaves_data_alone() {
        let mut doc = CvDocument::new();
        let data = doc.data.clone();
        let patch = ThemePatch {
            template: Some("minimal".into()),
            color: Some("#D97706".into()),
            font: Some("poppins".into()),
            scale: Some(0.9),
        };
        let theme = update_theme(&mut doc, &patch).unwrap();
        assert_eq!(theme.color.as_str(), "#d97706");
        assert_eq!(theme.scale.percent(), 90);
        assert_eq!(doc.data, data);
    }

    #[test]
    fn test_noop_patch_does_not_bump_revision() {
        let mut doc = CvDocument::new();
        update_theme(&mut doc, &ThemePatch::default()).unwrap();
        let same = ThemePatch {
            color: Some("#2563EB".into()),
            ..ThemePatch::default()
        };
        update_theme(&mut doc, &same).unwrap();
        assert_eq!(doc.revision, 0);
    }
}
