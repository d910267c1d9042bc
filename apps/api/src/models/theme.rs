//! Visual settings of the design tab: template, accent colour, font and text scale.
//!
//! Each setting is a validated newtype or closed enum, so a `ThemeConfig` that
//! exists is always renderable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Template variant
// ────────────────────────────────────────────────────────────────────────────

/// The three fixed layouts the same CV data can be rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateVariant {
    /// Coloured sidebar with photo, contacts and skills; content column on the right.
    Modern,
    /// Centred header, single column, dates in a left gutter.
    Classic,
    /// Light typography on a 2:1 grid, contacts and skills on the right.
    Minimal,
}

impl TemplateVariant {
    pub const ALL: [TemplateVariant; 3] = [
        TemplateVariant::Modern,
        TemplateVariant::Classic,
        TemplateVariant::Minimal,
    ];

    pub fn key(self) -> &'static str {
        match self {
            TemplateVariant::Modern => "modern",
            TemplateVariant::Classic => "classic",
            TemplateVariant::Minimal => "minimal",
        }
    }
}

impl FromStr for TemplateVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.key() == key)
            .ok_or_else(|| format!("Unknown template '{}'", s.trim()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Fonts
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontChoice {
    Inter,
    Poppins,
    Serif,
    Mono,
}

impl FontChoice {
    pub const ALL: [FontChoice; 4] = [
        FontChoice::Inter,
        FontChoice::Poppins,
        FontChoice::Serif,
        FontChoice::Mono,
    ];

    pub fn key(self) -> &'static str {
        match self {
            FontChoice::Inter => "inter",
            FontChoice::Poppins => "poppins",
            FontChoice::Serif => "serif",
            FontChoice::Mono => "mono",
        }
    }

    /// Label shown in the font picker.
    pub fn display_name(self) -> &'static str {
        match self {
            FontChoice::Inter => "Inter (Standard)",
            FontChoice::Poppins => "Poppins (Moderno)",
            FontChoice::Serif => "Merriweather (Elegante)",
            FontChoice::Mono => "Roboto Mono (Tech)",
        }
    }

    /// CSS `font-family` stack.
    pub fn css_family(self) -> &'static str {
        match self {
            FontChoice::Inter => "'Inter', sans-serif",
            FontChoice::Poppins => "'Poppins', sans-serif",
            FontChoice::Serif => "'Merriweather', serif",
            FontChoice::Mono => "'Roboto Mono', monospace",
        }
    }

    /// Google Fonts family parameter used by the rendered pages.
    pub fn web_font_query(self) -> &'static str {
        match self {
            FontChoice::Inter => "Inter:wght@300;400;500;700",
            FontChoice::Poppins => "Poppins:wght@300;400;500;700",
            FontChoice::Serif => "Merriweather:wght@300;400;700",
            FontChoice::Mono => "Roboto+Mono:wght@300;400;500;700",
        }
    }
}

impl FromStr for FontChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.key() == key)
            .ok_or_else(|| format!("Unknown font '{}'", s.trim()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Accent colour
// ────────────────────────────────────────────────────────────────────────────

/// Preset swatches offered next to the free colour picker.
pub const PRESET_COLORS: [&str; 6] = [
    "#2563eb", // blue
    "#059669", // emerald
    "#dc2626", // red
    "#0f172a", // slate
    "#7c3aed", // violet
    "#d97706", // amber
];

/// A `#rrggbb` colour, stored lower-case.
///
/// Only the six-digit form is accepted: templates derive translucent tints by
/// appending an alpha byte (`#rrggbb33`), which the short form would break.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccentColor(String);

impl AccentColor {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The colour with an 8-bit alpha suffix, e.g. `#2563eb33`.
    pub fn with_alpha(&self, alpha: u8) -> String {
        format!("{}{:02x}", self.0, alpha)
    }
}

impl FromStr for AccentColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed
            .strip_prefix('#')
            .ok_or_else(|| format!("Colour '{trimmed}' must start with '#'"))?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("Colour '{trimmed}' must have the form #rrggbb"));
        }
        Ok(AccentColor(format!("#{}", hex.to_ascii_lowercase())))
    }
}

impl TryFrom<String> for AccentColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AccentColor> for String {
    fn from(value: AccentColor) -> Self {
        value.0
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Text scale
// ────────────────────────────────────────────────────────────────────────────

pub const TEXT_SCALE_MIN: f64 = 0.8;
pub const TEXT_SCALE_MAX: f64 = 1.2;
pub const TEXT_SCALE_STEP: f64 = 0.05;
/// `1 / TEXT_SCALE_STEP`; dividing by an integer keeps snapped values exact.
const TEXT_SCALE_STEPS_PER_UNIT: f64 = 20.0;

/// Multiplier on the CV's base font size, within `[0.8, 1.2]` on a 0.05 grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct TextScale(f64);

impl TextScale {
    pub fn new(value: f64) -> Result<Self, String> {
        const EPS: f64 = 1e-9;
        if !value.is_finite() || value < TEXT_SCALE_MIN - EPS || value > TEXT_SCALE_MAX + EPS {
            return Err(format!(
                "Text scale {value} is outside [{TEXT_SCALE_MIN}, {TEXT_SCALE_MAX}]"
            ));
        }
        let snapped = (value * TEXT_SCALE_STEPS_PER_UNIT).round() / TEXT_SCALE_STEPS_PER_UNIT;
        Ok(TextScale(snapped.clamp(TEXT_SCALE_MIN, TEXT_SCALE_MAX)))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Whole-number percentage shown next to the slider.
    pub fn percent(self) -> u32 {
        (self.0 * 100.0).round() as u32
    }
}

impl Default for TextScale {
    fn default() -> Self {
        TextScale(1.0)
    }
}

impl TryFrom<f64> for TextScale {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        TextScale::new(value)
    }
}

impl From<TextScale> for f64 {
    fn from(value: TextScale) -> Self {
        value.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Theme
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub template: TemplateVariant,
    pub color: AccentColor,
    pub font: FontChoice,
    pub scale: TextScale,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            template: TemplateVariant::Modern,
            color: AccentColor(PRESET_COLORS[0].to_string()),
            font: FontChoice::Inter,
            scale: TextScale::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = ThemeConfig::default();
        assert_eq!(theme.template, TemplateVariant::Modern);
        assert_eq!(theme.color.as_str(), "#2563eb");
        assert_eq!(theme.font, FontChoice::Inter);
        assert_eq!(theme.scale.percent(), 100);
    }

    #[test]
    fn test_color_is_normalised() {
        let c: AccentColor = " #7C3AED ".parse().unwrap();
        assert_eq!(c.as_str(), "#7c3aed");
        assert_eq!(c.with_alpha(0x33), "#7c3aed33");
    }

    #[test]
    fn test_color_rejects_bad_forms() {
        assert!("2563eb".parse::<AccentColor>().is_err());
        assert!("#fff".parse::<AccentColor>().is_err());
        assert!("#12345g".parse::<AccentColor>().is_err());
        assert!("#2563eb00".parse::<AccentColor>().is_err());
    }

    #[test]
    fn test_presets_are_valid_colors() {
        for preset in PRESET_COLORS {
            assert_eq!(preset.parse::<AccentColor>().unwrap().as_str(), preset);
        }
    }

    #[test]
    fn test_scale_bounds() {
        assert!(TextScale::new(0.8).is_ok());
        assert!(TextScale::new(1.2).is_ok());
        assert!(TextScale::new(0.75).is_err());
        assert!(TextScale::new(1.25).is_err());
        assert!(TextScale::new(f64::NAN).is_err());
    }

    #[test]
    fn test_scale_snaps_to_step() {
        assert_eq!(TextScale::new(1.03).unwrap().percent(), 105);
        assert_eq!(TextScale::new(0.87).unwrap().percent(), 85);
        assert_eq!(TextScale::new(1.19).unwrap().percent(), 120);
    }

    #[test]
    fn test_snapped_scale_serializes_as_grid_value() {
        for (input, expected) in [(0.85, "0.85"), (0.87, "0.85"), (1.15, "1.15"), (1.1, "1.1")] {
            let scale = TextScale::new(input).unwrap();
            assert_eq!(serde_json::to_string(&scale).unwrap(), expected);
        }
    }

    #[test]
    fn test_theme_deserialize_validates() {
        let ok: ThemeConfig = serde_json::from_str(
            r##"{"template":"classic","color":"#DC2626","font":"serif","scale":1.1}"##,
        )
        .unwrap();
        assert_eq!(ok.template, TemplateVariant::Classic);
        assert_eq!(ok.color.as_str(), "#dc2626");
        assert_eq!(ok.scale.percent(), 110);

        let bad = serde_json::from_str::<ThemeConfig>(
            r##"{"template":"classic","color":"red","font":"serif","scale":1.0}"##,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_parse_template_and_font_keys() {
        assert_eq!("Minimal".parse::<TemplateVariant>().unwrap(), TemplateVariant::Minimal);
        assert_eq!(" mono ".parse::<FontChoice>().unwrap(), FontChoice::Mono);
        assert!("fancy".parse::<TemplateVariant>().is_err());
        assert!("comic".parse::<FontChoice>().is_err());
    }

    #[test]
    fn test_font_catalogue() {
        assert_eq!(FontChoice::ALL.len(), 4);
        assert_eq!(FontChoice::Mono.css_family(), "'Roboto Mono', monospace");
        assert_eq!(FontChoice::Serif.display_name(), "Merriweather (Elegante)");
    }
}
