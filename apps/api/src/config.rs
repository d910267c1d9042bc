use anyhow::{Context, Result};

use crate::render::labels::Locale;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Language for section labels and placeholder text of new entries.
    pub locale: Locale,
    /// Horizontal padding (px) around the preview page inside its container.
    pub preview_padding_px: f64,
    /// Upper bound on an uploaded profile photo, in bytes.
    pub max_photo_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            locale: Locale::It,
            preview_padding_px: 40.0,
            max_photo_bytes: 5 * 1024 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            port: parse_env("PORT", defaults.port)
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            locale: parse_locale_env("CV_LOCALE", defaults.locale)?,
            preview_padding_px: parse_env("PREVIEW_PADDING_PX", defaults.preview_padding_px)
                .context("PREVIEW_PADDING_PX must be a number of pixels")?,
            max_photo_bytes: parse_env("MAX_PHOTO_BYTES", defaults.max_photo_bytes)
                .context("MAX_PHOTO_BYTES must be a byte count")?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value '{raw}' for environment variable '{key}'")),
        Err(_) => Ok(default),
    }
}

fn parse_locale_env(key: &str, default: Locale) -> Result<Locale> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<Locale>()
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("{key} must be 'it' or 'en'")),
        Err(_) => Ok(default),
    }
}
