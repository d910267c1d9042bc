//! Turns an uploaded image into the `data:` URL stored on the profile.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::errors::AppError;

/// Magic-number prefixes for formats commonly uploaded without a usable
/// content type.
const SIGNATURES: &[(&[u8], &str)] = &[
    (b"\x89PNG\r\n\x1a\n", "image/png"),
    (b"\xff\xd8\xff", "image/jpeg"),
    (b"GIF87a", "image/gif"),
    (b"GIF89a", "image/gif"),
    (b"BM", "image/bmp"),
];

/// Validates an upload and encodes it as `data:<mime>;base64,<payload>`.
///
/// Any `image/*` content type is accepted. A missing or generic
/// (`application/octet-stream`) type falls back to sniffing the leading bytes.
pub fn encode_photo(
    content_type: Option<&str>,
    bytes: &[u8],
    max_bytes: usize,
) -> Result<String, AppError> {
    if bytes.is_empty() {
        return Err(AppError::Validation("Uploaded photo is empty".to_string()));
    }
    if bytes.len() > max_bytes {
        return Err(AppError::Validation(format!(
            "Uploaded photo is {} bytes; the limit is {max_bytes}",
            bytes.len()
        )));
    }

    let mime = resolve_mime(content_type, bytes)?;
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

fn resolve_mime(content_type: Option<&str>, bytes: &[u8]) -> Result<String, AppError> {
    let declared = content_type
        .map(|ct| ct.split(';').next().unwrap_or("").trim().to_ascii_lowercase())
        .filter(|ct| !ct.is_empty() && ct != "application/octet-stream");

    match declared {
        Some(ct) => {
            let subtype = ct.strip_prefix("image/").ok_or_else(|| {
                AppError::Validation(format!("Expected an image upload, got '{ct}'"))
            })?;
            // The MIME ends up inside HTML attributes and CSS url(), keep it plain.
            let plain = !subtype.is_empty()
                && subtype
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '+' | '-'));
            if !plain {
                return Err(AppError::Validation(format!(
                    "Unsupported image type '{ct}'"
                )));
            }
            Ok(ct)
        }
        None => sniff(bytes).map(str::to_string).ok_or_else(|| {
            AppError::Validation("Could not recognise the uploaded file as an image".to_string())
        }),
    }
}

fn sniff(bytes: &[u8]) -> Option<&'static str> {
    if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        return Some("image/webp");
    }
    SIGNATURES
        .iter()
        .find(|(magic, _)| bytes.starts_with(magic))
        .map(|(_, mime)| *mime)
}
