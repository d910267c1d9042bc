/// Splits the free-text skill string into display items.
///
/// Items are comma-separated; surrounding whitespace is trimmed and blank
/// items (`"a,,b"`, trailing commas) are dropped. Order is preserved.
pub fn split_skills(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
