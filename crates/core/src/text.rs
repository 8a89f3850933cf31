//! Text normalization shared by every product comparison.

/// Normalize text for case- and spacing-insensitive comparison.
///
/// Trims, lower-cases and collapses internal whitespace runs to one space.
///
/// ```
/// use ordena_core::text::normalize_text;
///
/// assert_eq!(normalize_text("  Martillo   16OZ "), "martillo 16oz");
/// ```
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Number of characters in `text` once trimmed.
pub fn trimmed_len(text: &str) -> usize {
    text.trim().chars().count()
}
