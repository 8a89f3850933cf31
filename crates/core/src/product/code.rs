//! Suggested internal codes for new products.
//!
//! Convention: `{CAT}-{NAM}-{NNN}` where `CAT` is the first three characters
//! of the category, `NAM` the first three characters of the first word of
//! the name (both upper-cased) and `NNN` a zero-padded counter starting at
//! `001`.

use std::collections::HashSet;

use crate::product::model::ProductRecord;

const PREFIX_LEN: usize = 3;

fn prefix(text: &str) -> String {
    text.chars().take(PREFIX_LEN).collect::<String>().to_uppercase()
}

/// Suggest a code for a product that no existing product uses.
///
/// Returns an empty string when `name` or `category` is blank. Existing
/// codes are compared case-insensitively.
///
/// ```
/// use ordena_core::product::code::suggest_code;
///
/// assert_eq!(suggest_code("Martillo 16oz", "Herramientas", &[]), "HER-MAR-001");
/// assert_eq!(suggest_code("", "Herramientas", &[]), "");
/// ```
pub fn suggest_code(name: &str, category: &str, existing: &[ProductRecord]) -> String {
    let name = name.trim();
    let category = category.trim();
    if name.is_empty() || category.is_empty() {
        return String::new();
    }

    let first_word = name.split_whitespace().next().unwrap_or(name);
    let base = format!("{}-{}", prefix(category), prefix(first_word));

    let taken: HashSet<String> = existing.iter().map(|p| p.code.to_lowercase()).collect();

    (1u32..)
        .map(|counter| format!("{base}-{counter:03}"))
        .find(|code| !taken.contains(&code.to_lowercase()))
        .unwrap_or(base)
}
