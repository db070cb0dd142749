//! Label to filename conversion.

use deunicode::deunicode;

/// Name used when a label has no alphanumeric characters at all.
pub const FALLBACK_SLUG: &str = "untitled";

/// Default extension for exported text files.
pub const DEFAULT_SUFFIX: &str = ".txt";

/// Reduce a label to lowercase ASCII letters and digits.
///
/// Applies the following transformations in order:
/// 1. Unicode → ASCII transliteration ("Émile" → "Emile")
/// 2. Lowercasing
/// 3. Every character that is not alphanumeric is removed
/// 4. Empty results → "untitled" fallback
///
/// Different labels can map to the same slug ("Mr. Smith" and "mr smith").
pub fn slugify(label: &str) -> String {
    let slug: String = deunicode(label)
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// File name for a label: its slug followed by `suffix`.
pub fn file_name(label: &str, suffix: &str) -> String {
    format!("{}{}", slugify(label), suffix)
}
