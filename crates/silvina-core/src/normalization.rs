//! Text normalization for ordering keys and surname comparison

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercase and strip diacritics ("Álvarez" -> "alvarez", "Muñoz" -> "munoz")
pub fn fold(text: &str) -> String {
    text.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Sort key of a reference entry: its first whitespace-delimited token,
/// trailing punctuation removed, folded.
///
/// For personal authors this is the first surname ("García," -> "garcia").
/// "ñ" is a letter of its own in Spanish and survives folding; compare keys
/// with [`compare_keys`] so it sorts between "n" and "o".
pub fn ordering_key(text: &str) -> String {
    let token = text.split_whitespace().next().unwrap_or_default();
    token
        .trim_end_matches(|c: char| c.is_ascii_punctuation())
        .split(['ñ', 'Ñ'])
        .map(fold)
        .collect::<Vec<_>>()
        .join("ñ")
}

/// Spanish collation of ordering keys
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    a.chars().map(collation_weight).cmp(b.chars().map(collation_weight))
}

fn collation_weight(c: char) -> (char, u8) {
    match c {
        'ñ' => ('n', 1),
        c => (c, 0),
    }
}

/// Collapse runs of whitespace into single spaces
pub(crate) fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Take at most `limit` characters, respecting char boundaries
pub(crate) fn truncate_chars(s: &str, limit: usize) -> &str {
    match s.char_indices().nth(limit) {
        Some((byte_index, _)) => &s[..byte_index],
        None => s,
    }
}
