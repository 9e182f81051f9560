//! APA 7 field validation for single reference entries (Spanish locale)
//!
//! Every check is computed independently so that one malformed field does not
//! hide problems in another.

use lazy_static::lazy_static;
use regex::Regex;
use silvina_domain::{EntryFields, ReferenceEntry};

lazy_static! {
    // Personal author: Apellido, I. (optionally a hyphenated double surname)
    pub(crate) static ref PERSONAL_AUTHOR_REGEX: Regex = Regex::new(
        r"\p{Lu}\p{Ll}+(?:-\p{Lu}\p{Ll}+)?,\s+\p{Lu}\."
    ).unwrap();

    static ref ET_AL_REGEX: Regex = Regex::new(r"(?i)\bet\s+al\.").unwrap();

    // Organizational author: starts the entry, 10+ name characters, ". "
    static ref ORGANIZATIONAL_AUTHOR_REGEX: Regex = Regex::new(
        r"^\p{Lu}[\p{L}\s&,\-]{10,}\.\s"
    ).unwrap();

    pub(crate) static ref YEAR_REGEX: Regex = Regex::new(r"\(([0-9]{4})\)").unwrap();

    // "&" between an initial and the next author: "M. & L" or "M., & L"
    static ref AMPERSAND_CONJUNCTION_REGEX: Regex = Regex::new(
        r"\p{Lu}\.,?\s*&\s*\p{Lu}"
    ).unwrap();

    static ref DOI_URL_REGEX: Regex = Regex::new(
        r"(?i)https?://(?:dx\.)?doi\.org/\S+"
    ).unwrap();

    static ref URL_REGEX: Regex = Regex::new(r"(?i)https?://\S+").unwrap();

    static ref LEGACY_RETRIEVAL_REGEX: Regex = Regex::new(
        r"(?i)\brecuperado\s+de:?\s*https?://"
    ).unwrap();
}

/// Validates the fields of one reference entry
#[derive(Debug, Clone, Copy, Default)]
pub struct ApaFieldValidator;

impl ApaFieldValidator {
    pub fn new() -> Self {
        Self
    }

    /// Run every field check on an entry
    pub fn validate(&self, entry: &ReferenceEntry) -> EntryFields {
        let text = entry.raw_text();
        let year = extract_year(text);
        let doi = extract_doi_url(text);
        EntryFields {
            has_valid_author: has_valid_author(text),
            has_valid_year: year.is_some(),
            year,
            has_valid_conjunction: has_valid_conjunction(text),
            has_doi: doi.is_some(),
            doi,
            has_url: has_url(text),
            uses_legacy_retrieval_phrase: uses_legacy_retrieval_phrase(text),
            uses_foreign_quote_marks: uses_foreign_quote_marks(text),
        }
    }
}

/// Personal "Apellido, I.", an et al. marker, or an organizational author.
///
/// The organizational form is only accepted when no personal author is
/// present, so "Pérez, M. Organización relevante." is judged as personal.
pub fn has_valid_author(text: &str) -> bool {
    let has_personal = PERSONAL_AUTHOR_REGEX.is_match(text);
    if has_personal || ET_AL_REGEX.is_match(text) {
        return true;
    }
    ORGANIZATIONAL_AUTHOR_REGEX.is_match(text)
}

pub fn has_personal_author(text: &str) -> bool {
    PERSONAL_AUTHOR_REGEX.is_match(text)
}

/// First four-digit year written inside parentheses
pub fn extract_year(text: &str) -> Option<String> {
    YEAR_REGEX
        .captures(text)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}

/// Number of "(YYYY)" groups in the text
pub fn count_years(text: &str) -> usize {
    YEAR_REGEX.find_iter(text).count()
}

/// False when "&" joins two authors; Spanish APA uses "y"
pub fn has_valid_conjunction(text: &str) -> bool {
    !AMPERSAND_CONJUNCTION_REGEX.is_match(text)
}

/// The doi.org URL, trailing sentence punctuation removed
pub fn extract_doi_url(text: &str) -> Option<String> {
    DOI_URL_REGEX
        .find(text)
        .map(|m| m.as_str().trim_end_matches(['.', ',', ';', ')']).to_string())
}

pub fn has_url(text: &str) -> bool {
    URL_REGEX.is_match(text)
}

/// "Recuperado de <URL>", deprecated by APA 7
pub fn uses_legacy_retrieval_phrase(text: &str) -> bool {
    LEGACY_RETRIEVAL_REGEX.is_match(text)
}

/// Straight quotes instead of « ».
///
/// A single quote between two letters is an apostrophe (O'Brien), not a
/// quotation mark.
pub fn uses_foreign_quote_marks(text: &str) -> bool {
    if text.contains('"') {
        return true;
    }
    let chars: Vec<char> = text.chars().collect();
    chars.iter().enumerate().any(|(i, &c)| {
        if c != '\'' {
            return false;
        }
        let before = i.checked_sub(1).and_then(|j| chars.get(j));
        let after = chars.get(i + 1);
        !matches!((before, after), (Some(b), Some(a)) if b.is_alphabetic() && a.is_alphabetic())
    })
}
