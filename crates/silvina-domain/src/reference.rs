//! Reference-list entries and their derived field results

use serde::{Deserialize, Serialize};

/// One bibliographic entry from the reference section.
///
/// Entries are created by segmentation and never mutated afterwards;
/// validators read `raw_text` and produce an [`EntryFields`] alongside it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ReferenceEntry {
    raw_text: String,
}

impl ReferenceEntry {
    /// Create an entry from already-segmented text
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
        }
    }

    /// The entry text exactly as segmented
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Text shortened for display (80 chars plus an ellipsis)
    pub fn preview(&self) -> String {
        if self.raw_text.chars().count() > 80 {
            let head: String = self.raw_text.chars().take(80).collect();
            format!("{}...", head)
        } else {
            self.raw_text.clone()
        }
    }
}

impl std::fmt::Display for ReferenceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw_text)
    }
}

/// Field-level results for one entry.
///
/// Each flag is computed independently; a failing author pattern does not
/// influence the year or conjunction checks.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntryFields {
    pub has_valid_author: bool,
    pub has_valid_year: bool,
    /// The 4-digit year found inside parentheses, when present
    pub year: Option<String>,
    /// False when "&" joins two authors instead of "y"
    pub has_valid_conjunction: bool,
    pub has_doi: bool,
    /// The doi.org URL as written in the entry
    pub doi: Option<String>,
    pub has_url: bool,
    pub uses_legacy_retrieval_phrase: bool,
    pub uses_foreign_quote_marks: bool,
}

impl EntryFields {
    /// Overall validity: author, year and conjunction must all pass.
    ///
    /// DOI/URL presence, quote style and retrieval phrasing are advisory.
    pub fn is_valid(&self) -> bool {
        self.has_valid_author && self.has_valid_year && self.has_valid_conjunction
    }
}

/// The reference section located in a paragraph sequence
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferenceSection {
    /// Index of the heading paragraph in the input sequence
    pub heading_index: usize,
    /// The configured heading string that matched
    pub heading: String,
    /// Non-blank paragraphs after the heading, newline-joined
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_text_unchanged() {
        let entry = ReferenceEntry::new("García, M. (2023). Título.");
        assert_eq!(entry.preview(), "García, M. (2023). Título.");
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let entry = ReferenceEntry::new("á".repeat(100));
        let preview = entry.preview();
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), 83);
    }

    #[test]
    fn test_is_valid_ignores_advisory_fields() {
        let fields = EntryFields {
            has_valid_author: true,
            has_valid_year: true,
            year: Some("2020".to_string()),
            has_valid_conjunction: true,
            uses_foreign_quote_marks: true,
            uses_legacy_retrieval_phrase: true,
            ..Default::default()
        };
        assert!(fields.is_valid());

        let missing_year = EntryFields {
            has_valid_year: false,
            year: None,
            ..fields
        };
        assert!(!missing_year.is_valid());
    }
}
