//! In-text citation occurrences

use serde::{Deserialize, Serialize};

/// How a citation is written in the body text
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CitationStyle {
    /// Fully enclosed in parentheses: "(García, 2020)"
    Parenthetical,
    /// Author outside, year inside: "García (2020)"
    Narrative,
}

impl CitationStyle {
    /// Spanish label used in editorial reports
    pub fn label(&self) -> &'static str {
        match self {
            CitationStyle::Parenthetical => "parentética",
            CitationStyle::Narrative => "narrativa",
        }
    }
}

/// One citation found in one paragraph.
///
/// `authors` always holds at least one surname. `year` is four digits with an
/// optional lowercase disambiguator ("2021a").
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CitationOccurrence {
    pub authors: Vec<String>,
    /// True when the author group ended in "et al."
    pub et_al: bool,
    pub year: String,
    pub paragraph_index: usize,
    pub style: CitationStyle,
    /// Locator such as "p. 45", "pp. 10-12" or "párr. 3"
    pub page_or_paragraph_ref: Option<String>,
    /// Position of the match within its paragraph, in characters
    pub char_offset: usize,
    /// The matched citation text
    pub raw_text: String,
}

impl CitationOccurrence {
    /// First (or only) cited surname
    pub fn first_author(&self) -> &str {
        self.authors.first().map(String::as_str).unwrap_or_default()
    }

    /// The four-digit year without any disambiguation letter
    pub fn base_year(&self) -> &str {
        self.year.get(..4).unwrap_or(&self.year)
    }
}

impl std::fmt::Display for CitationOccurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut authors = self.authors.join(" y ");
        if self.et_al {
            authors.push_str(" et al.");
        }
        match &self.page_or_paragraph_ref {
            Some(locator) => write!(
                f,
                "{} ({}, {}) [¶{}]",
                authors, self.year, locator, self.paragraph_index
            ),
            None => write!(f, "{} ({}) [¶{}]", authors, self.year, self.paragraph_index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occurrence() -> CitationOccurrence {
        CitationOccurrence {
            authors: vec!["Pérez".to_string()],
            et_al: false,
            year: "2021a".to_string(),
            paragraph_index: 2,
            style: CitationStyle::Parenthetical,
            page_or_paragraph_ref: Some("p. 45".to_string()),
            char_offset: 17,
            raw_text: "(Pérez, 2021a, p. 45)".to_string(),
        }
    }

    #[test]
    fn test_base_year_strips_disambiguator() {
        assert_eq!(occurrence().base_year(), "2021");
    }

    #[test]
    fn test_display() {
        assert_eq!(occurrence().to_string(), "Pérez (2021a, p. 45) [¶2]");

        let mut narrative = occurrence();
        narrative.authors = vec!["Gidney".to_string(), "Ekera".to_string()];
        narrative.page_or_paragraph_ref = None;
        narrative.year = "2024".to_string();
        assert_eq!(narrative.to_string(), "Gidney y Ekera (2024) [¶2]");
    }

    #[test]
    fn test_style_serializes_snake_case() {
        let json = serde_json::to_string(&CitationStyle::Parenthetical).unwrap();
        assert_eq!(json, "\"parenthetical\"");
    }
}
