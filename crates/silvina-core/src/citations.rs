//! In-text citation extraction
//!
//! Two independent patterns run over every paragraph:
//! - parenthetical: `(García, 2020, p. 45)`, `(Gidney y Ekera, 2024)`
//! - narrative: `García (2020)`, `López et al. (2019, párr. 3)`
//!
//! Matching never crosses paragraph boundaries.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use silvina_domain::{CitationOccurrence, CitationStyle};

use crate::config::{EngineConfig, DEFAULT_LOCATOR_ABBREVIATIONS};
use crate::error::{ConfigError, Result};

const SURNAME: &str = r"\p{Lu}\p{Ll}+(?:-\p{Lu}\p{Ll}+)?";
const YEAR: &str = r"(?P<year>[0-9]{4}[a-z]?)";

lazy_static! {
    static ref AUTHOR_SEPARATOR_REGEX: Regex = Regex::new(r"\s+(?:y|&)\s+").unwrap();
}

/// Finds parenthetical and narrative citations in body paragraphs
#[derive(Debug, Clone)]
pub struct CitationExtractor {
    parenthetical: Regex,
    narrative: Regex,
}

impl CitationExtractor {
    /// Build the patterns for the given locator abbreviations ("p.", "pp.", ...)
    pub fn new<S: AsRef<str>>(locator_abbreviations: &[S]) -> Result<Self> {
        if locator_abbreviations.is_empty() {
            return Err(ConfigError::EmptyLocators);
        }

        let mut abbreviations: Vec<&str> = locator_abbreviations
            .iter()
            .map(|a| a.as_ref().trim())
            .collect();
        if abbreviations.iter().any(|a| a.is_empty()) {
            return Err(ConfigError::Blank("locator_abbreviations".to_string()));
        }
        // Longest first so "pp." is preferred over "p."
        abbreviations.sort_by_key(|a| std::cmp::Reverse(a.chars().count()));
        let alternatives = abbreviations
            .iter()
            .map(|a| regex::escape(a))
            .collect::<Vec<_>>()
            .join("|");

        let authors = format!(
            r"(?P<authors>{SURNAME}(?:\s+(?:y|&)\s+{SURNAME})?)(?P<etal>\s+et\s+al\.)?"
        );
        let locator =
            format!(r"(?:,\s*(?P<abbr>{alternatives})\s*(?P<loc>[0-9]+(?:[-–][0-9]+)?))?");

        Ok(Self {
            parenthetical: Regex::new(&format!(r"\({authors},\s*{YEAR}{locator}\)"))?,
            narrative: Regex::new(&format!(r"\b{authors}\s+\({YEAR}{locator}\)"))?,
        })
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        Self::new(&config.locator_abbreviations)
    }

    /// Extract citations from every paragraph, in paragraph order
    pub fn extract<S: AsRef<str>>(&self, paragraphs: &[S]) -> Vec<CitationOccurrence> {
        let citations: Vec<CitationOccurrence> = paragraphs
            .iter()
            .enumerate()
            .flat_map(|(i, p)| self.extract_paragraph(p.as_ref(), i))
            .collect();

        tracing::debug!(
            "Extracted {} in-text citations from {} paragraphs",
            citations.len(),
            paragraphs.len()
        );
        citations
    }

    /// Parenthetical matches first, then narrative matches
    pub fn extract_paragraph(&self, text: &str, paragraph_index: usize) -> Vec<CitationOccurrence> {
        let mut citations: Vec<CitationOccurrence> = self
            .parenthetical
            .captures_iter(text)
            .map(|cap| occurrence(text, &cap, paragraph_index, CitationStyle::Parenthetical))
            .collect();
        citations.extend(
            self.narrative
                .captures_iter(text)
                .map(|cap| occurrence(text, &cap, paragraph_index, CitationStyle::Narrative)),
        );
        citations
    }
}

impl Default for CitationExtractor {
    fn default() -> Self {
        Self {
            parenthetical: DEFAULT_EXTRACTOR.parenthetical.clone(),
            narrative: DEFAULT_EXTRACTOR.narrative.clone(),
        }
    }
}

lazy_static! {
    static ref DEFAULT_EXTRACTOR: CitationExtractor =
        CitationExtractor::new(&DEFAULT_LOCATOR_ABBREVIATIONS).unwrap();
}

fn occurrence(
    text: &str,
    cap: &Captures<'_>,
    paragraph_index: usize,
    style: CitationStyle,
) -> CitationOccurrence {
    let whole = cap.get(0).map(|m| (m.start(), m.as_str())).unwrap_or((0, ""));
    let authors = cap
        .name("authors")
        .map(|m| {
            AUTHOR_SEPARATOR_REGEX
                .split(m.as_str())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    let locator = match (cap.name("abbr"), cap.name("loc")) {
        (Some(abbr), Some(loc)) => Some(format!("{} {}", abbr.as_str(), loc.as_str())),
        _ => None,
    };

    CitationOccurrence {
        authors,
        et_al: cap.name("etal").is_some(),
        year: cap
            .name("year")
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
        paragraph_index,
        style,
        page_or_paragraph_ref: locator,
        char_offset: text[..whole.0].chars().count(),
        raw_text: whole.1.to_string(),
    }
}
