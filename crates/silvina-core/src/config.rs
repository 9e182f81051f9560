//! Configuration for the editorial engine
//!
//! The thresholds here are editorial policy, not laws of APA style, so they
//! live in one place where they can be tuned and tested.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Pieces shorter than this are treated as splitting artifacts
pub const DEFAULT_MIN_ENTRY_LENGTH: usize = 30;

/// Similarity above which two entries are reported as probable duplicates
pub const DEFAULT_DUPLICATE_THRESHOLD: f64 = 0.85;

/// Characters of body text handed to a prose reviewer
pub const DEFAULT_REVIEW_CHAR_LIMIT: usize = 2000;

/// Spanish headings that open the reference section
pub const DEFAULT_SECTION_HEADINGS: [&str; 3] =
    ["Referencias", "Bibliografía", "Fuentes bibliográficas"];

/// Page and paragraph locators accepted inside citations
pub const DEFAULT_LOCATOR_ABBREVIATIONS: [&str; 3] = ["p.", "pp.", "párr."];

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Minimum characters for a reference entry
    pub min_entry_length: usize,
    /// Duplicate similarity threshold, in [0, 1]
    pub duplicate_threshold: f64,
    /// Headings matched case-insensitively as substrings
    pub section_headings: Vec<String>,
    /// Locator abbreviations, longest alternatives are tried first
    pub locator_abbreviations: Vec<String>,
    pub review_char_limit: usize,
    /// Use rayon for the duplicate scan (needs the `parallel` feature)
    pub parallel_duplicates: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_entry_length: DEFAULT_MIN_ENTRY_LENGTH,
            duplicate_threshold: DEFAULT_DUPLICATE_THRESHOLD,
            section_headings: DEFAULT_SECTION_HEADINGS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            locator_abbreviations: DEFAULT_LOCATOR_ABBREVIATIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            review_char_limit: DEFAULT_REVIEW_CHAR_LIMIT,
            parallel_duplicates: false,
        }
    }
}

impl EngineConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set duplicate threshold
    pub fn with_duplicate_threshold(mut self, threshold: f64) -> Self {
        self.duplicate_threshold = threshold;
        self
    }

    /// Builder: set minimum entry length
    pub fn with_min_entry_length(mut self, length: usize) -> Self {
        self.min_entry_length = length;
        self
    }

    /// Builder: replace section headings
    pub fn with_section_headings<I, S>(mut self, headings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.section_headings = headings.into_iter().map(Into::into).collect();
        self
    }

    /// Load and validate configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load and validate configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.duplicate_threshold) {
            return Err(ConfigError::OutOfRange(format!(
                "duplicate_threshold must be between 0.0 and 1.0, got {}",
                self.duplicate_threshold
            )));
        }

        if self.section_headings.is_empty() {
            return Err(ConfigError::EmptyHeadings);
        }

        if self.section_headings.iter().any(|h| h.trim().is_empty()) {
            return Err(ConfigError::Blank("section_headings".to_string()));
        }

        if self.locator_abbreviations.is_empty() {
            return Err(ConfigError::EmptyLocators);
        }

        if self
            .locator_abbreviations
            .iter()
            .any(|a| a.trim().is_empty())
        {
            return Err(ConfigError::Blank("locator_abbreviations".to_string()));
        }

        Ok(())
    }
}
