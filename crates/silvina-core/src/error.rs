//! Error types for silvina-core
//!
//! Analysis itself never fails: unmatched patterns are results, not errors.
//! Only configuration problems and injected capabilities produce errors.

use thiserror::Error;

/// Result type alias for engine construction and configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration rejected at construction time
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Numeric setting outside its valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// No section heading configured
    #[error("At least one reference-section heading is required")]
    EmptyHeadings,

    /// No page/paragraph locator configured
    #[error("At least one locator abbreviation is required")]
    EmptyLocators,

    /// A heading or locator list holds a blank string
    #[error("Blank entry in {0}")]
    Blank(String),

    /// A configured string produced an unusable pattern
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// TOML or JSON could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<regex::Error> for ConfigError {
    fn from(err: regex::Error) -> Self {
        ConfigError::InvalidPattern(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Failure reported by an injected prose reviewer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReviewError {
    /// The review service could not be reached
    #[error("Review service unavailable: {0}")]
    Unavailable(String),

    /// The service answered but the answer was unusable
    #[error("Review failed: {0}")]
    Failed(String),
}
