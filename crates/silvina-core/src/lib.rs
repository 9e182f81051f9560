//! silvina-core: editorial validation engine for Spanish APA 7 manuscripts
//!
//! This library provides:
//! - Reference-section location and entry segmentation
//! - Per-entry APA field checks (author, year, conjunction, DOI, quotes)
//! - List checks: alphabetical ordering and probable duplicates
//! - In-text citation extraction (parenthetical and narrative)
//! - Citation/reference integrity and author+year traceability
//!
//! The engine is pure text analysis. Callers hand it a paragraph sequence
//! already read from the document; presentation of the report is theirs.

pub mod analyzer;
pub mod citations;
pub mod config;
pub mod engine;
pub mod error;
pub mod fields;
pub mod integrity;
pub mod normalization;
pub mod review;
pub mod section;
pub mod segment;

pub use analyzer::{check_ordering, similarity, ListAnalysis, ReferenceListAnalyzer};
pub use citations::CitationExtractor;
pub use config::EngineConfig;
pub use engine::EditorialEngine;
pub use error::{ConfigError, Result, ReviewError};
pub use fields::ApaFieldValidator;
pub use integrity::CitationIntegrityChecker;
pub use review::ProseReviewer;
pub use section::{body_paragraphs, locate_reference_section};
pub use segment::ReferenceEntrySegmenter;

// Domain types, so callers need a single dependency
pub use silvina_domain::*;
