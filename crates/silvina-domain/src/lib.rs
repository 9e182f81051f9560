//! Editorial domain types shared by the silvina engine and its callers
//!
//! This crate provides the plain data produced by a manuscript analysis:
//! - ReferenceEntry: one bibliographic entry segmented from the reference list
//! - CitationOccurrence: one in-text citation (parenthetical or narrative)
//! - ValidationIssue: a per-entry or list-level problem with a closed kind
//! - IntegrityVerdict, TraceabilityReport: citation/reference reconciliation
//! - ValidationReport: the aggregate handed to a presentation layer
//!
//! Nothing here performs pattern matching or I/O; see `silvina-core`.

pub mod citation;
pub mod integrity;
pub mod issue;
pub mod reference;
pub mod report;

pub use citation::*;
pub use integrity::*;
pub use issue::*;
pub use reference::*;
pub use report::*;
