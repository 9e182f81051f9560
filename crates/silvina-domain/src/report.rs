//! Aggregate report for one analysis run

use serde::{Deserialize, Serialize};

use crate::{
    CitationOccurrence, DuplicateResult, EntryFields, IntegrityVerdict, OrderingResult,
    ProseReview, ReferenceEntry, ReferenceSection, TraceabilityReport, ValidationIssue,
};

/// Everything the engine found in one manuscript.
///
/// Assembled once per run and handed to the caller; `entries` and `fields`
/// are parallel and follow document order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ValidationReport {
    pub section: Option<ReferenceSection>,
    pub entries: Vec<ReferenceEntry>,
    pub fields: Vec<EntryFields>,
    pub total_entries: usize,
    pub valid_entries: usize,
    /// Per-entry issues in entry order, then ordering, then duplicates
    pub issues: Vec<ValidationIssue>,
    pub ordering: OrderingResult,
    pub duplicates: DuplicateResult,
    pub citations: Vec<CitationOccurrence>,
    pub verdict: IntegrityVerdict,
    pub traceability: TraceabilityReport,
    pub prose_review: Option<ProseReview>,
}

impl ValidationReport {
    /// Indices of entries failing author, year or conjunction checks
    pub fn invalid_entries(&self) -> Vec<usize> {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, f)| !f.is_valid())
            .map(|(i, _)| i)
            .collect()
    }

    /// All issues that mention the given entry, directly or as the related side
    pub fn issues_for(&self, entry_index: usize) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|issue| {
                issue.entry_index == Some(entry_index)
                    || issue.related_entry_index == Some(entry_index)
            })
            .collect()
    }

    pub fn has_errors(&self) -> bool {
        self.verdict.is_critical() || self.issues.iter().any(ValidationIssue::is_error)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
