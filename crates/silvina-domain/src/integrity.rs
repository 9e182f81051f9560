//! Reconciliation between in-text citations and the reference list

use serde::{Deserialize, Serialize};

use crate::Severity;

/// Section-level verdict on whether citations and references coexist
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum IntegrityVerdict {
    /// Reference entries exist but no in-text citation was found anywhere
    ReferencesWithoutCitations { references: usize },
    /// In-text citations exist but no reference entries were detected
    CitationsWithoutReferences { citations: usize },
    /// Neither citations nor references; may be a non-academic text
    AbsentCitationSystem,
    /// Both present
    Present { citations: usize, references: usize },
}

impl IntegrityVerdict {
    pub fn severity(&self) -> Severity {
        match self {
            IntegrityVerdict::ReferencesWithoutCitations { .. }
            | IntegrityVerdict::CitationsWithoutReferences { .. } => Severity::Error,
            IntegrityVerdict::AbsentCitationSystem => Severity::Warning,
            IntegrityVerdict::Present { .. } => Severity::Info,
        }
    }

    /// True when the manuscript's claims cannot be traced to sources
    pub fn is_critical(&self) -> bool {
        self.severity() == Severity::Error
    }

    /// Rank for ordering findings, lowest is most severe
    pub fn rank(&self) -> u8 {
        match self {
            IntegrityVerdict::ReferencesWithoutCitations { .. } => 0,
            IntegrityVerdict::CitationsWithoutReferences { .. } => 1,
            IntegrityVerdict::AbsentCitationSystem => 2,
            IntegrityVerdict::Present { .. } => 3,
        }
    }
}

/// Entry-level matching of citations to references by surname and year
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TraceabilityReport {
    /// Indices of reference entries no citation points to (orphaned references)
    pub uncited_entries: Vec<usize>,
    /// Indices of citations with no matching reference entry
    pub unresolved_citations: Vec<usize>,
}

impl TraceabilityReport {
    pub fn is_fully_traced(&self) -> bool {
        self.uncited_entries.is_empty() && self.unresolved_citations.is_empty()
    }
}

/// Outcome of the optional prose review capability
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum ProseReview {
    Completed(String),
    Failed(String),
}
