//! Validation issues reported for reference entries and lists

use serde::{Deserialize, Serialize};

/// Severity of a validation issue
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Closed set of problems the engine reports
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// No "Apellido, I.", et al. or organizational author found
    AuthorFormat,
    /// No "(YYYY)" year found
    MissingYear,
    /// "&" between authors where Spanish APA requires "y"
    AmpersandConjunction,
    /// "Recuperado de" followed by a URL
    LegacyRetrievalPhrase,
    /// Straight quotation marks instead of guillemets
    ForeignQuoteMarks,
    /// Entry sorts after its successor
    OrderingViolation,
    /// Entry text nearly identical to another entry
    ProbableDuplicate,
}

impl IssueKind {
    /// Whether the issue makes the entry invalid, or is advisory
    pub fn severity(&self) -> Severity {
        match self {
            IssueKind::AuthorFormat | IssueKind::MissingYear | IssueKind::AmpersandConjunction => {
                Severity::Error
            }
            IssueKind::LegacyRetrievalPhrase
            | IssueKind::ForeignQuoteMarks
            | IssueKind::OrderingViolation
            | IssueKind::ProbableDuplicate => Severity::Warning,
        }
    }

    /// True for issues that involve two entries
    pub fn is_pairwise(&self) -> bool {
        matches!(self, IssueKind::OrderingViolation | IssueKind::ProbableDuplicate)
    }
}

/// A reported problem.
///
/// List-level issues may have no `entry_index`; pairwise issues set
/// `related_entry_index` to the other entry involved.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ValidationIssue {
    pub entry_index: Option<usize>,
    pub related_entry_index: Option<usize>,
    pub kind: IssueKind,
    pub severity: Severity,
    pub message: String,
}

impl ValidationIssue {
    /// Issue attached to a single entry
    pub fn for_entry(entry_index: usize, kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            entry_index: Some(entry_index),
            related_entry_index: None,
            kind,
            severity: kind.severity(),
            message: message.into(),
        }
    }

    /// Issue relating two entries
    pub fn for_pair(
        entry_index: usize,
        related_entry_index: usize,
        kind: IssueKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            entry_index: Some(entry_index),
            related_entry_index: Some(related_entry_index),
            kind,
            severity: kind.severity(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Adjacent pair found out of alphabetical order
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderingViolation {
    pub index: usize,
    pub next_index: usize,
    pub key: String,
    pub next_key: String,
}

/// Result of the adjacent-pair ordering audit
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderingResult {
    pub violations: Vec<OrderingViolation>,
}

impl OrderingResult {
    pub fn is_ordered(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Pair of entries whose similarity exceeded the threshold
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DuplicatePair {
    pub first: usize,
    pub second: usize,
    pub similarity: f64,
}

/// Result of the pairwise duplicate scan
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DuplicateResult {
    pub threshold: f64,
    /// Flagged pairs, `first < second`, ascending
    pub pairs: Vec<DuplicatePair>,
}

impl DuplicateResult {
    pub fn has_duplicates(&self) -> bool {
        !self.pairs.is_empty()
    }
}
