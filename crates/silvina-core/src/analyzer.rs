//! List-level analysis of reference entries
//!
//! Runs [`ApaFieldValidator`] on every entry and adds two checks that need
//! the whole list: adjacent alphabetical ordering and near-duplicate pairs.

use std::cmp::Ordering;

use silvina_domain::{
    DuplicatePair, DuplicateResult, EntryFields, IssueKind, OrderingResult, OrderingViolation,
    ReferenceEntry, ValidationIssue,
};
use strsim::normalized_levenshtein;

use crate::config::{EngineConfig, DEFAULT_DUPLICATE_THRESHOLD};
use crate::fields::ApaFieldValidator;
use crate::normalization::{collapse_whitespace, compare_keys, ordering_key};

/// Output of [`ReferenceListAnalyzer::analyze`]
#[derive(Debug, Clone, PartialEq)]
pub struct ListAnalysis {
    /// Field results, parallel to the input entries
    pub fields: Vec<EntryFields>,
    /// Field-level issues in entry order
    pub per_entry: Vec<ValidationIssue>,
    pub ordering: OrderingResult,
    pub duplicates: DuplicateResult,
}

impl ListAnalysis {
    pub fn valid_entries(&self) -> usize {
        self.fields.iter().filter(|f| f.is_valid()).count()
    }

    /// Per-entry issues, then ordering issues, then duplicate issues
    pub fn all_issues(&self) -> Vec<ValidationIssue> {
        let mut issues = self.per_entry.clone();
        issues.extend(self.ordering.violations.iter().map(|v| {
            ValidationIssue::for_pair(
                v.index,
                v.next_index,
                IssueKind::OrderingViolation,
                format!(
                    "Orden alfabético incorrecto: «{}» aparece antes que «{}»",
                    v.key, v.next_key
                ),
            )
        }));
        issues.extend(self.duplicates.pairs.iter().map(|p| {
            ValidationIssue::for_pair(
                p.first,
                p.second,
                IssueKind::ProbableDuplicate,
                format!(
                    "Posible referencia duplicada ({:.0}% de similitud)",
                    p.similarity * 100.0
                ),
            )
        }));
        issues
    }
}

/// Validates a whole reference list
#[derive(Debug, Clone)]
pub struct ReferenceListAnalyzer {
    validator: ApaFieldValidator,
    duplicate_threshold: f64,
    parallel: bool,
}

impl Default for ReferenceListAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_DUPLICATE_THRESHOLD)
    }
}

impl ReferenceListAnalyzer {
    pub fn new(duplicate_threshold: f64) -> Self {
        Self {
            validator: ApaFieldValidator::new(),
            duplicate_threshold,
            parallel: false,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            parallel: config.parallel_duplicates,
            ..Self::new(config.duplicate_threshold)
        }
    }

    pub fn analyze(&self, entries: &[ReferenceEntry]) -> ListAnalysis {
        let fields: Vec<EntryFields> = entries.iter().map(|e| self.validator.validate(e)).collect();
        let per_entry = fields
            .iter()
            .enumerate()
            .flat_map(|(i, f)| field_issues(i, f))
            .collect();

        ListAnalysis {
            fields,
            per_entry,
            ordering: check_ordering(entries),
            duplicates: self.find_duplicates(entries),
        }
    }

    /// Every unordered pair whose similarity exceeds the threshold.
    ///
    /// Quadratic in list length; reference lists hold tens of entries.
    pub fn find_duplicates(&self, entries: &[ReferenceEntry]) -> DuplicateResult {
        let normalized: Vec<String> = entries
            .iter()
            .map(|e| collapse_whitespace(&e.raw_text().to_lowercase()))
            .collect();

        let mut pairs = if self.parallel {
            scan_pairs_parallel(&normalized, self.duplicate_threshold)
        } else {
            scan_pairs(&normalized, self.duplicate_threshold)
        };
        pairs.sort_by_key(|p| (p.first, p.second));

        tracing::debug!(
            "Duplicate scan over {} entries flagged {} pairs",
            entries.len(),
            pairs.len()
        );

        DuplicateResult {
            threshold: self.duplicate_threshold,
            pairs,
        }
    }
}

/// Case-insensitive similarity ratio in [0, 1], symmetric in its arguments
pub fn similarity(a: &str, b: &str) -> f64 {
    text_similarity(
        &collapse_whitespace(&a.to_lowercase()),
        &collapse_whitespace(&b.to_lowercase()),
    )
}

fn text_similarity(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b)
}

fn scan_pairs(normalized: &[String], threshold: f64) -> Vec<DuplicatePair> {
    let mut pairs = Vec::new();
    for i in 0..normalized.len() {
        for j in (i + 1)..normalized.len() {
            let score = text_similarity(&normalized[i], &normalized[j]);
            if score > threshold {
                pairs.push(DuplicatePair {
                    first: i,
                    second: j,
                    similarity: score,
                });
            }
        }
    }
    pairs
}

#[cfg(feature = "parallel")]
fn scan_pairs_parallel(normalized: &[String], threshold: f64) -> Vec<DuplicatePair> {
    use rayon::prelude::*;

    (0..normalized.len())
        .into_par_iter()
        .flat_map_iter(|i| {
            ((i + 1)..normalized.len()).filter_map(move |j| {
                let score = text_similarity(&normalized[i], &normalized[j]);
                (score > threshold).then_some(DuplicatePair {
                    first: i,
                    second: j,
                    similarity: score,
                })
            })
        })
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn scan_pairs_parallel(normalized: &[String], threshold: f64) -> Vec<DuplicatePair> {
    scan_pairs(normalized, threshold)
}

/// Adjacent-pair audit: entry i must not sort after entry i+1.
///
/// Only neighbours are compared; this does not prove a total order.
pub fn check_ordering(entries: &[ReferenceEntry]) -> OrderingResult {
    let keys: Vec<String> = entries.iter().map(|e| ordering_key(e.raw_text())).collect();
    let violations = keys
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| compare_keys(&pair[0], &pair[1]) == Ordering::Greater)
        .map(|(i, pair)| OrderingViolation {
            index: i,
            next_index: i + 1,
            key: pair[0].clone(),
            next_key: pair[1].clone(),
        })
        .collect();
    OrderingResult { violations }
}

fn field_issues(index: usize, fields: &EntryFields) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if !fields.has_valid_author {
        issues.push(ValidationIssue::for_entry(
            index,
            IssueKind::AuthorFormat,
            "Formato de autor incorrecto (debe ser: Apellido, I.)",
        ));
    }

    if !fields.has_valid_year {
        issues.push(ValidationIssue::for_entry(
            index,
            IssueKind::MissingYear,
            "Año no encontrado o formato incorrecto (debe ser: (AAAA))",
        ));
    }

    if !fields.has_valid_conjunction {
        issues.push(ValidationIssue::for_entry(
            index,
            IssueKind::AmpersandConjunction,
            "Usar «y» en lugar de «&» entre autores",
        ));
    }

    if fields.uses_legacy_retrieval_phrase {
        issues.push(ValidationIssue::for_entry(
            index,
            IssueKind::LegacyRetrievalPhrase,
            "APA 7 no usa «Recuperado de»: indicar solo la URL",
        ));
    }

    if fields.uses_foreign_quote_marks {
        issues.push(ValidationIssue::for_entry(
            index,
            IssueKind::ForeignQuoteMarks,
            "Usar comillas angulares « » en lugar de comillas rectas",
        ));
    }

    issues
}
