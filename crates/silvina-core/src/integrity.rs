//! Citation integrity: do in-text citations and the reference list coexist?

use silvina_domain::{CitationOccurrence, IntegrityVerdict, ReferenceEntry, TraceabilityReport};

use crate::fields::extract_year;
use crate::normalization::ordering_key;

/// Reconciles extracted citations against reference entries
#[derive(Debug, Clone, Copy, Default)]
pub struct CitationIntegrityChecker;

impl CitationIntegrityChecker {
    pub fn new() -> Self {
        Self
    }

    /// Section-level classification; single pass, no per-citation matching
    pub fn check(
        &self,
        citations: &[CitationOccurrence],
        reference_entries: &[ReferenceEntry],
    ) -> IntegrityVerdict {
        match (citations.len(), reference_entries.len()) {
            (0, 0) => IntegrityVerdict::AbsentCitationSystem,
            (0, references) => IntegrityVerdict::ReferencesWithoutCitations { references },
            (citations, 0) => IntegrityVerdict::CitationsWithoutReferences { citations },
            (citations, references) => IntegrityVerdict::Present {
                citations,
                references,
            },
        }
    }

    /// Entry-level matching by first surname and year.
    ///
    /// A citation resolves to an entry when its first surname, keyed the same
    /// way as entries, equals the entry's leading token and its four-digit
    /// year equals the entry's "(YYYY)". The disambiguation letter is ignored.
    pub fn trace(
        &self,
        citations: &[CitationOccurrence],
        reference_entries: &[ReferenceEntry],
    ) -> TraceabilityReport {
        let entry_keys: Vec<(String, Option<String>)> = reference_entries
            .iter()
            .map(|e| (ordering_key(e.raw_text()), extract_year(e.raw_text())))
            .collect();

        let mut cited = vec![false; reference_entries.len()];
        let mut unresolved_citations = Vec::new();

        for (ci, citation) in citations.iter().enumerate() {
            let surname = ordering_key(citation.first_author());
            let year = citation.base_year();
            let mut resolved = false;
            for (ei, (key, entry_year)) in entry_keys.iter().enumerate() {
                if *key == surname && entry_year.as_deref() == Some(year) {
                    cited[ei] = true;
                    resolved = true;
                }
            }
            if !resolved {
                unresolved_citations.push(ci);
            }
        }

        let uncited_entries = cited
            .iter()
            .enumerate()
            .filter(|(_, c)| !**c)
            .map(|(i, _)| i)
            .collect();

        TraceabilityReport {
            uncited_entries,
            unresolved_citations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use silvina_domain::CitationStyle;

    fn citation(author: &str, year: &str) -> CitationOccurrence {
        CitationOccurrence {
            authors: vec![author.to_string()],
            et_al: false,
            year: year.to_string(),
            paragraph_index: 0,
            style: CitationStyle::Parenthetical,
            page_or_paragraph_ref: None,
            char_offset: 0,
            raw_text: format!("({}, {})", author, year),
        }
    }

    fn entry(text: &str) -> ReferenceEntry {
        ReferenceEntry::new(text)
    }

    #[test]
    fn test_four_states() {
        let checker = CitationIntegrityChecker::new();
        let refs = vec![entry("García, M. (2020). Título.")];
        let cits = vec![citation("García", "2020")];

        assert_eq!(
            checker.check(&[], &refs),
            IntegrityVerdict::ReferencesWithoutCitations { references: 1 }
        );
        assert_eq!(
            checker.check(&cits, &[]),
            IntegrityVerdict::CitationsWithoutReferences { citations: 1 }
        );
        assert_eq!(checker.check(&[], &[]), IntegrityVerdict::AbsentCitationSystem);
        assert_eq!(
            checker.check(&cits, &refs),
            IntegrityVerdict::Present {
                citations: 1,
                references: 1
            }
        );
    }

    #[test]
    fn test_trace_matches_surname_and_year() {
        let refs = vec![
            entry("Álvarez, B. (2021). Uno."),
            entry("García, M. (2020). Dos."),
            entry("Torres, P. (2018). Tres."),
        ];
        let cits = vec![
            citation("Alvarez", "2021a"),
            citation("García", "2020"),
            citation("García", "2019"),
        ];
        let report = CitationIntegrityChecker::new().trace(&cits, &refs);
        assert_eq!(report.uncited_entries, vec![2]);
        assert_eq!(report.unresolved_citations, vec![2]);
        assert!(!report.is_fully_traced());
    }

    #[test]
    fn test_trace_distinguishes_enye() {
        let refs = vec![
            entry("Ñandú, R. (2019). Aves del Chaco."),
            entry("Nandu, S. (2019). Otro autor."),
        ];
        let report = CitationIntegrityChecker::new().trace(&[citation("Ñandú", "2019")], &refs);
        assert_eq!(report.uncited_entries, vec![1]);
        assert!(report.unresolved_citations.is_empty());
    }

    #[test]
    fn test_trace_empty() {
        let report = CitationIntegrityChecker::new().trace(&[], &[]);
        assert!(report.is_fully_traced());
    }
}
