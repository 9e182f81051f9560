//! Property-based checks for the engine's invariants

use proptest::prelude::*;
use regex::Regex;
use silvina_core::{
    similarity, ApaFieldValidator, EditorialEngine, EngineConfig, ReferenceEntry,
    ReferenceEntrySegmenter,
};

/// "Apellido, I. (YYYY). Título de la obra." with an ASCII surname
fn entry_strategy() -> impl Strategy<Value = String> {
    ("[A-Z][a-z]{2,9}", "[A-Z]", 1900u32..2030, "[a-z]{3,8}( [a-z]{2,8}){1,4}").prop_map(
        |(surname, initial, year, title)| format!("{}, {}. ({}). Obra {}.", surname, initial, year, title),
    )
}

/// A section line: one entry, or two entries that lost their paragraph break
fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        entry_strategy(),
        (entry_strategy(), entry_strategy()).prop_map(|(a, b)| format!("{} {}", a, b)),
    ]
}

/// Any paragraph: free text, headings, citation-like and year-like fragments
fn paragraph_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "\\PC{0,80}",
        Just("Referencias".to_string()),
        Just("BIBLIOGRAFÍA".to_string()),
        line_strategy(),
        "[A-Za-zÁÉÍÓÚÑáéíóúñ ,.&()]{0,20}\\([0-9]{2,5}[a-z]?\\)[a-z .]{0,10}",
        "\\([A-ZÑ][a-zñ]{1,6}( (y|&) [A-Z][a-z]{1,6})?( et al\\.)?, [0-9]{4}(, (p|pp|párr)\\. ?[0-9]{0,3})?\\)?",
    ]
}

fn texts(entries: &[ReferenceEntry]) -> Vec<String> {
    entries.iter().map(|e| e.raw_text().to_string()).collect()
}

proptest! {
    #[test]
    fn test_year_valid_iff_parenthesized_year(text in "\\PC{0,60}") {
        let year = Regex::new(r"\([0-9]{4}\)").unwrap();
        let fields = ApaFieldValidator::new().validate(&ReferenceEntry::new(text.clone()));
        prop_assert_eq!(fields.has_valid_year, year.is_match(&text));
    }

    #[test]
    fn test_year_valid_with_embedded_year(prefix in "[a-zA-Z ,.]{0,20}", year in 1000u32..10000) {
        let text = format!("{}({}). Resto", prefix, year);
        let fields = ApaFieldValidator::new().validate(&ReferenceEntry::new(text));
        prop_assert!(fields.has_valid_year);
        prop_assert_eq!(fields.year, Some(year.to_string()));
    }

    #[test]
    fn test_similarity_symmetric(a in "\\PC{0,40}", b in "\\PC{0,40}") {
        prop_assert_eq!(similarity(&a, &b), similarity(&b, &a));
    }

    #[test]
    fn test_similarity_bounded(a in "\\PC{0,40}", b in "\\PC{0,40}") {
        let score = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score), "similarity out of range: {}", score);
    }

    #[test]
    fn test_segmentation_preserves_order(lines in prop::collection::vec(entry_strategy(), 1..8)) {
        let entries = ReferenceEntrySegmenter::default().segment(&lines.join("\n"));
        prop_assert_eq!(texts(&entries), lines);
    }

    #[test]
    fn test_merged_lines_split_in_order(a in entry_strategy(), b in entry_strategy()) {
        let entries = ReferenceEntrySegmenter::default().segment(&format!("{} {}", a, b));
        prop_assert_eq!(texts(&entries), vec![a, b]);
    }

    #[test]
    fn test_segmentation_idempotent(lines in prop::collection::vec(line_strategy(), 0..6)) {
        let segmenter = ReferenceEntrySegmenter::default();
        let once = texts(&segmenter.segment(&lines.join("\n")));
        let twice = texts(&segmenter.segment(&once.join("\n")));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_engine_accepts_any_paragraphs(
        paragraphs in prop::collection::vec(paragraph_strategy(), 0..12)
    ) {
        let engine = EditorialEngine::new(EngineConfig::default()).unwrap();
        let report = engine.analyze(&paragraphs);
        prop_assert_eq!(report.total_entries, report.entries.len());
        prop_assert_eq!(report.fields.len(), report.entries.len());
        prop_assert!(report.valid_entries <= report.total_entries);
        prop_assert!(report.citations.iter().all(|c| !c.authors.is_empty()));
        prop_assert!(report.citations.iter().all(|c| c.paragraph_index < paragraphs.len()));
    }
}
