//! The editorial engine: one call from document paragraphs to a report

use silvina_domain::ValidationReport;

use crate::analyzer::ReferenceListAnalyzer;
use crate::citations::CitationExtractor;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::integrity::CitationIntegrityChecker;
use crate::review::{run_review, ProseReviewer};
use crate::section::{body_paragraphs, locate_reference_section};
use crate::segment::ReferenceEntrySegmenter;

/// Runs every check over an immutable paragraph sequence.
///
/// Construction is the only fallible step. Once built, [`EditorialEngine::analyze`]
/// accepts any text and always returns a report.
pub struct EditorialEngine {
    config: EngineConfig,
    segmenter: ReferenceEntrySegmenter,
    analyzer: ReferenceListAnalyzer,
    extractor: CitationExtractor,
    checker: CitationIntegrityChecker,
    reviewer: Option<Box<dyn ProseReviewer>>,
}

impl std::fmt::Debug for EditorialEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorialEngine")
            .field("config", &self.config)
            .field("has_reviewer", &self.reviewer.is_some())
            .finish()
    }
}

impl EditorialEngine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let extractor = CitationExtractor::from_config(&config)?;
        Ok(Self {
            segmenter: ReferenceEntrySegmenter::new(config.min_entry_length),
            analyzer: ReferenceListAnalyzer::from_config(&config),
            extractor,
            checker: CitationIntegrityChecker::new(),
            reviewer: None,
            config,
        })
    }

    /// Attach a prose reviewer; its outcome lands in `ValidationReport::prose_review`
    pub fn with_reviewer(mut self, reviewer: impl ProseReviewer + 'static) -> Self {
        self.reviewer = Some(Box::new(reviewer));
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn analyze<S: AsRef<str>>(&self, paragraphs: &[S]) -> ValidationReport {
        let section = locate_reference_section(paragraphs, &self.config.section_headings);
        let entries = match &section {
            Some(section) => self.segmenter.segment(&section.text),
            None => Vec::new(),
        };

        let analysis = self.analyzer.analyze(&entries);
        let issues = analysis.all_issues();
        let valid_entries = analysis.valid_entries();

        let body = body_paragraphs(paragraphs, section.as_ref());
        let citations = self.extractor.extract(body);
        let verdict = self.checker.check(&citations, &entries);
        let traceability = self.checker.trace(&citations, &entries);

        let prose_review = self.reviewer.as_deref().map(|reviewer| {
            let text = body
                .iter()
                .map(|p| p.as_ref().trim())
                .filter(|p| !p.is_empty())
                .collect::<Vec<_>>()
                .join("\n");
            run_review(reviewer, &text, self.config.review_char_limit)
        });

        tracing::info!(
            "Analyzed {} paragraphs: {} entries ({} valid), {} citations, verdict {:?}",
            paragraphs.len(),
            entries.len(),
            valid_entries,
            citations.len(),
            verdict
        );

        ValidationReport {
            section,
            total_entries: entries.len(),
            valid_entries,
            entries,
            fields: analysis.fields,
            issues,
            ordering: analysis.ordering,
            duplicates: analysis.duplicates,
            citations,
            verdict,
            traceability,
            prose_review,
        }
    }
}
