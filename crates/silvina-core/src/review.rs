//! Optional prose review capability
//!
//! Grammar and style review happens outside the engine (typically a language
//! model). Callers inject an implementation; the engine records the outcome
//! as a value and never fails because of it.

use silvina_domain::ProseReview;

use crate::error::ReviewError;
use crate::normalization::truncate_chars;

/// A service that reviews body prose and returns its comments
pub trait ProseReviewer: Send + Sync {
    fn review(&self, text: &str) -> Result<String, ReviewError>;
}

impl<F> ProseReviewer for F
where
    F: Fn(&str) -> Result<String, ReviewError> + Send + Sync,
{
    fn review(&self, text: &str) -> Result<String, ReviewError> {
        self(text)
    }
}

/// Run a reviewer over the first `char_limit` characters of `text`
pub(crate) fn run_review(reviewer: &dyn ProseReviewer, text: &str, char_limit: usize) -> ProseReview {
    let sample = truncate_chars(text, char_limit);
    match reviewer.review(sample) {
        Ok(comments) => ProseReview::Completed(comments),
        Err(e) => {
            tracing::warn!("Prose review failed: {}", e);
            ProseReview::Failed(e.to_string())
        }
    }
}
