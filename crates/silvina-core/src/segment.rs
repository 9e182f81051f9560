//! Segmentation of the reference section into individual entries

use lazy_static::lazy_static;
use regex::Regex;
use silvina_domain::ReferenceEntry;

use crate::config::DEFAULT_MIN_ENTRY_LENGTH;
use crate::fields::{count_years, has_personal_author};

lazy_static! {
    // A period followed by the start of a new author field: ". Apellido, I."
    static ref ENTRY_BOUNDARY_REGEX: Regex = Regex::new(
        r"\.\s*\p{Lu}\p{Ll}+(?:-\p{Lu}\p{Ll}+)?,\s+\p{Lu}\."
    ).unwrap();
}

/// Splits a reference section into [`ReferenceEntry`] values
#[derive(Debug, Clone)]
pub struct ReferenceEntrySegmenter {
    min_entry_length: usize,
}

impl Default for ReferenceEntrySegmenter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_ENTRY_LENGTH)
    }
}

impl ReferenceEntrySegmenter {
    pub fn new(min_entry_length: usize) -> Self {
        Self { min_entry_length }
    }

    /// Segment newline-joined reference paragraphs, preserving input order.
    ///
    /// A paragraph holding two or more "(YYYY)" groups is treated as two
    /// entries that lost their paragraph break and is split once, before the
    /// first ". Apellido, I." boundary. Without a boundary it is kept whole.
    pub fn segment(&self, section_text: &str) -> Vec<ReferenceEntry> {
        let mut entries = Vec::new();
        let mut merged = 0usize;

        for piece in section_text.split(['\n', '\r']) {
            let piece = piece.trim();
            if !self.is_entry_candidate(piece) {
                continue;
            }

            if count_years(piece) < 2 {
                entries.push(ReferenceEntry::new(piece));
                continue;
            }

            match split_merged(piece) {
                Some((head, tail)) => {
                    merged += 1;
                    for fragment in [head, tail] {
                        let fragment = fragment.trim();
                        if !self.is_entry_candidate(fragment) {
                            continue;
                        }
                        entries.push(ReferenceEntry::new(terminate(fragment)));
                    }
                }
                None => {
                    tracing::warn!(
                        "No entry boundary in paragraph with {} years, keeping it whole",
                        count_years(piece)
                    );
                    entries.push(ReferenceEntry::new(piece));
                }
            }
        }

        tracing::debug!(
            "Segmented {} reference entries ({} merged paragraphs split)",
            entries.len(),
            merged
        );
        entries
    }

    /// Short pieces are paragraph-splitting artifacts unless they still carry
    /// both an "Apellido, I." author and a "(YYYY)" year.
    fn is_entry_candidate(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        if text.chars().count() >= self.min_entry_length {
            return true;
        }
        has_personal_author(text) && count_years(text) >= 1
    }
}

/// Split at the first boundary, keeping the period with the first fragment
fn split_merged(text: &str) -> Option<(&str, &str)> {
    let boundary = ENTRY_BOUNDARY_REGEX.find(text)?;
    let cut = boundary.start() + '.'.len_utf8();
    Some((&text[..cut], &text[cut..]))
}

fn terminate(fragment: &str) -> String {
    if fragment.ends_with('.') {
        fragment.to_string()
    } else {
        format!("{}.", fragment)
    }
}
