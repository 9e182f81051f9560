//! Locating the reference section in a paragraph sequence

use silvina_domain::ReferenceSection;

/// Find the first paragraph containing a heading (case-insensitive substring).
///
/// The heading paragraph itself is excluded; every later non-blank paragraph
/// is trimmed and newline-joined into the section text.
pub fn locate_reference_section<P, H>(paragraphs: &[P], headings: &[H]) -> Option<ReferenceSection>
where
    P: AsRef<str>,
    H: AsRef<str>,
{
    let lowered: Vec<(String, &str)> = headings
        .iter()
        .map(|h| h.as_ref().trim())
        .filter(|h| !h.is_empty())
        .map(|h| (h.to_lowercase(), h))
        .collect();

    let (heading_index, heading) = paragraphs.iter().enumerate().find_map(|(i, p)| {
        let text = p.as_ref().to_lowercase();
        lowered
            .iter()
            .find(|(needle, _)| text.contains(needle.as_str()))
            .map(|(_, original)| (i, original.to_string()))
    })?;

    let text = paragraphs[heading_index + 1..]
        .iter()
        .map(|p| p.as_ref().trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    tracing::debug!(
        "Reference section '{}' found at paragraph {}",
        heading,
        heading_index
    );

    Some(ReferenceSection {
        heading_index,
        heading,
        text,
    })
}

/// Paragraphs preceding the reference heading, or all paragraphs without one
pub fn body_paragraphs<'a, P: AsRef<str>>(
    paragraphs: &'a [P],
    section: Option<&ReferenceSection>,
) -> &'a [P] {
    match section {
        Some(section) => &paragraphs[..section.heading_index.min(paragraphs.len())],
        None => paragraphs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SECTION_HEADINGS;

    #[test]
    fn test_locate_section_excludes_heading() {
        let paragraphs = [
            "Introducción al tema.",
            "REFERENCIAS",
            "García, M. (2020). Título.",
            "   ",
            "López, J. (2019). Otro.",
        ];
        let section = locate_reference_section(&paragraphs, &DEFAULT_SECTION_HEADINGS).unwrap();
        assert_eq!(section.heading_index, 1);
        assert_eq!(section.heading, "Referencias");
        assert_eq!(
            section.text,
            "García, M. (2020). Título.\nLópez, J. (2019). Otro."
        );
    }

    #[test]
    fn test_first_match_wins() {
        let paragraphs = ["Bibliografía consultada", "x", "Referencias", "y"];
        let section = locate_reference_section(&paragraphs, &DEFAULT_SECTION_HEADINGS).unwrap();
        assert_eq!(section.heading_index, 0);
        assert_eq!(section.heading, "Bibliografía");
        assert_eq!(section.text, "x\nReferencias\ny");
    }

    #[test]
    fn test_fuentes_heading() {
        let paragraphs = ["Cuerpo", "Fuentes bibliográficas", "García, M. (2020)."];
        let section = locate_reference_section(&paragraphs, &DEFAULT_SECTION_HEADINGS).unwrap();
        assert_eq!(section.heading, "Fuentes bibliográficas");
    }

    #[test]
    fn test_no_section() {
        let paragraphs = ["Sólo texto.", "Más texto."];
        assert!(locate_reference_section(&paragraphs, &DEFAULT_SECTION_HEADINGS).is_none());
        assert_eq!(body_paragraphs(&paragraphs, None).len(), 2);
    }

    #[test]
    fn test_body_precedes_heading() {
        let paragraphs = ["Uno", "Dos", "Referencias", "García, M. (2020)."];
        let section = locate_reference_section(&paragraphs, &DEFAULT_SECTION_HEADINGS);
        assert_eq!(body_paragraphs(&paragraphs, section.as_ref()), &["Uno", "Dos"]);
    }
}
