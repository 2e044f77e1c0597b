//! Document → renderable elements.
//!
//! `assemble` walks the members of a parsed document, builds a mesh per
//! element and collects positional diagnostics for everything it skips.
//! One defective element never blanks the rest of the structure.

pub mod element;
pub mod tube;

pub use element::{
    AttributeRecord, ContourAttribute, RenderableElement, DEFAULT_COLOR, HIGHLIGHT_COLOR,
};
pub use tube::{straight_tube, tapered_tube, to_render_space};

use shared::{Document, Element, ModelResult, NumericValue};

fn require<T: Copy>(v: Option<T>, what: &str) -> Result<T, String> {
    v.ok_or_else(|| format!("missing {what}"))
}

fn require_num(v: Option<NumericValue>, what: &str) -> Result<f64, String> {
    require(v, what).map(NumericValue::get)
}

fn build_element(e: &Element) -> Result<ModelResult<RenderableElement>, String> {
    let node_a = require(e.node_a, "node_A")?;
    let node_b = require(e.node_b, "node_B")?;
    let section = e.section.as_ref().ok_or_else(|| "missing section".to_string())?;

    let start = node_a.coords();
    let end = node_b.coords();
    let dia_a = require_num(section.dia_a, "dia_A")?;
    let thk_a = require_num(section.thk_a, "thk_A")?;

    if section.is_uniform() {
        Ok(straight_tube(start, end, dia_a, thk_a))
    } else {
        let dia_b = require_num(section.dia_b, "dia_B")?;
        let thk_b = require_num(section.thk_b, "thk_B")?;
        Ok(tapered_tube(start, end, dia_a, thk_a, dia_b, thk_b))
    }
}

/// Build every element of the document.
///
/// Returns the renderable elements plus one diagnostic string per skipped
/// element, positioned as "member i, element j: reason".
pub fn assemble(doc: &Document) -> (Vec<RenderableElement>, Vec<String>) {
    let mut elements = Vec::with_capacity(doc.element_count());
    let mut diagnostics = Vec::new();

    for (m_idx, member) in doc.members.iter().enumerate() {
        for (e_idx, element) in member.elements.iter().enumerate() {
            let outcome = match build_element(element) {
                Ok(Ok(renderable)) => {
                    elements.push(renderable);
                    continue;
                }
                Ok(Err(model_err)) => model_err.to_string(),
                Err(field_err) => field_err,
            };

            let diag = format!("member {m_idx}, element {e_idx}: {outcome}");
            tracing::warn!("skipping element: {diag}");
            diagnostics.push(diag);
        }
    }

    (elements, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::*;

    #[test]
    fn test_assemble_single_element() {
        let doc = document_single_straight();
        let (elements, diagnostics) = assemble(&doc);
        assert!(diagnostics.is_empty(), "diagnostics: {:?}", diagnostics);
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].attributes.outer_diameter, 0.5);
    }

    #[test]
    fn test_assemble_empty_document() {
        let (elements, diagnostics) = assemble(&Document::default());
        assert!(elements.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_assemble_skips_element_missing_section() {
        let mut doc = document_single_straight();
        doc.members[0].elements[0].section = None;
        let (elements, diagnostics) = assemble(&doc);
        assert!(elements.is_empty());
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].contains("member 0, element 0"));
        assert!(diagnostics[0].contains("missing section"));
    }

    #[test]
    fn test_assemble_continues_past_bad_element() {
        let mut doc = document_straight_group(&[0.5, 1.0, 1.5]);
        // Break the middle one
        doc.members[0].elements[1].node_b = doc.members[0].elements[1].node_a;
        let (elements, diagnostics) = assemble(&doc);
        assert_eq!(elements.len(), 2);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].contains("element 1"));
    }

    #[test]
    fn test_assemble_tapered_element() {
        let doc = document_single_tapered();
        let (elements, diagnostics) = assemble(&doc);
        assert!(diagnostics.is_empty(), "diagnostics: {:?}", diagnostics);
        assert_eq!(elements.len(), 1);
    }

    #[test]
    fn test_assemble_tapered_requires_b_end() {
        let mut doc = document_single_tapered();
        doc.members[0].elements[0].section.as_mut().unwrap().dia_b = None;
        let (elements, diagnostics) = assemble(&doc);
        assert!(elements.is_empty());
        assert!(diagnostics[0].contains("missing dia_B"));
    }

    #[test]
    fn test_assemble_positions_span_members() {
        let mut doc = document_straight_group(&[0.5]);
        doc.members.push(shared::Member {
            elements: vec![shared::Element {
                node_a: None,
                node_b: None,
                section: None,
            }],
        });
        let (_, diagnostics) = assemble(&doc);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].starts_with("member 1, element 0"));
    }
}
