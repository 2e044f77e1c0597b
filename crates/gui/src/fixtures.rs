//! Test fixtures: document and element factories used across unit and
//! integration tests.

use shared::{Document, Element, Member, Node, NumericValue, Section};

pub fn node(x: f64, y: f64, z: f64) -> Node {
    Node {
        x: NumericValue(x),
        y: NumericValue(y),
        z: NumericValue(z),
    }
}

pub fn uniform_section(dia: f64, thk: f64) -> Section {
    Section {
        kind: shared::SECTION_CYLINDRICAL.to_string(),
        dia_a: Some(NumericValue(dia)),
        thk_a: Some(NumericValue(thk)),
        dia_b: None,
        thk_b: None,
    }
}

pub fn tapered_section(dia_a: f64, thk_a: f64, dia_b: f64, thk_b: f64) -> Section {
    Section {
        kind: "ConicalHS".to_string(),
        dia_a: Some(NumericValue(dia_a)),
        thk_a: Some(NumericValue(thk_a)),
        dia_b: Some(NumericValue(dia_b)),
        thk_b: Some(NumericValue(thk_b)),
    }
}

pub fn straight_element(start: Node, end: Node, dia: f64, thk: f64) -> Element {
    Element {
        node_a: Some(start),
        node_b: Some(end),
        section: Some(uniform_section(dia, thk)),
    }
}

pub fn document(members: Vec<Member>) -> Document {
    Document { members }
}

/// One vertical 10 m CylindricalHS element, OD 0.5 m, wall 0.02 m
pub fn document_single_straight() -> Document {
    document(vec![Member {
        elements: vec![straight_element(
            node(0.0, 0.0, 0.0),
            node(0.0, 0.0, 10.0),
            0.5,
            0.02,
        )],
    }])
}

/// One tapered element, OD 2.0 → 1.0 m
pub fn document_single_tapered() -> Document {
    document(vec![Member {
        elements: vec![Element {
            node_a: Some(node(0.0, 0.0, 0.0)),
            node_b: Some(node(0.0, 0.0, 10.0)),
            section: Some(tapered_section(2.0, 0.1, 1.0, 0.05)),
        }],
    }])
}

/// One member with a vertical element per given outer diameter, spaced
/// 5 m apart along X, wall thickness OD/25
pub fn document_straight_group(diameters: &[f64]) -> Document {
    let elements = diameters
        .iter()
        .enumerate()
        .map(|(i, &dia)| {
            let x = i as f64 * 5.0;
            straight_element(node(x, 0.0, 0.0), node(x, 0.0, 10.0), dia, dia / 25.0)
        })
        .collect();

    document(vec![Member { elements }])
}

/// Group with wall thicknesses 10, 20 and 30 mm on equal 0.5 m tubes
pub fn document_thickness_spread() -> Document {
    let elements = [0.010, 0.020, 0.030]
        .iter()
        .enumerate()
        .map(|(i, &thk)| {
            let x = i as f64 * 5.0;
            straight_element(node(x, 0.0, 0.0), node(x, 0.0, 10.0), 0.5, thk)
        })
        .collect();

    document(vec![Member { elements }])
}

/// JSON text of `document_single_straight`, numeric fields as strings
/// the way exported files write them
pub fn json_single_straight() -> &'static str {
    r#"{
        "members": [
            { "elements": [ {
                "node_A": { "x": "0", "y": "0", "z": "0" },
                "node_B": { "x": "0", "y": "0", "z": "10" },
                "section": { "type": "CylindricalHS", "dia_A": "0.5", "thk_A": "0.02" }
            } ] }
        ]
    }"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_straight_fixture_shape() {
        let doc = document_single_straight();
        assert_eq!(doc.element_count(), 1);
        assert!(doc.members[0].elements[0]
            .section
            .as_ref()
            .unwrap()
            .is_uniform());
    }

    #[test]
    fn test_straight_group_count() {
        let doc = document_straight_group(&[0.5, 1.0, 1.5, 2.0]);
        assert_eq!(doc.element_count(), 4);
    }

    #[test]
    fn test_json_fixture_parses_to_same_document() {
        let parsed = Document::from_json(json_single_straight()).unwrap();
        assert_eq!(parsed, document_single_straight());
    }

    #[test]
    fn test_thickness_spread_values() {
        let doc = document_thickness_spread();
        let thks: Vec<f64> = doc.members[0]
            .elements
            .iter()
            .map(|e| e.section.as_ref().unwrap().thk_a.unwrap().get())
            .collect();
        assert_eq!(thks, vec![0.010, 0.020, 0.030]);
    }
}
