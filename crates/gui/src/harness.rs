//! Headless test harness for programmatic model manipulation.
//!
//! Drives the full load → assemble → hover → contour pipeline without a
//! window or GL context.

use glam::Vec3;
use shared::{Document, ModelResult};

use crate::build::{assemble, ContourAttribute};
use crate::state::{ContourState, ElementHit, HoverState, HoverTransition, ModelState};
use crate::validation::MeshValidator;
use crate::viewport::picking::Ray;

/// Headless test harness — model, hover and contour state in one place
pub struct TestHarness {
    pub model: ModelState,
    pub hover: HoverState,
    pub contour: ContourState,
    last_diagnostics: Vec<String>,
}

impl TestHarness {
    /// Create a new empty harness.
    pub fn new() -> Self {
        Self {
            model: ModelState::default(),
            hover: HoverState::default(),
            contour: ContourState::default(),
            last_diagnostics: Vec::new(),
        }
    }

    // ── Loading ───────────────────────────────────────────────

    /// Assemble a document into the model (replaces current)
    pub fn load_document(&mut self, doc: &Document) {
        let (elements, diagnostics) = assemble(doc);
        self.hover.reset(&mut self.model);
        self.model.replace(elements);
        self.last_diagnostics = diagnostics;
        if self.contour.is_enabled() {
            self.contour.apply(&mut self.model);
        }
    }

    /// Parse and assemble a JSON document
    pub fn load_json(&mut self, json: &str) -> ModelResult<()> {
        let doc = Document::from_json(json)?;
        self.load_document(&doc);
        Ok(())
    }

    /// Skip diagnostics of the last load
    pub fn diagnostics(&self) -> &[String] {
        &self.last_diagnostics
    }

    // ── Interaction ───────────────────────────────────────────

    /// Pick along a ray and advance the hover machine one frame
    pub fn hover_along(&mut self, ray: &Ray) -> HoverTransition {
        let nearest = self.model.pick(ray).first().map(|h| h.id.clone());
        self.hover.update(&mut self.model, nearest)
    }

    /// Hover a ray aimed at an element's AABB center from +Z.
    ///
    /// Fixtures space their elements along X, so the ray crosses only
    /// the targeted one.
    pub fn hover_element(&mut self, index: usize) -> HoverTransition {
        let target = self.model.elements()[index].aabb.center();
        let origin = target + Vec3::new(0.0, 0.0, 50.0);
        let ray = Ray {
            origin,
            direction: (target - origin).normalize(),
        };
        self.hover_along(&ray)
    }

    /// Move the cursor to empty space
    pub fn hover_nothing(&mut self) -> HoverTransition {
        self.hover.update(&mut self.model, None)
    }

    /// Enable contouring on the given attribute
    pub fn enable_contour(&mut self, attribute: ContourAttribute) -> ModelResult<()> {
        self.contour.attribute = attribute;
        self.contour.enable(&mut self.model)
    }

    pub fn disable_contour(&mut self) {
        self.contour.disable(&mut self.model);
    }

    // ── Inspection ────────────────────────────────────────────

    pub fn element_count(&self) -> usize {
        self.model.len()
    }

    /// All elements hit by a ray, nearest first
    pub fn pick(&self, ray: &Ray) -> Vec<ElementHit> {
        self.model.pick(ray)
    }

    /// Display color of the element at `index`
    pub fn display_color(&self, index: usize) -> [f32; 3] {
        self.model.elements()[index].display_color
    }

    /// Create a validator for an element's mesh
    pub fn validate_mesh(&self, index: usize) -> MeshValidator {
        MeshValidator::new(&self.model.elements()[index].mesh)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{DEFAULT_COLOR, HIGHLIGHT_COLOR};
    use crate::fixtures::*;

    #[test]
    fn test_new_harness_empty() {
        let h = TestHarness::new();
        assert_eq!(h.element_count(), 0);
    }

    #[test]
    fn test_load_document() {
        let mut h = TestHarness::new();
        h.load_document(&document_straight_group(&[0.5, 1.0]));
        assert_eq!(h.element_count(), 2);
        assert!(h.diagnostics().is_empty());
    }

    #[test]
    fn test_load_json() {
        let mut h = TestHarness::new();
        h.load_json(json_single_straight()).unwrap();
        assert_eq!(h.element_count(), 1);
    }

    #[test]
    fn test_load_bad_json_is_error() {
        let mut h = TestHarness::new();
        assert!(h.load_json("{ not json").is_err());
        assert_eq!(h.element_count(), 0);
    }

    #[test]
    fn test_hover_element_highlights() {
        let mut h = TestHarness::new();
        h.load_document(&document_single_straight());
        let t = h.hover_element(0);
        assert!(matches!(t, HoverTransition::Enter(_)));
        assert_eq!(h.display_color(0), HIGHLIGHT_COLOR);

        h.hover_nothing();
        assert_eq!(h.display_color(0), DEFAULT_COLOR);
    }

    #[test]
    fn test_contour_enable_disable() {
        let mut h = TestHarness::new();
        h.load_document(&document_thickness_spread());
        h.enable_contour(ContourAttribute::WallThickness).unwrap();
        assert_ne!(h.display_color(0), DEFAULT_COLOR);

        h.disable_contour();
        assert_eq!(h.display_color(0), DEFAULT_COLOR);
    }

    #[test]
    fn test_validate_loaded_meshes() {
        let mut h = TestHarness::new();
        h.load_document(&document_straight_group(&[0.5, 1.0]));
        for i in 0..h.element_count() {
            let v = h.validate_mesh(i);
            assert!(v.validate_all().is_empty());
            assert!(v.vertex_count() > 0);
        }
    }
}
