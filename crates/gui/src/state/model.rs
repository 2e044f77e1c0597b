//! The loaded model: owned elements plus a version counter the GPU
//! renderer uses to know when to re-upload meshes.

use glam::Vec3;
use shared::ElementId;

use crate::build::{ContourAttribute, RenderableElement};
use crate::viewport::picking::{self, Aabb, Ray};

/// One element intersected by a pick ray
#[derive(Clone, Debug)]
pub struct ElementHit {
    pub id: ElementId,
    /// Distance from the ray origin to the nearest triangle
    pub distance: f32,
}

#[derive(Default)]
pub struct ModelState {
    elements: Vec<RenderableElement>,
    /// Bumped on every mutation that changes mesh data
    version: u64,
}

impl ModelState {
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn elements(&self) -> &[RenderableElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn element(&self, id: &str) -> Option<&RenderableElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Swap in a freshly assembled set of elements
    pub fn replace(&mut self, elements: Vec<RenderableElement>) {
        self.elements = elements;
        self.version += 1;
    }

    pub fn clear(&mut self) {
        self.elements.clear();
        self.version += 1;
    }

    /// Recolor what is shown without touching the resting color
    pub fn set_display_color(&mut self, id: &str, color: [f32; 3]) {
        if let Some(e) = self.elements.iter_mut().find(|e| e.id == id) {
            e.set_display_color(color);
            self.version += 1;
        }
    }

    /// Recolor both the resting and the shown color
    pub fn set_base_color(&mut self, id: &str, color: [f32; 3]) {
        if let Some(e) = self.elements.iter_mut().find(|e| e.id == id) {
            e.set_base_color(color);
            self.version += 1;
        }
    }

    /// Min and max of the attribute over all elements, None when empty
    pub fn attribute_range(&self, attr: ContourAttribute) -> Option<(f64, f64)> {
        if self.elements.is_empty() {
            return None;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for e in &self.elements {
            let v = e.attributes.value_of(attr);
            min = min.min(v);
            max = max.max(v);
        }
        Some((min, max))
    }

    /// All elements hit by the ray, nearest first.
    ///
    /// AABB test first, exact triangle test only on candidates.
    pub fn pick(&self, ray: &Ray) -> Vec<ElementHit> {
        let mut hits: Vec<ElementHit> = self
            .elements
            .iter()
            .filter(|e| picking::ray_aabb(ray, &e.aabb).is_some())
            .filter_map(|e| {
                picking::pick_triangle(ray, &e.mesh).map(|hit| ElementHit {
                    id: e.id.clone(),
                    distance: hit.distance,
                })
            })
            .collect();

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    /// Bounding box of the whole model, None when empty
    pub fn bounds(&self) -> Option<Aabb> {
        let mut iter = self.elements.iter();
        let first = iter.next()?;
        let mut acc = first.aabb;
        for e in iter {
            acc.min = acc.min.min(e.aabb.min);
            acc.max = acc.max.max(e.aabb.max);
        }
        Some(acc)
    }

    /// Point the camera should orbit around
    pub fn focus_point(&self) -> Vec3 {
        self.bounds().map(|b| b.center()).unwrap_or(Vec3::ZERO)
    }
}
