use crate::viewport::mesh::MeshData;
use crate::viewport::picking::Aabb;

/// Resting amber color of every element (matches the legacy viewer)
pub const DEFAULT_COLOR: [f32; 3] = [0.969, 0.710, 0.0];

/// Hover highlight color
pub const HIGHLIGHT_COLOR: [f32; 3] = [1.0, 0.0, 0.0];

/// Per-element attribute usable for contouring
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContourAttribute {
    OuterDiameter,
    InnerDiameter,
    WallThickness,
}

impl ContourAttribute {
    pub fn all() -> [ContourAttribute; 3] {
        [
            ContourAttribute::OuterDiameter,
            ContourAttribute::InnerDiameter,
            ContourAttribute::WallThickness,
        ]
    }
}

/// Derived section attributes, in meters.
///
/// For tapered elements these carry the start-end values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttributeRecord {
    pub outer_diameter: f64,
    pub inner_diameter: f64,
    pub wall_thickness: f64,
}

impl AttributeRecord {
    /// Derive the record from outer diameter and wall thickness
    pub fn from_section(outer_diameter: f64, wall_thickness: f64) -> Self {
        AttributeRecord {
            outer_diameter,
            inner_diameter: outer_diameter - 2.0 * wall_thickness,
            wall_thickness,
        }
    }

    pub fn value_of(&self, attr: ContourAttribute) -> f64 {
        match attr {
            ContourAttribute::OuterDiameter => self.outer_diameter,
            ContourAttribute::InnerDiameter => self.inner_diameter,
            ContourAttribute::WallThickness => self.wall_thickness,
        }
    }
}

/// One displayable structural element: mesh in render space plus the
/// attributes and colors the interaction layers work with.
#[derive(Clone)]
pub struct RenderableElement {
    /// Stable identity for hover tracking and GPU mesh keys
    pub id: shared::ElementId,
    pub mesh: MeshData,
    pub aabb: Aabb,
    pub attributes: AttributeRecord,
    /// Color the element returns to when hover leaves
    pub base_color: [f32; 3],
    /// Color currently baked into the mesh vertices
    pub display_color: [f32; 3],
}

impl RenderableElement {
    pub fn new(mesh: MeshData, attributes: AttributeRecord) -> Self {
        let aabb = Aabb::from_mesh(&mesh);
        RenderableElement {
            id: uuid::Uuid::new_v4().to_string(),
            mesh,
            aabb,
            attributes,
            base_color: DEFAULT_COLOR,
            display_color: DEFAULT_COLOR,
        }
    }

    /// Change only what is shown, keeping the resting color
    pub fn set_display_color(&mut self, color: [f32; 3]) {
        self.display_color = color;
        self.mesh.set_color(color);
    }

    /// Change both the resting and the shown color (contour apply/clear)
    pub fn set_base_color(&mut self, color: [f32; 3]) {
        self.base_color = color;
        self.set_display_color(color);
    }
}
