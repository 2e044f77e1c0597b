//! Element geometry builders: straight and tapered tubes.
//!
//! Input coordinates are Z-up (the source convention); render space is
//! Y-up, so endpoints are remapped before meshing.

use glam::{Quat, Vec3};
use shared::{ModelError, ModelResult};

use super::element::{AttributeRecord, RenderableElement, DEFAULT_COLOR};
use crate::viewport::mesh;

/// Radial tessellation of tube walls
pub const RADIAL_SEGMENTS: u32 = 32;

/// Z-up source point to Y-up render point
pub fn to_render_space(p: [f64; 3]) -> Vec3 {
    Vec3::new(p[0] as f32, p[2] as f32, p[1] as f32)
}

fn validate_endpoints(start: [f64; 3], end: [f64; 3]) -> ModelResult<(Vec3, Vec3)> {
    for v in start.iter().chain(end.iter()) {
        if !v.is_finite() {
            return Err(ModelError::InvalidGeometryInput(
                "non-finite node coordinate".to_string(),
            ));
        }
    }
    let a = to_render_space(start);
    let b = to_render_space(end);
    if (b - a).length_squared() <= f32::EPSILON {
        return Err(ModelError::InvalidGeometryInput(
            "coincident element endpoints".to_string(),
        ));
    }
    Ok((a, b))
}

fn validate_section(od: f64, thk: f64) -> ModelResult<()> {
    if !od.is_finite() || !thk.is_finite() {
        return Err(ModelError::InvalidGeometryInput(
            "non-finite section value".to_string(),
        ));
    }
    if od <= 0.0 {
        return Err(ModelError::InvalidGeometryInput(format!(
            "outer diameter must be positive, got {od}"
        )));
    }
    if thk <= 0.0 {
        return Err(ModelError::InvalidGeometryInput(format!(
            "wall thickness must be positive, got {thk}"
        )));
    }
    if thk >= od / 2.0 {
        return Err(ModelError::InvalidGeometryInput(format!(
            "wall thickness {thk} leaves no bore at outer diameter {od}"
        )));
    }
    Ok(())
}

/// Ориентировать меш, построенный вдоль +Y, по оси start→end
fn orient(mut m: mesh::MeshData, a: Vec3, b: Vec3, attributes: AttributeRecord) -> RenderableElement {
    let axis = (b - a).normalize();
    let rotation = Quat::from_rotation_arc(Vec3::Y, axis);
    m.transform(rotation, (a + b) * 0.5);
    RenderableElement::new(m, attributes)
}

/// Труба постоянного кольцевого сечения между двумя узлами
pub fn straight_tube(
    start: [f64; 3],
    end: [f64; 3],
    outer_diameter: f64,
    wall_thickness: f64,
) -> ModelResult<RenderableElement> {
    validate_section(outer_diameter, wall_thickness)?;
    let (a, b) = validate_endpoints(start, end)?;

    let outer_r = (outer_diameter / 2.0) as f32;
    let inner_r = (outer_diameter / 2.0 - wall_thickness) as f32;
    let length = (b - a).length();

    let m = mesh::tube(outer_r, inner_r, length, RADIAL_SEGMENTS, DEFAULT_COLOR);
    Ok(orient(
        m,
        a,
        b,
        AttributeRecord::from_section(outer_diameter, wall_thickness),
    ))
}

/// Коническая секция между двумя узлами.
///
/// Геометрия — открытый усечённый конус по наружным диаметрам; запись
/// атрибутов несёт значения начального конца.
pub fn tapered_tube(
    start: [f64; 3],
    end: [f64; 3],
    outer_diameter_a: f64,
    wall_thickness_a: f64,
    outer_diameter_b: f64,
    wall_thickness_b: f64,
) -> ModelResult<RenderableElement> {
    validate_section(outer_diameter_a, wall_thickness_a)?;
    validate_section(outer_diameter_b, wall_thickness_b)?;
    let (a, b) = validate_endpoints(start, end)?;

    let length = (b - a).length();
    let m = mesh::frustum(
        (outer_diameter_a / 2.0) as f32,
        (outer_diameter_b / 2.0) as f32,
        length,
        RADIAL_SEGMENTS,
        DEFAULT_COLOR,
    );
    Ok(orient(
        m,
        a,
        b,
        AttributeRecord::from_section(outer_diameter_a, wall_thickness_a),
    ))
}
