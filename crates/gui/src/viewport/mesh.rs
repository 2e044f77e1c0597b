use glam::{Quat, Vec3};

/// CPU-side mesh data: interleaved [pos.x, pos.y, pos.z, norm.x, norm.y, norm.z, r, g, b]
#[derive(Clone)]
pub struct MeshData {
    /// 9 floats per vertex: position(3) + normal(3) + color(3)
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 9
    }

    /// Overwrite the color of every vertex in place
    pub fn set_color(&mut self, color: [f32; 3]) {
        for chunk in self.vertices.chunks_exact_mut(9) {
            chunk[6] = color[0];
            chunk[7] = color[1];
            chunk[8] = color[2];
        }
    }

    /// Rotate then translate every vertex (positions and normals)
    pub fn transform(&mut self, rotation: Quat, translation: Vec3) {
        for chunk in self.vertices.chunks_exact_mut(9) {
            let p = rotation * Vec3::new(chunk[0], chunk[1], chunk[2]) + translation;
            let n = rotation * Vec3::new(chunk[3], chunk[4], chunk[5]);
            chunk[0] = p.x;
            chunk[1] = p.y;
            chunk[2] = p.z;
            chunk[3] = n.x;
            chunk[4] = n.y;
            chunk[5] = n.z;
        }
    }
}

/// Lines mesh: interleaved [pos.x, pos.y, pos.z, r, g, b, a]
pub struct LineMeshData {
    /// 7 floats per vertex: position(3) + color(4)
    pub vertices: Vec<f32>,
}

// ── Primitive generation ─────────────────────────────────────

/// Hollow tube centered at the origin along +Y: outer wall, inward-facing
/// inner wall, and two annular end caps.
pub fn tube(outer_radius: f32, inner_radius: f32, height: f32, segments: u32, color: [f32; 3]) -> MeshData {
    let hh = height * 0.5;
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for i in 0..segments {
        let a0 = (i as f32) * std::f32::consts::TAU / segments as f32;
        let a1 = ((i + 1) as f32) * std::f32::consts::TAU / segments as f32;

        let c0 = a0.cos();
        let s0 = a0.sin();
        let c1 = a1.cos();
        let s1 = a1.sin();

        let n0 = Vec3::new(c0, 0.0, s0);
        let n1 = Vec3::new(c1, 0.0, s1);

        // Outer wall quad
        let base = (vertices.len() / 9) as u32;
        push_vert(&mut vertices, outer_radius * c0, -hh, outer_radius * s0, n0, color);
        push_vert(&mut vertices, outer_radius * c1, -hh, outer_radius * s1, n1, color);
        push_vert(&mut vertices, outer_radius * c1, hh, outer_radius * s1, n1, color);
        push_vert(&mut vertices, outer_radius * c0, hh, outer_radius * s0, n0, color);
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);

        // Inner wall quad, normals pointing into the bore, winding flipped
        let base = (vertices.len() / 9) as u32;
        push_vert(&mut vertices, inner_radius * c0, -hh, inner_radius * s0, -n0, color);
        push_vert(&mut vertices, inner_radius * c1, -hh, inner_radius * s1, -n1, color);
        push_vert(&mut vertices, inner_radius * c1, hh, inner_radius * s1, -n1, color);
        push_vert(&mut vertices, inner_radius * c0, hh, inner_radius * s0, -n0, color);
        indices.extend_from_slice(&[base, base + 2, base + 1, base, base + 3, base + 2]);
    }

    // Top ring cap
    add_ring_cap(&mut vertices, &mut indices, outer_radius, inner_radius, hh, segments, Vec3::Y, color, false);
    // Bottom ring cap
    add_ring_cap(&mut vertices, &mut indices, outer_radius, inner_radius, -hh, segments, Vec3::NEG_Y, color, true);

    MeshData { vertices, indices }
}

/// Open-ended truncated cone centered at the origin along +Y: bottom radius
/// at -h/2, top radius at +h/2, no caps.
pub fn frustum(bottom_radius: f32, top_radius: f32, height: f32, segments: u32, color: [f32; 3]) -> MeshData {
    let hh = height * 0.5;
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    // Side slope enters the normal like a cone's
    let slope = (bottom_radius - top_radius) / height;
    for i in 0..segments {
        let a0 = (i as f32) * std::f32::consts::TAU / segments as f32;
        let a1 = ((i + 1) as f32) * std::f32::consts::TAU / segments as f32;

        let c0 = a0.cos();
        let s0 = a0.sin();
        let c1 = a1.cos();
        let s1 = a1.sin();

        let n0 = Vec3::new(c0, slope, s0).normalize();
        let n1 = Vec3::new(c1, slope, s1).normalize();

        let base = (vertices.len() / 9) as u32;
        push_vert(&mut vertices, bottom_radius * c0, -hh, bottom_radius * s0, n0, color);
        push_vert(&mut vertices, bottom_radius * c1, -hh, bottom_radius * s1, n1, color);
        push_vert(&mut vertices, top_radius * c1, hh, top_radius * s1, n1, color);
        push_vert(&mut vertices, top_radius * c0, hh, top_radius * s0, n0, color);
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    MeshData { vertices, indices }
}

/// Horizontal square plane at the given elevation, normals up
pub fn plane(half_size: f32, y: f32, color: [f32; 3]) -> MeshData {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    let base = 0;
    push_vert(&mut vertices, -half_size, y, -half_size, Vec3::Y, color);
    push_vert(&mut vertices, half_size, y, -half_size, Vec3::Y, color);
    push_vert(&mut vertices, half_size, y, half_size, Vec3::Y, color);
    push_vert(&mut vertices, -half_size, y, half_size, Vec3::Y, color);
    indices.extend_from_slice(&[base, base + 2, base + 1, base, base + 3, base + 2]);

    MeshData { vertices, indices }
}

// ── Grid and axes ────────────────────────────────────────────

pub fn grid(range: i32, cell_size: f32, opacity: f32) -> LineMeshData {
    let mut vertices = Vec::new();
    let grid_color = [0.25_f32, 0.25, 0.25, opacity];
    let origin_color_x = [0.5_f32, 0.2, 0.2, opacity * 0.7];
    let origin_color_z = [0.2_f32, 0.2, 0.5, opacity * 0.7];

    let extent = range as f32 * cell_size;

    for i in -range..=range {
        let f = i as f32 * cell_size;
        let color = if i == 0 {
            origin_color_z
        } else {
            grid_color
        };
        // Line along Z
        push_line_vert(&mut vertices, f, 0.0, -extent, color);
        push_line_vert(&mut vertices, f, 0.0, extent, color);

        let color = if i == 0 {
            origin_color_x
        } else {
            grid_color
        };
        // Line along X
        push_line_vert(&mut vertices, -extent, 0.0, f, color);
        push_line_vert(&mut vertices, extent, 0.0, f, color);
    }

    LineMeshData { vertices }
}

pub fn axes(length: f32) -> LineMeshData {
    let mut vertices = Vec::new();
    let r = [0.9_f32, 0.2, 0.2, 1.0];
    let g = [0.2_f32, 0.8, 0.2, 1.0];
    let b = [0.2_f32, 0.3, 0.9, 1.0];

    // X axis
    push_line_vert(&mut vertices, 0.0, 0.0, 0.0, r);
    push_line_vert(&mut vertices, length, 0.0, 0.0, r);
    // Y axis
    push_line_vert(&mut vertices, 0.0, 0.0, 0.0, g);
    push_line_vert(&mut vertices, 0.0, length, 0.0, g);
    // Z axis
    push_line_vert(&mut vertices, 0.0, 0.0, 0.0, b);
    push_line_vert(&mut vertices, 0.0, 0.0, length, b);

    LineMeshData { vertices }
}

// ── Helpers ──────────────────────────────────────────────────

fn push_vert(v: &mut Vec<f32>, px: f32, py: f32, pz: f32, n: Vec3, c: [f32; 3]) {
    v.extend_from_slice(&[px, py, pz, n.x, n.y, n.z, c[0], c[1], c[2]]);
}

fn push_line_vert(v: &mut Vec<f32>, px: f32, py: f32, pz: f32, c: [f32; 4]) {
    v.extend_from_slice(&[px, py, pz, c[0], c[1], c[2], c[3]]);
}

#[allow(clippy::too_many_arguments)]
fn add_ring_cap(
    vertices: &mut Vec<f32>,
    indices: &mut Vec<u32>,
    outer_radius: f32,
    inner_radius: f32,
    y: f32,
    segments: u32,
    normal: Vec3,
    color: [f32; 3],
    reversed: bool,
) {
    for i in 0..segments {
        let a0 = (i as f32) * std::f32::consts::TAU / segments as f32;
        let a1 = ((i + 1) as f32) * std::f32::consts::TAU / segments as f32;

        let c0 = a0.cos();
        let s0 = a0.sin();
        let c1 = a1.cos();
        let s1 = a1.sin();

        let base = (vertices.len() / 9) as u32;
        push_vert(vertices, inner_radius * c0, y, inner_radius * s0, normal, color);
        push_vert(vertices, outer_radius * c0, y, outer_radius * s0, normal, color);
        push_vert(vertices, outer_radius * c1, y, outer_radius * s1, normal, color);
        push_vert(vertices, inner_radius * c1, y, inner_radius * s1, normal, color);

        if reversed {
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        } else {
            indices.extend_from_slice(&[base, base + 2, base + 1, base, base + 3, base + 2]);
        }
    }
}
