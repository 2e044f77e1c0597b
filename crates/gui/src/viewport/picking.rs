use glam::Vec3;

use super::mesh::MeshData;

/// A ray in world space
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Compute AABB from MeshData (9 floats per vertex: pos+normal+color)
    pub fn from_mesh(data: &MeshData) -> Self {
        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);

        let verts = &data.vertices;
        let stride = 9;
        let count = verts.len() / stride;

        for i in 0..count {
            let base = i * stride;
            let x = verts[base];
            let y = verts[base + 1];
            let z = verts[base + 2];
            min.x = min.x.min(x);
            min.y = min.y.min(y);
            min.z = min.z.min(z);
            max.x = max.x.max(x);
            max.y = max.y.max(y);
            max.z = max.z.max(z);
        }

        Self { min, max }
    }

    /// Center of the bounding box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

/// Ray-AABB intersection using the slab method.
/// Returns the distance along the ray to the nearest hit, or None.
pub fn ray_aabb(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    let inv_dir = Vec3::new(
        1.0 / ray.direction.x,
        1.0 / ray.direction.y,
        1.0 / ray.direction.z,
    );

    let t1 = (aabb.min.x - ray.origin.x) * inv_dir.x;
    let t2 = (aabb.max.x - ray.origin.x) * inv_dir.x;
    let t3 = (aabb.min.y - ray.origin.y) * inv_dir.y;
    let t4 = (aabb.max.y - ray.origin.y) * inv_dir.y;
    let t5 = (aabb.min.z - ray.origin.z) * inv_dir.z;
    let t6 = (aabb.max.z - ray.origin.z) * inv_dir.z;

    let tmin = t1.min(t2).max(t3.min(t4)).max(t5.min(t6));
    let tmax = t1.max(t2).min(t3.max(t4)).min(t5.max(t6));

    if tmax < 0.0 || tmin > tmax {
        return None;
    }

    Some(if tmin < 0.0 { tmax } else { tmin })
}

/// Möller-Trumbore ray-triangle intersection algorithm.
/// Returns the distance along the ray if hit, or None if no intersection.
pub fn ray_triangle_intersect(ray: &Ray, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<f32> {
    const EPSILON: f32 = 1e-7;

    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let h = ray.direction.cross(edge2);
    let a = edge1.dot(h);

    // Ray is parallel to triangle
    if a.abs() < EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = ray.origin - v0;
    let u = f * s.dot(h);

    // Outside triangle (u)
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * ray.direction.dot(q);

    // Outside triangle (v)
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);

    // Intersection is behind ray origin
    if t > EPSILON {
        Some(t)
    } else {
        None
    }
}

/// Result of picking a triangle in a mesh
#[derive(Clone, Debug)]
pub struct TriangleHit {
    /// Index of the triangle (into mesh.indices / 3)
    pub triangle_index: usize,
    /// Distance from ray origin to hit point
    pub distance: f32,
}

/// Find the nearest triangle in a mesh intersected by the ray.
pub fn pick_triangle(ray: &Ray, mesh: &MeshData) -> Option<TriangleHit> {
    let stride = 9;
    let indices = &mesh.indices;
    let verts = &mesh.vertices;
    let tri_count = indices.len() / 3;

    let mut best: Option<TriangleHit> = None;

    for tri_idx in 0..tri_count {
        let i0 = indices[tri_idx * 3] as usize;
        let i1 = indices[tri_idx * 3 + 1] as usize;
        let i2 = indices[tri_idx * 3 + 2] as usize;

        let v0 = Vec3::new(
            verts[i0 * stride],
            verts[i0 * stride + 1],
            verts[i0 * stride + 2],
        );
        let v1 = Vec3::new(
            verts[i1 * stride],
            verts[i1 * stride + 1],
            verts[i1 * stride + 2],
        );
        let v2 = Vec3::new(
            verts[i2 * stride],
            verts[i2 * stride + 1],
            verts[i2 * stride + 2],
        );

        if let Some(dist) = ray_triangle_intersect(ray, v0, v1, v2) {
            if best.as_ref().is_none_or(|b| dist < b.distance) {
                best = Some(TriangleHit {
                    triangle_index: tri_idx,
                    distance: dist,
                });
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::mesh;

    fn ray_toward_origin_from(origin: Vec3) -> Ray {
        Ray {
            origin,
            direction: (-origin).normalize(),
        }
    }

    #[test]
    fn test_ray_aabb_hit() {
        let aabb = Aabb {
            min: Vec3::splat(-1.0),
            max: Vec3::splat(1.0),
        };
        let ray = ray_toward_origin_from(Vec3::new(5.0, 0.0, 0.0));
        let dist = ray_aabb(&ray, &aabb).unwrap();
        assert!((dist - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_ray_aabb_miss() {
        let aabb = Aabb {
            min: Vec3::splat(-1.0),
            max: Vec3::splat(1.0),
        };
        let ray = Ray {
            origin: Vec3::new(5.0, 5.0, 0.0),
            direction: Vec3::X,
        };
        assert!(ray_aabb(&ray, &aabb).is_none());
    }

    #[test]
    fn test_ray_aabb_behind() {
        let aabb = Aabb {
            min: Vec3::splat(-1.0),
            max: Vec3::splat(1.0),
        };
        let ray = Ray {
            origin: Vec3::new(5.0, 0.0, 0.0),
            direction: Vec3::X,
        };
        assert!(ray_aabb(&ray, &aabb).is_none());
    }

    #[test]
    fn test_ray_triangle_hit() {
        let ray = Ray {
            origin: Vec3::new(0.2, 0.2, 5.0),
            direction: Vec3::NEG_Z,
        };
        let d = ray_triangle_intersect(
            &ray,
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        assert!((d.unwrap() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_ray_triangle_miss_outside() {
        let ray = Ray {
            origin: Vec3::new(2.0, 2.0, 5.0),
            direction: Vec3::NEG_Z,
        };
        let d = ray_triangle_intersect(
            &ray,
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        assert!(d.is_none());
    }

    #[test]
    fn test_ray_triangle_parallel() {
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 5.0),
            direction: Vec3::X,
        };
        let d = ray_triangle_intersect(
            &ray,
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        assert!(d.is_none());
    }

    #[test]
    fn test_pick_triangle_on_tube() {
        let m = mesh::tube(1.0, 0.8, 2.0, 32, [1.0, 1.0, 1.0]);
        let ray = ray_toward_origin_from(Vec3::new(10.0, 0.0, 0.0));
        let hit = pick_triangle(&ray, &m).unwrap();
        // Nearest surface is the outer wall at x = 1
        assert!((hit.distance - 9.0).abs() < 0.05);
    }

    #[test]
    fn test_pick_triangle_misses_beside_tube() {
        let m = mesh::tube(1.0, 0.8, 2.0, 32, [1.0, 1.0, 1.0]);
        let ray = Ray {
            origin: Vec3::new(10.0, 5.0, 0.0),
            direction: Vec3::NEG_X,
        };
        assert!(pick_triangle(&ray, &m).is_none());
    }

    #[test]
    fn test_aabb_from_tube_mesh() {
        let m = mesh::tube(1.0, 0.8, 4.0, 32, [1.0, 1.0, 1.0]);
        let aabb = Aabb::from_mesh(&m);
        assert!((aabb.min.y + 2.0).abs() < 1e-5);
        assert!((aabb.max.y - 2.0).abs() < 1e-5);
        assert!((aabb.max.x - 1.0).abs() < 1e-3);
        assert_eq!(aabb.center().length(), 0.0);
    }
}
