/// Frustum: six clipping planes for visibility culling.
///
/// Each plane is a Vec4 (A, B, C, D) with Ax + By + Cz + D = 0 and the
/// normal (A, B, C) pointing inward. A point P is inside the frustum if
/// dot(plane, P_homogeneous) >= 0 for all planes.
///
/// The near plane assumes zero-to-one clip depth (Direct3D convention,
/// also what `glam`'s `*_rh` projections produce).

use glam::{Mat4, Vec3, Vec4};
use crate::math::Aabb;

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Six frustum planes for culling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [Vec4; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix.
    ///
    /// Gribb & Hartmann row combinations. A plane whose normal has zero
    /// (or non-finite) length is left unnormalized.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let (r0, r1, r2, r3) = (vp.row(0), vp.row(1), vp.row(2), vp.row(3));

        let mut planes = [
            r3 + r0, // Left
            r3 - r0, // Right
            r3 + r1, // Bottom
            r3 - r1, // Top
            r2,      // Near
            r3 - r2, // Far
        ];

        for plane in &mut planes {
            let normal_len = plane.truncate().length();
            if normal_len > 0.0 && normal_len.is_finite() {
                *plane /= normal_len;
            }
        }

        Self { planes }
    }

    /// Signed distance of `point` to `plane` (positive = inside).
    pub fn signed_distance(plane: &Vec4, point: Vec3) -> f32 {
        plane.truncate().dot(point) + plane.w
    }

    /// Test whether the box `[min, max]` is at least partially inside.
    ///
    /// First a bounding-sphere pass that may only reject, then the exact
    /// positive-vertex test per plane.
    pub fn is_aabb_visible(&self, min: Vec3, max: Vec3) -> bool {
        let center = (min + max) * 0.5;
        let radius = min.distance(max) * 0.5;

        for plane in &self.planes {
            if Self::signed_distance(plane, center) < -radius {
                return false;
            }
        }

        for plane in &self.planes {
            // Corner most aligned with the normal
            let p_vertex = Vec3::new(
                if plane.x >= 0.0 { max.x } else { min.x },
                if plane.y >= 0.0 { max.y } else { min.y },
                if plane.z >= 0.0 { max.z } else { min.z },
            );

            if Self::signed_distance(plane, p_vertex) < 0.0 {
                return false;
            }
        }

        true
    }

    /// `is_aabb_visible` for an [`Aabb`].
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        self.is_aabb_visible(aabb.min, aabb.max)
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
