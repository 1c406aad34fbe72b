/// Axis-aligned bounding boxes.
///
/// Queue items report their bounds in world space. A box whose corners are
/// both exactly zero is the "no culling" sentinel; a degenerate box is
/// treated the same way by the queue.

use glam::{Mat4, Vec3};

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl Aabb {
    /// The zero/zero sentinel: never culled.
    pub const NO_CULLING: Aabb = Aabb { min: Vec3::ZERO, max: Vec3::ZERO };

    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box centered on `center` with half-size `half_extents`.
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Half the diagonal length. Conservative radius of the enclosing sphere.
    pub fn bounding_radius(&self) -> f32 {
        self.min.distance(self.max) * 0.5
    }

    /// True for the zero/zero "always visible" sentinel.
    pub fn is_cull_sentinel(&self) -> bool {
        self.min == Vec3::ZERO && self.max == Vec3::ZERO
    }

    /// True when the box cannot be culled meaningfully: a NaN component,
    /// or `min > max` on any axis.
    pub fn is_degenerate(&self) -> bool {
        if self.min.is_nan() || self.max.is_nan() {
            return true;
        }
        self.min.cmpgt(self.max).any()
    }

    /// Whether the queue should run a frustum test on this box at all.
    pub fn is_cullable(&self) -> bool {
        !self.is_cull_sentinel() && !self.is_degenerate()
    }

    /// Transform this local-space AABB by a matrix, returning a new AABB.
    ///
    /// Uses the Arvo method: projects each matrix axis onto the AABB extents
    /// for a tight result without transforming all 8 corners.
    pub fn transformed(&self, matrix: &Mat4) -> Aabb {
        let translation = matrix.col(3).truncate();
        let mut new_min = translation;
        let mut new_max = translation;

        for i in 0..3 {
            let axis = matrix.col(i).truncate();
            let a = axis * self.min[i];
            let b = axis * self.max[i];
            new_min += a.min(b);
            new_max += a.max(b);
        }

        Aabb { min: new_min, max: new_max }
    }

    /// Test if this AABB fully contains another AABB.
    pub fn contains(&self, other: &Aabb) -> bool {
        self.min.cmple(other.min).all() && self.max.cmpge(other.max).all()
    }
}

#[cfg(test)]
#[path = "aabb_tests.rs"]
mod tests;
