/// Camera: position, orientation and perspective parameters.
///
/// Produces the view, projection and combined view-projection matrices fed
/// to `CommandQueue::dispatch`. Right-handed, zero-to-one depth.

use glam::{EulerRot, Mat4, Vec3};
use super::frustum::Frustum;

/// Free-look perspective camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// World-space position
    pub origin: Vec3,
    /// Rotation in radians: x = pitch, y = yaw, z = roll
    pub angle: Vec3,
    /// Vertical field of view in degrees
    pub fov: f32,
    pub near_plane: f32,
    pub far_plane: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            angle: Vec3::ZERO,
            fov: 90.0,
            near_plane: 0.1,
            far_plane: 1024.0,
        }
    }
}

impl Camera {
    /// Unit forward vector. +Z when all angles are zero.
    pub fn forward(&self) -> Vec3 {
        let rotation = Mat4::from_euler(EulerRot::YXZ, self.angle.y, self.angle.x, self.angle.z);
        rotation.transform_vector3(Vec3::Z)
    }

    /// View matrix looking from `origin` along `forward()`, world up = +Y.
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.origin, self.origin + self.forward(), Vec3::Y)
    }

    pub fn projection(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), aspect_ratio, self.near_plane, self.far_plane)
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection(&self, aspect_ratio: f32) -> Mat4 {
        self.projection(aspect_ratio) * self.view()
    }

    /// Frustum of this camera for the given aspect ratio.
    pub fn frustum(&self, aspect_ratio: f32) -> Frustum {
        Frustum::from_view_projection(&self.view_projection(aspect_ratio))
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
