/// Surface: ready-made queue item bundling geometry, transform and bounds.
///
/// The geometry is whatever the backend uses for an indexed vertex array;
/// the surface only uploads its named matrices and asks the geometry to
/// draw itself.

use std::rc::Rc;
use glam::Mat4;
use crate::error::{Error, Result};
use crate::math::Aabb;
use super::queue_item::CommandQueueItem;
use super::shader::{QueueShader, UniformValue};

/// Backend geometry drawn by a [`Surface`]
pub trait SurfaceGeometry {
    /// Issue the indexed draw call. The shader is already bound.
    fn draw_indexed(&mut self) -> Result<()>;

    /// Release GPU buffers.
    fn dispose(&mut self) {}
}

/// Drawable surface with a model transform and local-space bounds.
pub struct Surface<G: SurfaceGeometry> {
    debug_name: String,
    geometry: G,
    model: Mat4,
    local_bounds: Option<Aabb>,
    visibility_checks: bool,
    /// Used instead of the queue's shader when set
    shader_override: Option<Rc<dyn QueueShader>>,
    /// Named uniforms set before drawing; `None` skips the upload
    pub model_uniform: Option<String>,
    pub view_projection_uniform: Option<String>,
    disposed: bool,
}

impl<G: SurfaceGeometry> Surface<G> {
    pub fn new(debug_name: impl Into<String>, geometry: G) -> Self {
        Self {
            debug_name: debug_name.into(),
            geometry,
            model: Mat4::IDENTITY,
            local_bounds: None,
            visibility_checks: true,
            shader_override: None,
            model_uniform: Some("m_Model".to_string()),
            view_projection_uniform: Some("m_ViewProjection".to_string()),
            disposed: false,
        }
    }

    /// Set the local-space bounds used for culling.
    pub fn with_bounds(mut self, bounds: Aabb) -> Self {
        self.local_bounds = Some(bounds);
        self
    }

    /// Draw with this shader even when the queue supplies one.
    pub fn with_shader(mut self, shader: Rc<dyn QueueShader>) -> Self {
        self.shader_override = Some(shader);
        self
    }

    /// Rely on the queue's constant buffer instead of named uniforms.
    pub fn without_named_uniforms(mut self) -> Self {
        self.model_uniform = None;
        self.view_projection_uniform = None;
        self
    }

    pub fn model(&self) -> &Mat4 {
        &self.model
    }

    pub fn set_model(&mut self, model: Mat4) {
        self.model = model;
    }

    pub fn set_bounds(&mut self, bounds: Option<Aabb>) {
        self.local_bounds = bounds;
    }

    pub fn set_visibility_checks(&mut self, enabled: bool) {
        self.visibility_checks = enabled;
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl<G: SurfaceGeometry> CommandQueueItem for Surface<G> {
    fn debug_name(&self) -> &str {
        &self.debug_name
    }

    fn payload_type(&self) -> &'static str {
        std::any::type_name::<G>()
    }

    /// Local bounds moved into world space by the model matrix.
    ///
    /// The sentinel and degenerate boxes pass through untouched so they
    /// keep meaning "always visible".
    fn aabb(&self) -> Option<Aabb> {
        self.local_bounds.map(|bounds| {
            if !bounds.is_cullable() {
                bounds
            } else {
                bounds.transformed(&self.model)
            }
        })
    }

    fn visibility_checks(&self) -> bool {
        self.visibility_checks
    }

    fn model_matrix(&self) -> Option<Mat4> {
        Some(self.model)
    }

    fn binds_own_shader(&self) -> bool {
        self.shader_override.is_some()
    }

    fn dispatch(&mut self, view_projection: &Mat4, shader: Option<&dyn QueueShader>) -> Result<()> {
        if self.disposed {
            return Err(Error::InvalidResource(format!("surface '{}' was disposed", self.debug_name)));
        }

        let shader = match (&self.shader_override, shader) {
            (Some(own), _) => {
                own.bind()?;
                Some(own.as_ref())
            }
            (None, queue_shader) => queue_shader,
        };

        if let Some(shader) = shader {
            if let Some(name) = &self.view_projection_uniform {
                shader.set_uniform(name, UniformValue::Mat4(*view_projection))?;
            }
            if let Some(name) = &self.model_uniform {
                shader.set_uniform(name, UniformValue::Mat4(self.model))?;
            }
        }

        self.geometry.draw_indexed()
    }

    fn dispose(&mut self) {
        if !self.disposed {
            self.geometry.dispose();
            self.disposed = true;
        }
    }
}

#[cfg(test)]
#[path = "surface_tests.rs"]
mod tests;
