/// Render state applied once per dispatched batch.
///
/// Replaces process-wide toggles with a value owned by each queue and an
/// injected setter implemented by the backend.

use crate::error::Result;

/// Fixed-function state for one queue batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawContext {
    pub depth_test: bool,
    pub depth_write: bool,
    /// Back-face culling
    pub cull_face: bool,
    /// Treat counter-clockwise triangles as front faces
    pub invert_culling: bool,
    pub alpha_blending: bool,
}

impl Default for DrawContext {
    fn default() -> Self {
        Self {
            depth_test: true,
            depth_write: true,
            cull_face: true,
            invert_culling: false,
            alpha_blending: true,
        }
    }
}

impl DrawContext {
    /// Overlay preset: no depth, no face culling, blending on.
    pub fn overlay() -> Self {
        Self {
            depth_test: false,
            depth_write: false,
            cull_face: false,
            invert_culling: false,
            alpha_blending: true,
        }
    }
}

/// Backend hook that applies a `DrawContext` to the device context.
pub trait RenderStateSetter {
    fn apply(&mut self, context: &DrawContext) -> Result<()>;
}

/// Setter that ignores the context, for hosts binding state out of band.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderState;

impl RenderStateSetter for NullRenderState {
    fn apply(&mut self, _context: &DrawContext) -> Result<()> {
        Ok(())
    }
}
