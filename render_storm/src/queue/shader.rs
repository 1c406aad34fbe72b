/// Shader abstraction consumed by the queue.
///
/// The queue never compiles or owns shaders. It binds the shared shader
/// once per batch and pushes the view-projection (and per-item model)
/// matrices through whichever upload path the `UniformLayout` selects.

use glam::{Mat4, Vec2, Vec3};
use bytemuck::{Pod, Zeroable};
use crate::error::Result;

/// Value accepted by `QueueShader::set_uniform`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Mat4(Mat4),
}

/// Shader handle implemented by the graphics backend.
///
/// All methods take `&self`: the same shader is shared between the queue
/// and its items, so implementations use interior mutability for any
/// cached state.
pub trait QueueShader {
    /// Debug name used in logs
    fn debug_name(&self) -> &str;

    /// Make this shader the active program (`Use()` / `VSSetShader`)
    fn bind(&self) -> Result<()>;

    /// Set a named uniform (OpenGL style backends)
    fn set_uniform(&self, name: &str, value: UniformValue) -> Result<()>;

    /// Upload raw bytes to a constant buffer slot (Direct3D11 style backends)
    fn set_constant_buffer(&self, slot: u32, data: &[u8]) -> Result<()>;
}

/// Per-batch uniform block.
///
/// Layout matches a `cbuffer { float4x4 viewProjection; float4x4 model; }`
/// (128 bytes, column-major).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct QueueData {
    pub view_projection: Mat4,
    pub model: Mat4,
}

impl Default for QueueData {
    fn default() -> Self {
        Self {
            view_projection: Mat4::IDENTITY,
            model: Mat4::IDENTITY,
        }
    }
}

/// How `QueueData` reaches the shader
#[derive(Debug, Clone, PartialEq)]
pub enum UniformLayout {
    /// Whole `QueueData` block written to one constant buffer slot
    ConstantBuffer { slot: u32 },
    /// Two named matrix uniforms
    Named { view_projection: String, model: String },
}

impl Default for UniformLayout {
    fn default() -> Self {
        UniformLayout::ConstantBuffer { slot: 0 }
    }
}

impl UniformLayout {
    /// Conventional OpenGL uniform names.
    pub fn named_default() -> Self {
        UniformLayout::Named {
            view_projection: "m_ViewProjection".to_string(),
            model: "m_Model".to_string(),
        }
    }

    /// Push the view-projection part of `data`.
    pub(crate) fn upload_view_projection(&self, shader: &dyn QueueShader, data: &QueueData) -> Result<()> {
        match self {
            UniformLayout::ConstantBuffer { slot } => {
                shader.set_constant_buffer(*slot, bytemuck::bytes_of(data))
            }
            UniformLayout::Named { view_projection, .. } => {
                shader.set_uniform(view_projection, UniformValue::Mat4(data.view_projection))
            }
        }
    }

    /// Push the model part of `data`.
    pub(crate) fn upload_model(&self, shader: &dyn QueueShader, data: &QueueData) -> Result<()> {
        match self {
            UniformLayout::ConstantBuffer { slot } => {
                shader.set_constant_buffer(*slot, bytemuck::bytes_of(data))
            }
            UniformLayout::Named { model, .. } => {
                shader.set_uniform(model, UniformValue::Mat4(data.model))
            }
        }
    }
}

#[cfg(test)]
#[path = "shader_tests.rs"]
mod tests;
