/// Mock shader, items, render state and geometry for unit tests
/// (no graphics backend required).

use std::cell::RefCell;
use std::rc::Rc;
use glam::Mat4;
use crate::error::{Error, Result};
use crate::math::Aabb;
use super::draw_context::{DrawContext, RenderStateSetter};
use super::queue_item::CommandQueueItem;
use super::shader::{QueueShader, UniformValue};
use super::surface::SurfaceGeometry;

// ============================================================================
// Mock Shader
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum ShaderCall {
    Bind,
    Uniform(String, UniformValue),
    ConstantBuffer(u32, Vec<u8>),
}

pub struct MockShader {
    pub name: String,
    pub calls: RefCell<Vec<ShaderCall>>,
    pub fail_bind: bool,
}

impl MockShader {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            calls: RefCell::new(Vec::new()),
            fail_bind: false,
        }
    }

    pub fn failing(name: &str) -> Self {
        Self { fail_bind: true, ..Self::new(name) }
    }

    pub fn bind_count(&self) -> usize {
        self.calls.borrow().iter().filter(|c| **c == ShaderCall::Bind).count()
    }

    pub fn constant_buffer_uploads(&self) -> Vec<(u32, Vec<u8>)> {
        self.calls.borrow().iter().filter_map(|call| match call {
            ShaderCall::ConstantBuffer(slot, data) => Some((*slot, data.clone())),
            _ => None,
        }).collect()
    }

    pub fn uniforms(&self) -> Vec<(String, UniformValue)> {
        self.calls.borrow().iter().filter_map(|call| match call {
            ShaderCall::Uniform(name, value) => Some((name.clone(), *value)),
            _ => None,
        }).collect()
    }
}

impl QueueShader for MockShader {
    fn debug_name(&self) -> &str {
        &self.name
    }

    fn bind(&self) -> Result<()> {
        if self.fail_bind {
            return Err(Error::BackendError(format!("{} failed to bind", self.name)));
        }
        self.calls.borrow_mut().push(ShaderCall::Bind);
        Ok(())
    }

    fn set_uniform(&self, name: &str, value: UniformValue) -> Result<()> {
        self.calls.borrow_mut().push(ShaderCall::Uniform(name.to_string(), value));
        Ok(())
    }

    fn set_constant_buffer(&self, slot: u32, data: &[u8]) -> Result<()> {
        self.calls.borrow_mut().push(ShaderCall::ConstantBuffer(slot, data.to_vec()));
        Ok(())
    }
}

// ============================================================================
// Mock Item
// ============================================================================

pub struct MockItem {
    pub name: String,
    pub bounds: Option<Aabb>,
    pub model: Option<Mat4>,
    pub visibility_checks: bool,
    pub fail: bool,
    pub dispatch_count: usize,
    pub dispose_count: usize,
    /// Whether each dispatch received a shader
    pub saw_shader: Vec<bool>,
    pub last_view_projection: Option<Mat4>,
    /// Shared dispatch order across items
    pub order: Option<Rc<RefCell<Vec<String>>>>,
}

impl MockItem {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            bounds: None,
            model: None,
            visibility_checks: true,
            fail: false,
            dispatch_count: 0,
            dispose_count: 0,
            saw_shader: Vec::new(),
            last_view_projection: None,
            order: None,
        }
    }

    pub fn with_bounds(mut self, bounds: Aabb) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn with_model(mut self, model: Mat4) -> Self {
        self.model = Some(model);
        self
    }

    pub fn with_order(mut self, order: &Rc<RefCell<Vec<String>>>) -> Self {
        self.order = Some(order.clone());
        self
    }

    pub fn shared(self) -> Rc<RefCell<MockItem>> {
        Rc::new(RefCell::new(self))
    }
}

impl CommandQueueItem for MockItem {
    fn debug_name(&self) -> &str {
        &self.name
    }

    fn payload_type(&self) -> &'static str {
        "MockItem"
    }

    fn aabb(&self) -> Option<Aabb> {
        self.bounds
    }

    fn visibility_checks(&self) -> bool {
        self.visibility_checks
    }

    fn model_matrix(&self) -> Option<Mat4> {
        self.model
    }

    fn dispatch(&mut self, view_projection: &Mat4, shader: Option<&dyn QueueShader>) -> Result<()> {
        if self.fail {
            return Err(Error::DispatchFailed {
                item: self.name.clone(),
                reason: "mock failure".to_string(),
            });
        }
        self.dispatch_count += 1;
        self.saw_shader.push(shader.is_some());
        self.last_view_projection = Some(*view_projection);
        if let Some(order) = &self.order {
            order.borrow_mut().push(self.name.clone());
        }
        Ok(())
    }

    fn dispose(&mut self) {
        self.dispose_count += 1;
    }
}

// ============================================================================
// Mock Render State
// ============================================================================

#[derive(Default)]
pub struct MockRenderState {
    pub applied: Vec<DrawContext>,
    pub fail: bool,
}

impl RenderStateSetter for MockRenderState {
    fn apply(&mut self, context: &DrawContext) -> Result<()> {
        if self.fail {
            return Err(Error::BackendError("rasterizer state rejected".to_string()));
        }
        self.applied.push(*context);
        Ok(())
    }
}

// ============================================================================
// Mock Geometry
// ============================================================================

#[derive(Default)]
pub struct MockGeometry {
    pub draws: usize,
    pub disposed: usize,
}

impl SurfaceGeometry for MockGeometry {
    fn draw_indexed(&mut self) -> Result<()> {
        self.draws += 1;
        Ok(())
    }

    fn dispose(&mut self) {
        self.disposed += 1;
    }
}
