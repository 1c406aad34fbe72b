/// Drawable items held by a `CommandQueue`.

use std::cell::RefCell;
use std::rc::Rc;
use glam::Mat4;
use crate::error::Result;
use crate::math::Aabb;
use super::shader::QueueShader;

/// Shared handle to a queue item.
///
/// Client code keeps its own clone to mutate the item (transform, bounds)
/// between frames; the queue only holds a reference.
pub type QueueItemRef = Rc<RefCell<dyn CommandQueueItem>>;

/// Anything the queue can cull and dispatch.
pub trait CommandQueueItem {
    /// Identity used in logs and timing reports
    fn debug_name(&self) -> &str;

    /// Concrete payload type tag (e.g. the vertex type of the geometry)
    fn payload_type(&self) -> &'static str;

    /// World-space bounds. `None`, the zero/zero sentinel or a degenerate
    /// box mean "always visible".
    fn aabb(&self) -> Option<Aabb> {
        None
    }

    /// When false the item skips frustum culling entirely.
    fn visibility_checks(&self) -> bool {
        true
    }

    /// Model matrix to upload into the shared uniform block before
    /// `dispatch`. Items without one leave the block untouched.
    fn model_matrix(&self) -> Option<Mat4> {
        None
    }

    /// True when `dispatch` binds a shader other than the one it is
    /// handed. The queue then rebinds its own shader before the next item.
    fn binds_own_shader(&self) -> bool {
        false
    }

    /// Issue the item's draw calls.
    ///
    /// `view_projection` is the batch matrix; `shader` is the queue's
    /// shared shader, already bound, or `None` when the queue has none.
    fn dispatch(&mut self, view_projection: &Mat4, shader: Option<&dyn QueueShader>) -> Result<()>;

    /// Release the item's own resources. Called by `CommandQueue::dispose`.
    fn dispose(&mut self) {}
}

/// Wrap an item into a shareable handle.
pub fn queue_item<T: CommandQueueItem + 'static>(item: T) -> QueueItemRef {
    Rc::new(RefCell::new(item))
}

/// Reference equality between two item handles (data pointer only).
pub(crate) fn same_item(a: &QueueItemRef, b: &QueueItemRef) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}
