//! Command queue module
//!
//! Item capability trait, shader and render-state seams, dispatch options
//! and the culling `CommandQueue` itself.

mod command_queue;
mod dispatch;
mod draw_context;
mod queue_item;
mod shader;
mod surface;

#[cfg(test)]
pub(crate) mod mock;

pub use command_queue::{CommandQueue, CommandQueueConfig, SharedShader};
pub use dispatch::{DispatchFlags, DispatchStats, ItemTiming};
pub use draw_context::{DrawContext, RenderStateSetter, NullRenderState};
pub use queue_item::{CommandQueueItem, QueueItemRef, queue_item};
pub use shader::{QueueShader, QueueData, UniformLayout, UniformValue};
pub use surface::{Surface, SurfaceGeometry};
