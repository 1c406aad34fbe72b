/*!
# RenderStorm

Frustum culling and batched draw dispatch for a thin rendering layer.

The crate owns no GPU resources. Backends plug in through traits and the
queue only orchestrates: bind the shared shader, upload the batch
uniforms, apply render state, cull, dispatch.

## Architecture

- **Frustum**: six clip planes extracted from a view-projection matrix
- **Camera**: origin/angle/FOV camera producing the matrices
- **CommandQueueItem**: capability trait for anything drawable
- **CommandQueue**: ordered items, frustum cache, per-frame dispatch
- **QueueShader / RenderStateSetter**: backend seams
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod math;
pub mod camera;
pub mod queue;

// Main storm namespace module
pub mod storm {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging host
    pub use crate::engine::Engine;

    // Logging sub-module (types only, macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, FacadeLogger};
    }

    pub use crate::math::Aabb;
    pub use crate::camera::{Camera, Frustum};

    // Queue sub-module with all dispatch types
    pub mod queue {
        pub use crate::queue::*;
    }
}

// Re-export math library at crate root
pub use glam;
