/// Dispatch options and per-dispatch diagnostics.

use std::time::Duration;
use bitflags::bitflags;

bitflags! {
    /// Per-call switches for `CommandQueue::dispatch`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DispatchFlags: u32 {
        /// Frustum-cull items that declare bounds
        const CULL               = 1 << 0;
        /// Bind the shared shader and upload `QueueData`
        const UPLOAD_UNIFORMS    = 1 << 1;
        /// Apply the queue's `DrawContext` once before the items
        const APPLY_RENDER_STATE = 1 << 2;
        /// Record a wall-clock timing for every dispatched item
        const PROFILE            = 1 << 3;
    }
}

impl Default for DispatchFlags {
    fn default() -> Self {
        DispatchFlags::all()
    }
}

/// Wall-clock time spent in one item's `dispatch`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTiming {
    pub debug_name: String,
    pub duration: Duration,
}

/// Result of one `CommandQueue::dispatch`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchStats {
    /// Items whose `dispatch` was called
    pub drawn_items: usize,
    /// Items skipped by frustum culling
    pub culled_items: usize,
    /// Items skipped because client code held a borrow of them
    pub skipped_items: usize,
    /// Whether this call had to rebuild the cached frustum
    pub frustum_rebuilt: bool,
    /// Whole call, including uniform upload and render state
    pub total_time: Duration,
    /// One entry per drawn item, in dispatch order (only with `PROFILE`)
    pub item_timings: Vec<ItemTiming>,
}

impl DispatchStats {
    /// Items considered in this dispatch (drawn + culled + skipped).
    pub fn total_items(&self) -> usize {
        self.drawn_items + self.culled_items + self.skipped_items
    }

    /// Slowest item of the batch, if timings were recorded.
    pub fn slowest_item(&self) -> Option<&ItemTiming> {
        self.item_timings.iter().max_by_key(|timing| timing.duration)
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
