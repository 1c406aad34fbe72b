/// CommandQueue: frustum-culled batch dispatch of drawable items.
///
/// A queue holds item references in insertion order and, once per frame,
/// binds its shared shader, uploads the view-projection matrix, applies its
/// render state and dispatches every item whose bounds survive frustum
/// culling. Dispatch never drains the queue: items stay queued for the
/// next frame until removed, cleared or disposed.

use std::rc::Rc;
use std::time::Instant;
use glam::Mat4;
use rustc_hash::FxHashSet;
use crate::camera::Frustum;
use crate::error::Result;
use crate::{storm_debug, storm_error, storm_trace, storm_warn};
use super::dispatch::{DispatchFlags, DispatchStats, ItemTiming};
use super::draw_context::{DrawContext, RenderStateSetter};
use super::queue_item::{same_item, CommandQueueItem, QueueItemRef};
use super::shader::{QueueData, QueueShader, UniformLayout};

const LOG_SOURCE: &str = "storm::CommandQueue";

/// Shared shader handle. The same shader may serve several queues.
pub type SharedShader = Rc<dyn QueueShader>;

/// Construction-time settings of a queue
#[derive(Debug, Clone, PartialEq)]
pub struct CommandQueueConfig {
    /// Name used in log output
    pub debug_name: String,
    /// Render state applied once per dispatch
    pub draw_context: DrawContext,
    /// Upload path for `QueueData`
    pub uniform_layout: UniformLayout,
}

impl Default for CommandQueueConfig {
    fn default() -> Self {
        Self {
            debug_name: "CommandQueue".to_string(),
            draw_context: DrawContext::default(),
            uniform_layout: UniformLayout::default(),
        }
    }
}

/// Last frustum together with the matrix it was built from
#[derive(Debug, Clone, Copy)]
struct CachedFrustum {
    view_projection: Mat4,
    frustum: Frustum,
}

/// Ordered batch of drawable items sharing one shader.
///
/// Single-threaded: items and shader are `Rc` handles.
pub struct CommandQueue {
    config: CommandQueueConfig,
    items: Vec<QueueItemRef>,
    shader: Option<SharedShader>,
    queue_data: QueueData,
    frustum_cache: Option<CachedFrustum>,
    frustum_rebuilds: u64,
    last_stats: DispatchStats,
}

impl CommandQueue {
    /// Create an empty queue with the default configuration.
    ///
    /// A `None` shader means the caller binds shaders out of band; items
    /// are still dispatched.
    pub fn new(shader: Option<SharedShader>) -> Self {
        Self::with_config(shader, CommandQueueConfig::default())
    }

    pub fn with_config(shader: Option<SharedShader>, config: CommandQueueConfig) -> Self {
        Self {
            config,
            items: Vec::new(),
            shader,
            queue_data: QueueData::default(),
            frustum_cache: None,
            frustum_rebuilds: 0,
            last_stats: DispatchStats::default(),
        }
    }

    // ===== ITEMS =====

    /// Append an item. The same item may be pushed more than once and is
    /// then dispatched once per occurrence.
    pub fn push(&mut self, item: QueueItemRef) {
        self.items.push(item);
    }

    /// Remove the first occurrence of `item` (reference equality).
    ///
    /// Returns `false` if the item is not queued.
    pub fn remove(&mut self, item: &QueueItemRef) -> bool {
        match self.items.iter().position(|queued| same_item(queued, item)) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, item: &QueueItemRef) -> bool {
        self.items.iter().any(|queued| same_item(queued, item))
    }

    /// Drop every held reference without disposing the items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[QueueItemRef] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // ===== SETTINGS =====

    pub fn config(&self) -> &CommandQueueConfig {
        &self.config
    }

    pub fn shader(&self) -> Option<&SharedShader> {
        self.shader.as_ref()
    }

    pub fn set_shader(&mut self, shader: Option<SharedShader>) {
        self.shader = shader;
    }

    pub fn draw_context(&self) -> &DrawContext {
        &self.config.draw_context
    }

    pub fn set_draw_context(&mut self, context: DrawContext) {
        self.config.draw_context = context;
    }

    /// Uniform block as last uploaded.
    pub fn queue_data(&self) -> &QueueData {
        &self.queue_data
    }

    // ===== DIAGNOSTICS =====

    /// Stats of the last successful dispatch.
    pub fn last_stats(&self) -> &DispatchStats {
        &self.last_stats
    }

    /// Items dispatched by the last successful dispatch.
    pub fn drawn_items(&self) -> usize {
        self.last_stats.drawn_items
    }

    /// Items culled by the last successful dispatch.
    pub fn culled_items(&self) -> usize {
        self.last_stats.culled_items
    }

    /// Number of frustum rebuilds since the queue was created.
    pub fn frustum_rebuilds(&self) -> u64 {
        self.frustum_rebuilds
    }

    /// Force the next culled dispatch to rebuild the frustum.
    pub fn invalidate_frustum_cache(&mut self) {
        self.frustum_cache = None;
    }

    // ===== DISPATCH =====

    /// Cull and dispatch every queued item for one frame.
    ///
    /// Errors from the shader, the render-state setter or any item are
    /// returned immediately; items after a failing one are not dispatched
    /// and `last_stats` keeps the previous frame's values.
    ///
    /// An item whose handle is borrowed elsewhere during the call is
    /// skipped with a warning and counted in `skipped_items`.
    pub fn dispatch(
        &mut self,
        view_projection: &Mat4,
        flags: DispatchFlags,
        render_state: &mut dyn RenderStateSetter,
    ) -> Result<DispatchStats> {
        let start = Instant::now();
        let mut stats = DispatchStats::default();
        let shader = self.shader.clone();
        let upload = flags.contains(DispatchFlags::UPLOAD_UNIFORMS);

        self.queue_data = QueueData {
            view_projection: *view_projection,
            model: Mat4::IDENTITY,
        };

        if upload {
            if let Some(shader) = &shader {
                shader.bind()?;
                self.config.uniform_layout.upload_view_projection(shader.as_ref(), &self.queue_data)?;
            }
        }

        if flags.contains(DispatchFlags::APPLY_RENDER_STATE) {
            render_state.apply(&self.config.draw_context)?;
        }

        // Set after an item bound its own shader
        let mut rebind = false;

        for index in 0..self.items.len() {
            let handle = Rc::clone(&self.items[index]);
            let Ok(mut item) = handle.try_borrow_mut() else {
                storm_warn!(
                    LOG_SOURCE,
                    "[{}] Item #{} still borrowed during dispatch, skipped",
                    self.config.debug_name, index
                );
                stats.skipped_items += 1;
                continue;
            };

            if flags.contains(DispatchFlags::CULL) && !self.passes_culling(&*item, view_projection, &mut stats) {
                stats.culled_items += 1;
                continue;
            }

            if upload {
                if let Some(shader) = &shader {
                    if rebind {
                        shader.bind()?;
                        rebind = false;
                    }
                    if let Some(model) = item.model_matrix() {
                        self.queue_data.model = model;
                        self.config.uniform_layout.upload_model(shader.as_ref(), &self.queue_data)?;
                    }
                }
            }

            let item_start = Instant::now();
            if let Err(error) = item.dispatch(view_projection, shader.as_deref()) {
                storm_error!(
                    LOG_SOURCE,
                    "[{}] Item '{}' failed to dispatch: {}",
                    self.config.debug_name, item.debug_name(), error
                );
                return Err(error);
            }
            rebind |= upload && item.binds_own_shader();

            if flags.contains(DispatchFlags::PROFILE) {
                stats.item_timings.push(ItemTiming {
                    debug_name: item.debug_name().to_string(),
                    duration: item_start.elapsed(),
                });
            }
            stats.drawn_items += 1;
        }

        stats.total_time = start.elapsed();
        self.last_stats = stats.clone();
        Ok(stats)
    }

    /// False when the item declares cullable bounds outside the frustum.
    fn passes_culling(&mut self, item: &dyn CommandQueueItem, view_projection: &Mat4, stats: &mut DispatchStats) -> bool {
        if !item.visibility_checks() {
            return true;
        }

        let aabb = match item.aabb() {
            Some(aabb) if aabb.is_cullable() => aabb,
            _ => return true,
        };

        let (frustum, rebuilt) = self.frustum_for(view_projection);
        stats.frustum_rebuilt |= rebuilt;

        let visible = frustum.intersects_aabb(&aabb);
        if !visible {
            storm_trace!(
                LOG_SOURCE,
                "[{}] Culled '{}' ({}) min={} max={}",
                self.config.debug_name, item.debug_name(), item.payload_type(), aabb.min, aabb.max
            );
        }
        visible
    }

    /// Cached frustum for `view_projection`, rebuilt on exact mismatch.
    fn frustum_for(&mut self, view_projection: &Mat4) -> (Frustum, bool) {
        if let Some(cached) = &self.frustum_cache {
            if cached.view_projection == *view_projection {
                return (cached.frustum, false);
            }
        }

        let frustum = Frustum::from_view_projection(view_projection);
        self.frustum_cache = Some(CachedFrustum {
            view_projection: *view_projection,
            frustum,
        });
        self.frustum_rebuilds += 1;

        storm_debug!(
            LOG_SOURCE,
            "[{}] Frustum rebuilt (rebuild #{})",
            self.config.debug_name, self.frustum_rebuilds
        );

        (frustum, true)
    }

    // ===== LIFETIME =====

    /// Dispose every distinct held item once, then release the shader.
    ///
    /// The queue is empty afterwards; calling `dispose` again does nothing.
    pub fn dispose(&mut self) {
        let items = std::mem::take(&mut self.items);
        let mut disposed: FxHashSet<*const ()> = FxHashSet::default();

        for item in &items {
            if !disposed.insert(Rc::as_ptr(item) as *const ()) {
                continue;
            }
            match item.try_borrow_mut() {
                Ok(mut item) => item.dispose(),
                Err(_) => storm_warn!(
                    LOG_SOURCE,
                    "[{}] Item still borrowed during dispose, skipped",
                    self.config.debug_name
                ),
            }
        }

        self.shader = None;
        self.frustum_cache = None;

        if !items.is_empty() {
            storm_debug!(
                LOG_SOURCE,
                "[{}] Disposed {} items",
                self.config.debug_name, disposed.len()
            );
        }
    }
}

#[cfg(test)]
#[path = "command_queue_tests.rs"]
mod tests;
