//! RenderStorm headless demo
//!
//! Drives a camera around a ring of surfaces and dispatches them through a
//! CommandQueue backed by a console "GPU". Logs go through the `log` facade,
//! so `RUST_LOG=debug` or `RUST_LOG=trace` shows the queue's culling work.

use std::cell::Cell;
use std::f32::consts::TAU;
use std::rc::Rc;
use log::info;
use render_storm::glam::{Mat4, Vec3};
use render_storm::storm::{Aabb, Camera, Engine, Result};
use render_storm::storm::log::{FacadeLogger, LogSeverity};
use render_storm::storm::queue::{
    queue_item, CommandQueue, CommandQueueConfig, DispatchFlags, DrawContext, QueueShader,
    RenderStateSetter, Surface, SurfaceGeometry, UniformValue,
};

const RING_SIZE: usize = 12;
const RING_RADIUS: f32 = 20.0;
const FRAMES: usize = 8;
const ASPECT_RATIO: f32 = 16.0 / 9.0;

/// Shader that only counts what it is asked to do
#[derive(Default)]
struct ConsoleShader {
    uploads: Cell<usize>,
}

impl QueueShader for ConsoleShader {
    fn debug_name(&self) -> &str {
        "ConsoleShader"
    }

    fn bind(&self) -> Result<()> {
        log::trace!("bind {}", self.debug_name());
        Ok(())
    }

    fn set_uniform(&self, name: &str, _value: UniformValue) -> Result<()> {
        log::trace!("uniform {}", name);
        self.uploads.set(self.uploads.get() + 1);
        Ok(())
    }

    fn set_constant_buffer(&self, slot: u32, data: &[u8]) -> Result<()> {
        log::trace!("constant buffer slot {} ({} bytes)", slot, data.len());
        self.uploads.set(self.uploads.get() + 1);
        Ok(())
    }
}

struct ConsoleState;

impl RenderStateSetter for ConsoleState {
    fn apply(&mut self, context: &DrawContext) -> Result<()> {
        log::trace!("render state {:?}", context);
        Ok(())
    }
}

struct Cube {
    index_count: u32,
}

impl SurfaceGeometry for Cube {
    fn draw_indexed(&mut self) -> Result<()> {
        log::trace!("draw {} indices", self.index_count);
        Ok(())
    }

    fn dispose(&mut self) {
        log::trace!("release cube buffers");
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Route engine logs through env_logger and let its filter decide
    Engine::set_logger(FacadeLogger);
    Engine::set_min_severity(LogSeverity::Trace);

    if let Err(e) = run() {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let shader = Rc::new(ConsoleShader::default());
    let config = CommandQueueConfig {
        debug_name: "RingQueue".to_string(),
        ..CommandQueueConfig::default()
    };
    let mut queue = CommandQueue::with_config(Some(shader.clone()), config);

    for i in 0..RING_SIZE {
        let angle = TAU * i as f32 / RING_SIZE as f32;
        let position = Vec3::new(angle.sin(), 0.0, angle.cos()) * RING_RADIUS;
        let mut surface = Surface::new(format!("Cube{}", i), Cube { index_count: 36 })
            .with_bounds(Aabb::from_center_half_extents(Vec3::ZERO, Vec3::splat(1.0)))
            .without_named_uniforms();
        surface.set_model(Mat4::from_translation(position));
        queue.push(queue_item(surface));
    }

    let mut camera = Camera::default();
    let mut state = ConsoleState;

    for frame in 0..FRAMES {
        camera.angle.y = TAU * frame as f32 / FRAMES as f32;
        let view_projection = camera.view_projection(ASPECT_RATIO);
        let stats = queue.dispatch(&view_projection, DispatchFlags::default(), &mut state)?;

        let slowest = stats
            .slowest_item()
            .map(|t| format!("{} ({:?})", t.debug_name, t.duration))
            .unwrap_or_else(|| "-".to_string());
        info!(
            "Frame {}: yaw={:.2} drawn={} culled={} rebuilt={} time={:?} slowest={}",
            frame, camera.angle.y, stats.drawn_items, stats.culled_items,
            stats.frustum_rebuilt, stats.total_time, slowest
        );
    }

    info!(
        "Frustum rebuilds: {}, uniform uploads: {}",
        queue.frustum_rebuilds(),
        shader.uploads.get()
    );

    queue.dispose();
    Ok(())
}
