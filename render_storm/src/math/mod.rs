//! Math helpers shared by culling and queue items.

mod aabb;

pub use aabb::Aabb;
