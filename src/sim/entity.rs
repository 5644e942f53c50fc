//! Shared entity capability

use super::rect::Rect;
use crate::renderer::Surface;

/// Something that moves each tick, collides, and draws itself
pub trait Entity {
    /// Advance one tick and recompute the bounding box
    fn update(&mut self);

    /// Issue draw calls for the current state
    fn draw(&self, surface: &mut dyn Surface);

    /// Box as of the last `update`
    fn bounding_box(&self) -> Rect;
}
