//! Render surface contract
//!
//! The platform owns the actual drawable; the game only issues draw calls
//! through this trait, one frame at a time.

use glam::Vec2;

use crate::assets::Sprite;
use crate::sim::Rect;

/// RGBA, each channel 0-1
pub type Color = [f32; 4];

/// Colors used by the draw pass
pub mod colors {
    use super::Color;

    pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
    /// Sprites are drawn untinted
    pub const SPRITE_TINT: Color = WHITE;
}

/// A drawable target for one frame
pub trait Surface {
    /// Whether the target can currently be drawn to. When false the whole
    /// draw pass is skipped for the tick.
    fn is_valid(&self) -> bool;

    /// Fill the whole frame with a color
    fn clear(&mut self, color: Color);

    /// Draw `src` (sprite pixel space, `None` for the whole bitmap) into `dst`
    fn draw_sprite(&mut self, sprite: Sprite, src: Option<Rect>, dst: Rect);

    /// Draw a line of text with its baseline-left at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color);

    /// Hand the finished frame to the display
    fn present(&mut self);
}
