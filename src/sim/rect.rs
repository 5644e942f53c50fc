//! Axis-aligned integer rectangles for overlap testing

use glam::Vec2;

/// Integer pixel rectangle; `right` and `bottom` are exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Box spanning `size` pixels from a float position.
    ///
    /// Each edge is truncated toward zero independently, matching how the
    /// boxes are derived from sprite placement.
    pub fn from_pos_size(pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            left: pos.x as i32,
            top: pos.y as i32,
            right: (pos.x + width) as i32,
            bottom: (pos.y + height) as i32,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Strict overlap test; rectangles that only share an edge do not intersect
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }
}
